use leptos::prelude::*;

/// 懒加载图片，加载完成后淡入
#[component]
pub fn LazyImage(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);

    // 地址变化时重新淡入
    Effect::new(move |_| {
        src.track();
        set_loaded.set(false);
    });

    view! {
        <img
            src=move || src.get()
            alt=alt
            loading="lazy"
            on:load=move |_| set_loaded.set(true)
            class=move || format!(
                "{} transition-opacity duration-500 {}",
                class,
                if loaded.get() { "opacity-100" } else { "opacity-0" }
            )
        />
    }
}
