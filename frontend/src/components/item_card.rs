//! 物品卡片

use leptos::prelude::*;
use rentals_shared::Item;
use rentals_shared::presentation::{CARD_IMAGE, cover_image, format_price};

use crate::components::icons::{Eye, Heart};
use crate::components::lazy_image::LazyImage;
use crate::config::use_config;

#[component]
pub fn ItemCard(
    item: Item,
    #[prop(into)] on_quick_view: Callback<Item>,
    #[prop(into)] on_details: Callback<Item>,
) -> impl IntoView {
    let config = use_config();
    let src = cover_image(&item, &config.api_base, CARD_IMAGE);
    let item = StoredValue::new(item);
    let quick_view = move || on_quick_view.run(item.get_value());

    let (name, description, price, available) = item.with_value(|it| {
        (
            it.name.clone(),
            it.description.clone().filter(|d| !d.trim().is_empty()),
            format_price(it.price_per_h),
            it.available,
        )
    });

    view! {
        <article class="group mx-auto flex w-full max-w-[15rem] flex-col overflow-hidden rounded-lg bg-base-100 shadow transition-transform duration-200 hover:-translate-y-1 hover:shadow-lg">
            <div class="relative cursor-pointer" on:click=move |_| quick_view()>
                <LazyImage src=src alt=name.clone() class="aspect-[4/3] w-full object-cover" />

                <Show when=move || !available>
                    <span class="absolute left-0 top-0 rounded-br-md bg-error/90 px-2 py-0.5 text-xs font-semibold uppercase tracking-wide text-error-content">
                        "Alquilado"
                    </span>
                </Show>

                <div class="absolute inset-0 flex items-start justify-end gap-2 p-2 opacity-0 transition-opacity group-hover:opacity-100">
                    <button
                        type="button"
                        title="Vista rápida"
                        class="btn btn-circle btn-xs bg-base-100/90"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            quick_view();
                        }
                    >
                        <Eye attr:class="h-4 w-4" />
                    </button>
                    <button
                        type="button"
                        title="Favorito"
                        class="btn btn-circle btn-xs bg-base-100/90"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <Heart attr:class="h-4 w-4" />
                    </button>
                </div>
            </div>

            <div class="flex flex-1 flex-col gap-2 p-4">
                <h3
                    class="line-clamp-1 cursor-pointer text-lg font-semibold hover:text-primary"
                    on:click=move |_| on_details.run(item.get_value())
                >
                    {name}
                </h3>
                {description.map(|d| view! { <p class="line-clamp-2 text-sm text-base-content/70">{d}</p> })}
                <div class="mt-auto flex items-center justify-between">
                    <p class="text-base font-bold text-primary">{price}</p>
                    <span class=if available { "badge badge-success" } else { "badge badge-error" }>
                        {if available { "Disponible" } else { "Alquilado" }}
                    </span>
                </div>
            </div>
        </article>
    }
}
