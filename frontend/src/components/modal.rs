//! 原生 `<dialog>` 的公共部分

use leptos::html::Dialog;
use leptos::prelude::*;
use rentals_shared::Category;
use rentals_shared::presentation::{RATING_MAX, rating_stars};

use crate::components::icons::Star;

/// 让 `<dialog>` 的打开状态跟随 signal
pub fn sync_dialog(dialog_ref: NodeRef<Dialog>, open: impl Fn() -> bool + 'static) {
    Effect::new(move |_| {
        let open = open();
        if let Some(dialog) = dialog_ref.get() {
            if open {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });
}

/// 星级评分
#[component]
pub fn Rating(value: u8) -> impl IntoView {
    let stars = rating_stars(value)
        .into_iter()
        .map(|lit| {
            let class = if lit {
                "h-5 w-5 fill-amber-400 stroke-amber-400"
            } else {
                "h-5 w-5 fill-none stroke-base-300"
            };
            view! { <Star attr:class=class /> }
        })
        .collect_view();

    view! {
        <div class="flex items-center gap-1" title=format!("{}/{}", value, RATING_MAX)>
            {stars}
            <span class="ml-1 text-xs text-base-content/60">{format!("({:.1})", value as f32)}</span>
        </div>
    }
}

#[component]
pub fn CategoryChips(categories: Vec<Category>) -> impl IntoView {
    (!categories.is_empty()).then(|| {
        view! {
            <div class="flex flex-wrap gap-2">
                {categories
                    .into_iter()
                    .map(|c| view! { <span class="badge badge-ghost">{c.name}</span> })
                    .collect_view()}
            </div>
        }
    })
}

/// 描述，缺失时显示占位文字
#[component]
pub fn Description(text: Option<String>) -> impl IntoView {
    match text.filter(|t| !t.trim().is_empty()) {
        Some(text) => view! { <p class="prose max-w-none text-sm leading-relaxed">{text}</p> }.into_any(),
        None => view! { <p class="text-sm text-base-content/60">"Sin descripción."</p> }.into_any(),
    }
}
