//! 快速预览：封面、价格、评分、描述与分类

use leptos::prelude::*;
use rentals_shared::Item;
use rentals_shared::presentation::{MODAL_IMAGE, STATIC_RATING, cover_image, format_price};

use crate::components::icons::XMark;
use crate::components::lazy_image::LazyImage;
use crate::components::modal::{CategoryChips, Description, Rating, sync_dialog};
use crate::config::use_config;

/// `item` 为 None 时隐藏
#[component]
pub fn QuickViewModal(
    #[prop(into)] item: Signal<Option<Item>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    sync_dialog(dialog_ref, move || item.with(Option::is_some));

    let body = move || {
        item.get().map(|item| {
            let src = cover_image(&item, &config.api_base, MODAL_IMAGE);
            view! {
                <div class="flex items-center justify-between border-b border-base-300 p-4">
                    <h3 class="text-lg font-semibold">{item.name.clone()}</h3>
                    <button type="button" class="btn btn-ghost btn-sm btn-square" on:click=move |_| on_close.run(())>
                        <XMark attr:class="h-5 w-5" />
                    </button>
                </div>
                <div class="grid gap-6 overflow-y-auto p-6 md:grid-cols-2">
                    <div class="flex items-center justify-center">
                        <LazyImage src=src alt=item.name.clone() class="max-h-[60vh] w-full rounded-lg object-contain" />
                    </div>
                    <div class="flex flex-col gap-4">
                        <p class="text-2xl font-bold text-primary">{format_price(item.price_per_h)}</p>
                        <Rating value=STATIC_RATING />
                        <Description text=item.description.clone() />
                        <CategoryChips categories=item.categories.clone() />
                        <button type="button" class="btn btn-primary mt-auto w-full">"Reservar ahora"</button>
                    </div>
                </div>
            }
        })
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box flex max-h-[90vh] w-full max-w-3xl flex-col p-0">{body}</div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
