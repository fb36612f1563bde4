//! 物品详情：图库（缩略图切换）与完整信息
//!
//! 组件自身只持有当前选中的缩略图索引，其余全部由 `item` 推导。

use leptos::prelude::*;
use rentals_shared::Item;
use rentals_shared::presentation::{MODAL_IMAGE, STATIC_RATING, format_price, gallery};

use crate::components::icons::{Clock, ShieldCheck, XMark};
use crate::components::lazy_image::LazyImage;
use crate::components::modal::{CategoryChips, Description, Rating, sync_dialog};
use crate::config::use_config;

#[component]
pub fn ItemDetailModal(
    #[prop(into)] item: Signal<Option<Item>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (active, set_active) = signal(0usize);
    sync_dialog(dialog_ref, move || item.with(Option::is_some));

    // 切换物品时回到第一张
    Effect::new(move |_| {
        item.track();
        set_active.set(0);
    });

    let body = move || {
        item.get().map(|item| {
            let images = gallery(&item, &config.api_base, MODAL_IMAGE);
            let count = images.len();
            let images = StoredValue::new(images);
            let main_src = Signal::derive(move || {
                images.with_value(|g| g.get(active.get()).or_else(|| g.first()).cloned().unwrap_or_default())
            });

            let thumbnails = (count > 1).then(|| {
                view! {
                    <div class="mt-4 flex gap-2 overflow-x-auto">
                        {images
                            .get_value()
                            .into_iter()
                            .enumerate()
                            .map(|(i, src)| view! {
                                <button
                                    type="button"
                                    class=move || if active.get() == i {
                                        "shrink-0 overflow-hidden rounded-md border ring-2 ring-primary"
                                    } else {
                                        "shrink-0 overflow-hidden rounded-md border"
                                    }
                                    on:click=move |_| set_active.set(i)
                                >
                                    <LazyImage src=src alt="" class="h-16 w-24 object-cover" />
                                </button>
                            })
                            .collect_view()}
                    </div>
                }
            });

            view! {
                <header class="flex items-center justify-between border-b border-base-300 px-6 py-4">
                    <h3 class="text-lg font-semibold">{item.name.clone()}</h3>
                    <button type="button" class="btn btn-ghost btn-sm btn-square" on:click=move |_| on_close.run(())>
                        <XMark attr:class="h-6 w-6" />
                    </button>
                </header>
                <section class="flex flex-1 flex-col gap-8 overflow-y-auto p-6 md:flex-row">
                    <div class="md:w-1/2">
                        <div class="aspect-video overflow-hidden rounded-lg border border-base-300">
                            <LazyImage src=main_src alt=item.name.clone() class="h-full w-full object-contain" />
                        </div>
                        {thumbnails}
                    </div>
                    <div class="flex flex-1 flex-col gap-6 md:pr-4">
                        <div class="flex items-center justify-between">
                            <p class="text-3xl font-bold text-primary">{format_price(item.price_per_h)}</p>
                            <Rating value=STATIC_RATING />
                        </div>
                        <Description text=item.description.clone() />
                        <CategoryChips categories=item.categories.clone() />
                        <ul class="space-y-2 text-sm">
                            <li class="flex items-center gap-2">
                                <ShieldCheck attr:class="h-4 w-4 shrink-0 text-primary" />
                                "Pago seguro con fianza"
                            </li>
                            <li class="flex items-center gap-2">
                                <Clock attr:class="h-4 w-4 shrink-0 text-primary" />
                                "Cancelación gratis hasta 12 h antes"
                            </li>
                        </ul>
                        <button type="button" class="btn btn-primary mt-auto w-full md:max-w-xs">"Reservar ahora"</button>
                    </div>
                </section>
            }
        })
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box flex max-h-[95vh] w-full max-w-5xl flex-col p-0">{body}</div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
