//! 物品目录
//!
//! 筛选条件 → 规范化查询串 → `use_items`。查询串同时作为刷新 key，
//! 语义相同的筛选条件不会重复请求。

use leptos::prelude::*;
use rentals_shared::Item;
use rentals_shared::publish::CreationPhase;
use rentals_shared::query::FilterState;
use rentals_shared::resource::ResourceState;

use crate::api::ItemPage;
use crate::auth::use_auth;
use crate::components::add_item_dialog::AddItemDialog;
use crate::components::filters_sidebar::FiltersSidebar;
use crate::components::icons::{Funnel, Plus, RefreshCw};
use crate::components::item_card::ItemCard;
use crate::components::item_detail_modal::ItemDetailModal;
use crate::components::quick_view_modal::QuickViewModal;
use crate::components::skeleton_card::SkeletonGrid;
use crate::hooks::{use_categories, use_items};

/// 结果区域显示什么
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListView {
    /// 首次加载，没有任何旧数据
    Skeleton,
    /// 没有可展示的物品（空结果或首次加载失败）
    Empty,
    Grid,
}

fn list_view(state: &ResourceState<ItemPage>) -> ListView {
    match state {
        ResourceState::Idle | ResourceState::Loading => ListView::Skeleton,
        ResourceState::Failed => ListView::Empty,
        ResourceState::Ready(page) if page.items.is_empty() => ListView::Empty,
        // 重新加载期间继续展示旧数据
        ResourceState::Ready(_) | ResourceState::Reloading(_) => ListView::Grid,
    }
}

fn result_label(count: usize) -> String {
    match count {
        1 => "1 resultado".to_string(),
        n => format!("{} resultados", n),
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let auth = use_auth();
    let filters = RwSignal::new(FilterState::default());
    let query = Signal::derive(move || filters.with(FilterState::to_query_string));

    let items = use_items(query);
    let categories = use_categories();

    let phase = RwSignal::new(CreationPhase::default());
    let quick_view = RwSignal::new(Option::<Item>::None);
    let detail = RwSignal::new(Option::<Item>::None);
    let (drawer_open, set_drawer_open) = signal(false);

    let page = move || items.data().unwrap_or_default();
    let view_kind = move || items.with_state(list_view);
    let show_skeleton = move || view_kind() == ListView::Skeleton;

    view! {
        <div class="container mx-auto px-4">
            <div class="flex gap-10">
                <aside class="hidden w-64 shrink-0 py-6 lg:block">
                    <FiltersSidebar filters=filters categories=categories />
                </aside>

                <section class="flex-1">
                    <div class="flex items-center justify-between gap-4 pt-6">
                        <div class="flex items-center gap-2">
                            <button type="button" class="btn btn-outline btn-sm gap-2 lg:hidden" on:click=move |_| set_drawer_open.set(true)>
                                <Funnel attr:class="h-4 w-4" /> "Filtros"
                            </button>
                            <Show when=move || !show_skeleton()>
                                <span class="text-sm text-base-content/60">{move || result_label(page().count())}</span>
                            </Show>
                            <button
                                type="button"
                                class="btn btn-ghost btn-circle btn-sm"
                                title="Recargar"
                                disabled=move || items.is_loading()
                                on:click=move |_| items.refetch()
                            >
                                <RefreshCw attr:class=move || if items.is_loading() { "h-4 w-4 animate-spin" } else { "h-4 w-4" } />
                            </button>
                        </div>

                        <Show when=move || auth.is_authenticated()>
                            <button type="button" class="btn btn-primary gap-2" on:click=move |_| phase.update(|p| *p = p.open())>
                                <Plus attr:class="h-4 w-4" /> "Añadir producto"
                            </button>
                        </Show>
                    </div>

                    <Show
                        when=move || !show_skeleton()
                        fallback=|| view! { <SkeletonGrid /> }
                    >
                        <div class="mx-auto grid justify-center gap-6 py-6 [grid-template-columns:repeat(auto-fill,15rem)]">
                            <For
                                each=move || page().items
                                key=|item| item.id
                                children=move |item| view! {
                                    <ItemCard
                                        item=item
                                        on_quick_view=move |it| quick_view.set(Some(it))
                                        on_details=move |it| detail.set(Some(it))
                                    />
                                }
                            />
                        </div>
                        <Show when=move || view_kind() == ListView::Empty>
                            <p class="py-6 text-center text-base-content/60">"No hay resultados."</p>
                        </Show>
                    </Show>
                </section>
            </div>

            // 移动端筛选抽屉
            <Show when=move || drawer_open.get()>
                <div class="fixed inset-0 z-40 lg:hidden">
                    <div class="absolute inset-0 bg-black/40" on:click=move |_| set_drawer_open.set(false)></div>
                    <div class="absolute inset-y-0 left-0 w-72 overflow-y-auto bg-base-100 p-6 shadow-xl">
                        <div class="mb-4 flex items-center justify-between">
                            <h2 class="text-lg font-semibold">"Filtros"</h2>
                            <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| set_drawer_open.set(false)>
                                "Cerrar"
                            </button>
                        </div>
                        <FiltersSidebar
                            filters=filters
                            categories=categories
                            on_reset=move |_| set_drawer_open.set(false)
                        />
                    </div>
                </div>
            </Show>

            <AddItemDialog phase=phase categories=categories on_created=move |_| items.refetch() />
            <QuickViewModal item=quick_view on_close=move |_| quick_view.set(None) />
            <ItemDetailModal item=detail on_close=move |_| detail.set(None) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str]) -> ItemPage {
        let items = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::from_value(serde_json::json!({
                    "id": i + 1,
                    "name": name,
                    "price_per_h": 3.5,
                }))
                .unwrap()
            })
            .collect();
        ItemPage { items, total: None }
    }

    #[test]
    fn test_empty_result_set_renders_no_results() {
        assert_eq!(list_view(&ResourceState::Ready(page(&[]))), ListView::Empty);
        assert_eq!(list_view(&ResourceState::Failed), ListView::Empty);
    }

    #[test]
    fn test_first_load_shows_skeleton() {
        assert_eq!(list_view(&ResourceState::Idle), ListView::Skeleton);
        assert_eq!(list_view(&ResourceState::Loading), ListView::Skeleton);
    }

    #[test]
    fn test_previous_items_stay_visible_while_reloading() {
        let prev = page(&["Taladro", "Sierra"]);
        assert_eq!(list_view(&ResourceState::Reloading(prev.clone())), ListView::Grid);
        assert_eq!(list_view(&ResourceState::Ready(prev)), ListView::Grid);
    }

    #[test]
    fn test_result_label() {
        assert_eq!(result_label(0), "0 resultados");
        assert_eq!(result_label(1), "1 resultado");
        assert_eq!(result_label(12), "12 resultados");
    }
}
