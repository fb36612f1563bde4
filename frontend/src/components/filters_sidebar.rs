//! 目录筛选面板
//!
//! 每次交互都整体替换 `FilterState`，查询串由共享 crate 统一构建。

use leptos::prelude::*;
use rentals_shared::Category;
use rentals_shared::query::{FilterState, SortOrder};
use rentals_shared::resource::ResourceState;

use crate::hooks::UseResource;

/// 价格输入：空白视为未设置，允许逗号作为小数点
fn parse_price_input(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

fn price_value(price: Option<f64>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

#[component]
pub fn FiltersSidebar(
    filters: RwSignal<FilterState>,
    categories: UseResource<Vec<Category>>,
    /// 重置后的回调（移动端用于关闭抽屉）
    #[prop(into, optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    let set = move |f: fn(&mut FilterState, String), value: String| {
        filters.update(|state| f(state, value));
    };

    let category_list = move || match categories.state() {
        ResourceState::Idle | ResourceState::Loading => view! {
            <span class="loading loading-dots loading-sm"></span>
        }
        .into_any(),
        ResourceState::Failed => view! {
            <span class="text-sm text-error">"No se pudieron cargar las categorías"</span>
        }
        .into_any(),
        ResourceState::Ready(list) if list.is_empty() => view! {
            <span class="text-sm text-base-content/60">"No hay categorías"</span>
        }
        .into_any(),
        ResourceState::Ready(list) | ResourceState::Reloading(list) => list
            .into_iter()
            .map(|c| {
                let id = c.id;
                view! {
                    <label class="label cursor-pointer justify-start gap-2 py-1">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm checkbox-primary"
                            prop:checked=move || filters.with(|f| f.categories.contains(&id))
                            on:change=move |_| filters.update(|f| f.toggle_category(id))
                        />
                        <span class="label-text">{c.name}</span>
                    </label>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="space-y-6">
            <div class="form-control">
                <label for="filter_name" class="label">
                    <span class="label-text font-semibold">"Buscar"</span>
                </label>
                <input id="filter_name"
                    type="search"
                    placeholder="Nombre del producto"
                    class="input input-bordered input-sm w-full"
                    prop:value=move || filters.with(|f| f.name.clone().unwrap_or_default())
                    on:input=move |ev| set(
                        |f, v| f.name = Some(v).filter(|n| !n.trim().is_empty()),
                        event_target_value(&ev),
                    )
                />
            </div>

            <div class="form-control">
                <span class="label label-text font-semibold">"Precio / hora (€)"</span>
                <div class="flex items-center gap-2">
                    <input
                        type="number" min="0" step="0.5" placeholder="Mín."
                        class="input input-bordered input-sm w-full"
                        prop:value=move || filters.with(|f| price_value(f.min_price))
                        on:change=move |ev| set(|f, v| f.min_price = parse_price_input(&v), event_target_value(&ev))
                    />
                    <span>"–"</span>
                    <input
                        type="number" min="0" step="0.5" placeholder="Máx."
                        class="input input-bordered input-sm w-full"
                        prop:value=move || filters.with(|f| price_value(f.max_price))
                        on:change=move |ev| set(|f, v| f.max_price = parse_price_input(&v), event_target_value(&ev))
                    />
                </div>
            </div>

            <label class="label cursor-pointer justify-start gap-2">
                <input
                    type="checkbox"
                    class="toggle toggle-sm toggle-primary"
                    prop:checked=move || filters.with(|f| f.available == Some(true))
                    on:change=move |ev| {
                        let only_available = event_target_checked(&ev);
                        filters.update(|f| f.available = only_available.then_some(true));
                    }
                />
                <span class="label-text">"Solo disponibles"</span>
            </label>

            <div>
                <p class="label label-text font-semibold">"Categorías"</p>
                <div class="flex flex-col">{category_list}</div>
            </div>

            <div class="form-control">
                <label for="filter_order" class="label">
                    <span class="label-text font-semibold">"Ordenar por"</span>
                </label>
                <select id="filter_order"
                    class="select select-bordered select-sm w-full"
                    on:change=move |ev| set(|f, v| f.order = SortOrder::parse(&v), event_target_value(&ev))
                >
                    <option value="" selected=move || filters.with(|f| f.order.is_none())>"Relevancia"</option>
                    {SortOrder::OPTIONS
                        .into_iter()
                        .map(|(order, label)| view! {
                            <option
                                value=order.key()
                                selected=move || filters.with(|f| f.order == Some(order))
                            >
                                {label}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <button
                type="button"
                class="btn btn-outline btn-sm w-full"
                disabled=move || filters.with(FilterState::is_empty)
                on:click=move |_| {
                    filters.set(FilterState::default());
                    if let Some(cb) = on_reset {
                        cb.run(());
                    }
                }
            >
                "Limpiar filtros"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input(""), None);
        assert_eq!(parse_price_input("  "), None);
        assert_eq!(parse_price_input("3,5"), Some(3.5));
        assert_eq!(parse_price_input("20"), Some(20.0));
        assert_eq!(parse_price_input("-1"), None);
        assert_eq!(parse_price_input("abc"), None);
    }

    #[test]
    fn test_price_value_roundtrips_shortest_form() {
        assert_eq!(price_value(Some(10.0)), "10");
        assert_eq!(price_value(Some(3.5)), "3.5");
        assert_eq!(price_value(None), "");
    }
}
