//! 分类多选
//!
//! 区分"加载中"与"确实没有分类"，避免把尚未返回的列表误显示为空。

use leptos::prelude::*;
use rentals_shared::Category;
use rentals_shared::resource::ResourceState;
use rentals_shared::validation::Field;

use super::FieldHint;
use super::form_state::FormState;
use crate::hooks::UseResource;

#[component]
pub fn CategoryPicker(state: FormState, categories: UseResource<Vec<Category>>) -> impl IntoView {
    let chips = move |list: Vec<Category>| {
        list.into_iter()
            .map(|c| {
                let id = c.id;
                let selected = move || state.categories.with(|s| s.contains(&id));
                view! {
                    <button
                        type="button"
                        class=move || if selected() {
                            "badge badge-primary badge-lg cursor-pointer"
                        } else {
                            "badge badge-outline badge-lg cursor-pointer"
                        }
                        on:click=move |_| state.toggle_category(id)
                    >
                        {c.name}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="form-control">
            <p class="mb-1 label-text font-medium">"Categorías"</p>
            <div class="flex flex-wrap gap-2">
                {move || match categories.state() {
                    ResourceState::Idle | ResourceState::Loading => view! {
                        <span class="text-sm text-base-content/60">
                            <span class="loading loading-dots loading-xs"></span> " Cargando categorías…"
                        </span>
                    }.into_any(),
                    ResourceState::Failed => view! {
                        <span class="text-sm text-error">"No se pudieron cargar las categorías"</span>
                    }.into_any(),
                    ResourceState::Ready(list) if list.is_empty() => view! {
                        <span class="text-sm text-base-content/60">"No hay categorías"</span>
                    }.into_any(),
                    ResourceState::Ready(list) | ResourceState::Reloading(list) => chips(list).into_any(),
                }}
            </div>
            <FieldHint message=Signal::derive(move || state.error(Field::Categories)) />
        </div>
    }
}
