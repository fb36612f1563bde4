//! 发布物品弹窗
//!
//! 状态流转由 `CreationPhase` 描述；校验、上传与创建的顺序由共享 crate 的
//! `validate` / `publish_item` 保证，这里只负责把结果映射到 UI。

mod category_picker;
mod form_state;
mod image_picker;

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentals_shared::Category;
use rentals_shared::publish::{CreationPhase, publish_item};
use rentals_shared::validation::{Field, FieldErrors, validate};

use self::category_picker::CategoryPicker;
use self::form_state::FormState;
use self::image_picker::ImagePicker;
use crate::auth::use_auth;
use crate::components::icons::XMark;
use crate::components::modal::sync_dialog;
use crate::components::toast::use_toast;
use crate::hooks::UseResource;

/// 字段下方的错误提示
#[component]
fn FieldHint(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="mt-1 text-xs text-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn AddItemDialog(
    phase: RwSignal<CreationPhase>,
    categories: UseResource<Vec<Category>>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let state = FormState::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    sync_dialog(dialog_ref, move || phase.get().is_open());

    // 取消时丢弃已输入的内容
    let close = move || {
        phase.update(|p| *p = p.close());
        if !phase.get_untracked().is_open() {
            state.reset();
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(submitting) = phase.get_untracked().submit() else {
            return;
        };

        let valid = match validate(&state.to_draft()) {
            Ok(valid) => valid,
            Err(errors) => {
                log_info!("[AddItem] 校验未通过: {}", errors);
                state.errors.set(errors);
                return;
            }
        };
        state.errors.set(FieldErrors::default());

        if !auth.is_authenticated_untracked() {
            toast.error("Debes haber iniciado sesión");
            return;
        }

        phase.set(submitting);
        let api = auth.api();
        let image = state.image.get_untracked();
        spawn_local(async move {
            match publish_item(&api, valid, image.as_ref()).await {
                Ok(item) => {
                    log_info!("[AddItem] 已发布: #{} {}", item.id, item.name);
                    toast.success("¡Producto publicado!");
                    state.reset();
                    on_created.run(());
                    phase.try_update(|p| *p = p.finish(true));
                }
                Err(e) => {
                    log_error!("[AddItem] 发布失败: {}", e);
                    toast.error(e.user_message("Error al crear producto"));
                    phase.try_update(|p| *p = p.finish(false));
                }
            }
        });
    };

    let submitting = move || phase.get().is_submitting();

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            on:cancel=move |ev: leptos::ev::Event| {
                // Esc 在提交期间无效
                if phase.get_untracked().is_submitting() {
                    ev.prevent_default();
                }
            }
            on:close=move |_| close()
        >
            <div class="modal-box flex max-h-[90vh] w-full max-w-2xl flex-col p-0">
                <div class="flex items-center justify-between border-b border-base-300 px-6 py-4">
                    <h3 class="text-lg font-semibold">"Nuevo producto"</h3>
                    <button type="button" class="btn btn-ghost btn-sm btn-square" on:click=move |_| close()>
                        <XMark attr:class="h-5 w-5" />
                    </button>
                </div>

                <form on:submit=on_submit class="grid flex-1 gap-6 overflow-y-auto px-6 py-8 md:grid-cols-2" novalidate>
                    <div class="space-y-4">
                        <div class="form-control">
                            <label for="item_name" class="label-text font-medium">"Nombre"</label>
                            <input id="item_name"
                                type="text"
                                placeholder="Taladro Bosch 800 W"
                                on:input=move |ev| state.name.set(event_target_value(&ev))
                                prop:value=move || state.name.get()
                                class="input input-bordered mt-1 w-full"
                            />
                            <FieldHint message=Signal::derive(move || state.error(Field::Name)) />
                        </div>

                        <div class="form-control">
                            <label for="item_description" class="label-text font-medium">"Descripción"</label>
                            <textarea id="item_description"
                                rows="5"
                                placeholder="Añade detalles técnicos, estado, accesorios incluidos…"
                                on:input=move |ev| state.description.set(event_target_value(&ev))
                                prop:value=move || state.description.get()
                                class="textarea textarea-bordered mt-1 w-full resize-none"
                            ></textarea>
                            <FieldHint message=Signal::derive(move || state.error(Field::Description)) />
                        </div>

                        <div class="form-control">
                            <label for="item_price" class="label-text font-medium">"Precio / hora (€)"</label>
                            <input id="item_price"
                                type="text"
                                inputmode="decimal"
                                placeholder="3.5"
                                on:input=move |ev| state.price.set(event_target_value(&ev))
                                prop:value=move || state.price.get()
                                class="input input-bordered mt-1 w-full"
                            />
                            <FieldHint message=Signal::derive(move || state.error(Field::Price)) />
                        </div>
                    </div>

                    <div class="space-y-4">
                        <ImagePicker state=state />
                        <CategoryPicker state=state categories=categories />
                    </div>

                    <div class="modal-action md:col-span-2 mt-0">
                        <button type="button" class="btn btn-ghost" disabled=submitting on:click=move |_| close()>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=submitting>
                            {move || if submitting() {
                                view! { <span class="loading loading-spinner"></span> "Publicando..." }.into_any()
                            } else {
                                "Publicar".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
