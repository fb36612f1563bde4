//! 我的租借
//!
//! 列出当前用户的租借记录，未归还的可以直接"Devolver"。

use leptos::prelude::*;
use leptos::task::spawn_local;
use rentals_shared::Rental;
use rentals_shared::presentation::{format_deposit, rental_period};
use rentals_shared::resource::ResourceState;

use crate::auth::use_auth;
use crate::components::toast::use_toast;
use crate::hooks::use_rentals;

fn item_label(rental: &Rental) -> String {
    rental
        .item
        .as_ref()
        .map(|item| item.name.clone())
        .unwrap_or_else(|| format!("Producto #{}", rental.item_id))
}

#[component]
pub fn RentalsPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();
    let rentals = use_rentals();
    // 正在归还的记录，防止重复点击
    let returning = RwSignal::new(Option::<u32>::None);

    let on_return = move |rental_id: u32| {
        if returning.get_untracked().is_some() {
            return;
        }
        returning.set(Some(rental_id));
        let api = auth.api();
        spawn_local(async move {
            match api.return_rental(rental_id).await {
                Ok(_) => {
                    log_info!("[Rentals] 已归还 #{}", rental_id);
                    toast.success("Alquiler devuelto");
                    rentals.refetch();
                }
                Err(e) => {
                    log_error!("[Rentals] 归还失败 #{}: {}", rental_id, e);
                    toast.error(e.user_message("No se pudo devolver el alquiler"));
                }
            }
            returning.try_set(None);
        });
    };

    let rows = move |list: Vec<Rental>| {
        list.into_iter()
            .map(|rental| {
                let id = rental.id;
                let returned = rental.returned;
                view! {
                    <tr>
                        <td class="font-semibold">{item_label(&rental)}</td>
                        <td class="text-sm">{rental_period(&rental)}</td>
                        <td>{format_deposit(rental.deposit)}</td>
                        <td>
                            {if returned {
                                view! { <span class="badge badge-ghost">"Devuelto"</span> }.into_any()
                            } else {
                                view! { <span class="badge badge-warning">"En curso"</span> }.into_any()
                            }}
                        </td>
                        <td class="text-right">
                            <Show when=move || !returned>
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm"
                                    disabled=move || returning.get().is_some()
                                    on:click=move |_| on_return(id)
                                >
                                    {move || if returning.get() == Some(id) {
                                        view! { <span class="loading loading-spinner loading-xs"></span> }.into_any()
                                    } else {
                                        "Devolver".into_any()
                                    }}
                                </button>
                            </Show>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let body = move || match rentals.state() {
        ResourceState::Idle | ResourceState::Loading => view! {
            <div class="py-12 text-center">
                <span class="loading loading-spinner loading-md"></span>
            </div>
        }
        .into_any(),
        ResourceState::Failed => view! {
            <p class="py-6 text-center text-base-content/60">"No se pudieron cargar tus alquileres."</p>
        }
        .into_any(),
        ResourceState::Ready(list) if list.is_empty() => view! {
            <p class="py-6 text-center text-base-content/60">"Todavía no has alquilado nada."</p>
        }
        .into_any(),
        ResourceState::Ready(list) | ResourceState::Reloading(list) => view! {
            <div class="overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Producto"</th>
                            <th>"Periodo"</th>
                            <th>"Fianza"</th>
                            <th>"Estado"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows(list)}</tbody>
                </table>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Mis alquileres"</h2>
                    {body}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_label_falls_back_to_id() {
        let rental: Rental = serde_json::from_str(
            r#"{"id":1,"item_id":42,"start_at":"2025-01-01T10:00:00Z",
                "end_at":"2025-01-01T12:00:00Z","deposit":20.0,"returned":false}"#,
        )
        .unwrap();
        assert_eq!(item_label(&rental), "Producto #42");
    }
}
