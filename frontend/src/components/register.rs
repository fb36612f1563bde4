//! 注册页面
//!
//! 用户名或邮箱冲突时后端返回 400，直接展示其 `detail`。

use crate::auth::{register, use_auth};
use crate::web::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use rentals_shared::SignupRequest;

/// 提交前的基本检查，返回第一条错误
fn check_signup(req: &SignupRequest) -> Option<&'static str> {
    if req.username.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        Some("Rellena todos los campos")
    } else if !req.email.contains('@') {
        Some("Email inválido")
    } else {
        None
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let req = SignupRequest {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Some(msg) = check_signup(&req) {
            set_error_msg.set(Some(msg.to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match register(auth, req).await {
                Ok(()) => navigate(AppRoute::auth_success_redirect().to_path(), Default::default()),
                Err(e) => {
                    log_warn!("[Auth] 注册失败: {}", e);
                    set_error_msg.set(Some(e.user_message("No se pudo completar el registro")));
                }
            }
            set_is_submitting.set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=move || value.get()
                    class="input input-bordered"
                    required
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content w-full max-w-md flex-col">
                <h1 class="mb-4 text-3xl font-bold">"Crear cuenta"</h1>
                <div class="card w-full shrink-0 bg-base-100 shadow-2xl">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error py-2 text-sm">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        {field("signup_username", "Usuario", "text", username)}
                        {field("signup_email", "Email", "email", email)}
                        {field("signup_password", "Contraseña", "password", password)}

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creando cuenta..." }.into_any()
                                } else {
                                    "Registrarse".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm">
                            "¿Ya tienes cuenta? "
                            <A href=AppRoute::Login.to_path() attr:class="link link-primary">"Inicia sesión"</A>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(username: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_check_signup() {
        assert_eq!(check_signup(&req("", "a@b.c", "x")), Some("Rellena todos los campos"));
        assert_eq!(check_signup(&req("ana", "ana.example.com", "x")), Some("Email inválido"));
        assert_eq!(check_signup(&req("ana", "ana@example.com", "secreto")), None);
    }
}
