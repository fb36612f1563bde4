use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use crate::web::route::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let (user, pass) = (username.get_untracked(), password.get_untracked());
        if user.trim().is_empty() || pass.is_empty() {
            set_error_msg.set(Some("Rellena todos los campos".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match login(auth, user.trim().to_string(), pass).await {
                Ok(()) => navigate(AppRoute::auth_success_redirect().to_path(), Default::default()),
                Err(e) => {
                    log_warn!("[Auth] 登录失败: {}", e);
                    set_error_msg.set(Some(e.user_message("Usuario o contraseña incorrectos")));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content w-full max-w-md flex-col">
                <div class="mb-4 flex flex-col items-center gap-2 text-center">
                    <div class="rounded-2xl bg-primary/10 p-3 text-primary">
                        <ShieldCheck attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold">"Iniciar sesión"</h1>
                </div>

                <div class="card w-full shrink-0 bg-base-100 shadow-2xl">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error py-2 text-sm">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Usuario"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                } else {
                                    "Entrar".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm">
                            "¿No tienes cuenta? "
                            <A href=AppRoute::Register.to_path() attr:class="link link-primary">"Regístrate"</A>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
