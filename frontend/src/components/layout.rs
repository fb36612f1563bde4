use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::{logout, use_auth};
use crate::components::icons::LogOut;
use crate::web::route::AppRoute;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();

    view! {
        <header class="sticky top-0 z-30 bg-base-100/80 shadow-sm backdrop-blur">
            <div class="navbar container mx-auto px-4">
                <div class="flex-1">
                    <A href=AppRoute::Home.to_path() attr:class="btn btn-ghost text-xl font-extrabold">
                        "Rental-MVP"
                    </A>
                </div>
                <nav class="flex-none gap-2">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| view! {
                            <A href=AppRoute::Login.to_path() attr:class="btn btn-ghost">{AppRoute::Login.label()}</A>
                            <A href=AppRoute::Register.to_path() attr:class="btn btn-primary btn-sm">{AppRoute::Register.label()}</A>
                        }
                    >
                        {AppRoute::NAVIGATION
                            .into_iter()
                            .map(|route| view! {
                                <A href=route.to_path() attr:class="btn btn-ghost">{route.label()}</A>
                            })
                            .collect_view()}
                        <button type="button" class="btn btn-ghost gap-2" on:click=move |_| logout(auth)>
                            <LogOut attr:class="h-4 w-4" /> "Salir"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center mt-16 bg-base-200 p-6 text-base-content/60">
            <p>"© Rental-MVP · Alquila lo que no usas a diario"</p>
        </footer>
    }
}
