use leptos::prelude::*;
use leptos_router::components::A;

use crate::web::route::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-[60vh] items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="mt-4 text-xl">"Página no encontrada"</p>
                <A href=AppRoute::Home.to_path() attr:class="btn btn-link mt-4">"Volver al inicio"</A>
            </div>
        </div>
    }
}
