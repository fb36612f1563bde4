use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::ArrowRight;
use crate::web::route::AppRoute;

const STEPS: [(&str, &str); 3] = [
    ("Publica", "Sube tu producto y fija tu precio."),
    ("Reserva", "Los usuarios reservan y pagan la fianza."),
    ("Gana", "Entrega el ítem y recibe tu dinero."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero min-h-[60vh] bg-primary text-primary-content">
            <div class="hero-content flex-col gap-6 py-24 text-center">
                <h1 class="max-w-3xl text-5xl font-extrabold leading-tight">
                    "Alquila y gana dinero con tus herramientas que no usas a diario"
                </h1>
                <p class="max-w-xl text-lg opacity-90">
                    "Conecta con gente de tu zona, protege tus transacciones y ahorra comprando."
                </p>
                <A href=AppRoute::Catalog.to_path() attr:class="btn gap-2">
                    "Explorar catálogo" <ArrowRight attr:class="h-5 w-5" />
                </A>
            </div>
        </section>

        <section class="container mx-auto px-4 py-16">
            <h2 class="mb-12 text-center text-3xl font-bold">"¿Cómo funciona?"</h2>
            <div class="grid gap-12 md:grid-cols-3">
                {STEPS
                    .into_iter()
                    .map(|(title, text)| view! {
                        <div class="space-y-3 text-center">
                            <div class="mx-auto h-12 w-12 rounded-full bg-primary/10"></div>
                            <h3 class="text-xl font-semibold">{title}</h3>
                            <p class="text-base-content/70">{text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
