use leptos::prelude::*;

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-[15rem] overflow-hidden rounded-lg bg-base-100 shadow">
            <div class="aspect-[4/3] w-full animate-pulse bg-base-300"></div>
            <div class="space-y-2 p-4">
                <div class="h-4 w-2/3 animate-pulse rounded bg-base-300"></div>
                <div class="h-4 w-1/3 animate-pulse rounded bg-base-300"></div>
            </div>
        </div>
    }
}

/// 首次加载时的骨架网格
#[component]
pub fn SkeletonGrid(#[prop(default = 8)] count: usize) -> impl IntoView {
    view! {
        <div class="mx-auto grid justify-center gap-6 py-6 [grid-template-columns:repeat(auto-fill,15rem)]">
            {(0..count).map(|_| view! { <SkeletonCard /> }).collect_view()}
        </div>
    }
}
