//! 图片选择与本地预览

use leptos::prelude::*;
use rentals_shared::validation::Field;
use web_sys::HtmlInputElement;

use super::FieldHint;
use super::form_state::FormState;
use crate::components::icons::Photo;

#[component]
pub fn ImagePicker(state: FormState) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        state.set_image(file);
    };

    view! {
        <div class="form-control">
            <span class="label-text font-medium">"Imagen"</span>
            <label class="mt-1 flex h-48 w-full cursor-pointer items-center justify-center overflow-hidden rounded-lg border-2 border-dashed border-base-300 text-sm text-base-content/60 hover:border-primary hover:text-primary">
                {move || match state.preview.with(|p| p.as_ref().map(|url| url.as_str().to_string())) {
                    Some(src) => view! {
                        <img src=src alt="preview" class="h-full w-full object-cover" />
                    }.into_any(),
                    None => view! {
                        <span class="flex flex-col items-center gap-1">
                            <Photo attr:class="h-8 w-8" />
                            <span>"PNG, JPG · máx. 5 MB"</span>
                        </span>
                    }.into_any(),
                }}
                <input
                    type="file"
                    accept="image/*"
                    class="sr-only"
                    node_ref=state.file_input
                    on:change=on_change
                />
            </label>
            <FieldHint message=Signal::derive(move || state.error(Field::Image)) />
        </div>
    }
}
