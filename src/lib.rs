use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;

pub mod codegen;
pub mod components;
pub mod context;
pub mod schema;
pub mod types;

use components::form_builder::FormBuilder;
use context::provide_layout;
use types::Layout;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_layout();
    let layout = ctx.layout;

    let on_layout_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
        layout.set(Layout::from_name(&select.value()).unwrap_or_default());
    };

    view! {
        <main class="p-6 min-h-screen bg-gray-50">
            <h1 class="text-2xl font-bold mb-4">"Dynamic Form Builder"</h1>
            <div class="mb-4">
                <label for="layout-select" class="block text-gray-700 mb-2">
                    "Choose Layout:"
                </label>
                <select
                    id="layout-select"
                    class="p-2 border border-gray-300 rounded w-full max-w-sm"
                    prop:value=move || layout.get().as_str()
                    on:change=on_layout_change
                >
                    <option value="default">"Default Layout"</option>
                    <option value="custom">"Custom Layout"</option>
                </select>
            </div>
            <div class="mt-6">
                <FormBuilder/>
            </div>
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
