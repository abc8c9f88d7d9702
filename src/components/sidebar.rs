//! Palette of addable form element types.

use leptos::prelude::*;

use crate::types::FieldType;

/// The fixed, ordered catalogue. The order here is part of the UI contract.
const PALETTE: [(&str, FieldType); 7] = [
    ("Checkbox", FieldType::Checkbox),
    ("Input", FieldType::Input),
    ("Date", FieldType::Date),
    ("File", FieldType::File),
    ("Select", FieldType::Select),
    ("InputOtp", FieldType::InputOtp),
    ("Date Picker", FieldType::DatePicker),
];

/// Stateless palette: each entry fires `on_add` with its type.
#[component]
pub fn Sidebar(on_add: Callback<FieldType>) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 mt-4">
            {PALETTE.iter().map(|&(name, field_type)| {
                view! {
                    <button
                        type="button"
                        class="px-3 py-2 text-sm font-medium rounded-md bg-gray-900 text-white hover:bg-gray-700 transition-colors"
                        on:click=move |_| on_add.run(field_type)
                    >
                        {name}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
