//! Three-pane builder: palette, drag-and-drop canvas, live preview.
//!
//! This component owns the item sequence and the form value map; children
//! receive the signals and mutate them only through `update`. The layout
//! variant comes from the context and switches the visual theme of every
//! pane at once.

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::Value;

use super::dnd_area::DragAndDropArea;
use super::form_preview::FormPreview;
use super::sidebar::Sidebar;
use crate::context::use_layout;
use crate::types::{FieldType, FormItem, IdStamp, Layout};

#[component]
pub fn FormBuilder() -> impl IntoView {
    let layout = use_layout().layout;
    let dark = Signal::derive(move || layout.get() == Layout::Custom);

    let items = RwSignal::new(Vec::<FormItem>::new());
    let values = RwSignal::new(HashMap::<String, Value>::new());
    let stamps = RwSignal::new(IdStamp::default());

    let add_item = Callback::new(move |field_type: FieldType| {
        let now = js_sys::Date::now() as u64;
        let stamp = stamps.try_update(|s| s.next(now)).unwrap_or(now);
        items.update(|list| list.push(FormItem::new(field_type, stamp)));
    });

    let on_submit = Callback::new(move |data: HashMap<String, Value>| {
        log::info!("form submitted with {} fields", data.len());
    });

    view! {
        <div class=move || {
            if dark.get() {
                "bg-gray-900 text-white flex w-full justify-between flex-row p-4 rounded-md"
            } else {
                "bg-white text-black flex w-full justify-between flex-row p-4 rounded-md"
            }
        }>
            // Palette
            <div class=move || {
                if dark.get() {
                    "w-1/5 bg-gray-800 p-6 border-r border-gray-700 rounded-l-md"
                } else {
                    "w-1/4 bg-gray-100 p-4 border-r border-gray-300 rounded-l-md"
                }
            }>
                <h2 class=move || {
                    if dark.get() { "text-2xl font-bold" } else { "text-xl font-semibold" }
                }>
                    {move || if dark.get() { "Create Your Form" } else { "Add Form Elements" }}
                </h2>
                <Sidebar on_add=add_item />
            </div>

            // Canvas
            <div class=move || {
                if dark.get() { "w-3/5 bg-gray-700 p-4" } else { "w-2/4 p-4" }
            }>
                <h3 class=move || {
                    if dark.get() {
                        "text-xl font-bold text-yellow-400 mb-4"
                    } else {
                        "text-lg font-medium mb-4"
                    }
                }>
                    {move || if dark.get() {
                        "Customize Your Form Layout"
                    } else {
                        "Drag and Drop Your Fields"
                    }}
                </h3>
                <DragAndDropArea items=items dark=dark />
            </div>

            // Preview
            <div class=move || {
                if dark.get() {
                    "w-1/5 bg-gray-800 p-6 rounded-r-md"
                } else {
                    "w-1/4 bg-gray-100 p-4 rounded-r-md"
                }
            }>
                <h3 class=move || {
                    if dark.get() {
                        "text-xl font-bold text-green-400 mb-4"
                    } else {
                        "text-lg font-medium mb-4"
                    }
                }>
                    {move || if dark.get() { "Preview Your Creation" } else { "Form Preview" }}
                </h3>
                <FormPreview items=items values=values on_submit=on_submit dark=dark />
            </div>
        </div>
    }
}
