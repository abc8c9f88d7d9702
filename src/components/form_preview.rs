//! Live form preview with a Preview/Code tab toggle.
//!
//! Submission is gated by the composite validator: failures surface inline
//! and the submit callback never fires; a valid submit runs the callback
//! with the collected values and renders them as indented JSON.

use std::collections::{BTreeMap, HashMap};

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;

use super::form_field::FormField;
use crate::codegen::generate_code;
use crate::schema::{default_values, FormSchema};
use crate::types::FormItem;

/// Collect the submit payload for the current sequence: derived defaults
/// overlaid with whatever the user has entered. Values for removed items are
/// dropped here, so the payload always matches the visible form.
pub fn collect_values(
    items: &[FormItem],
    entered: &HashMap<String, Value>,
) -> HashMap<String, Value> {
    let mut collected = default_values(items);
    for (id, value) in entered {
        if collected.contains_key(id) {
            collected.insert(id.clone(), value.clone());
        }
    }
    collected
}

/// Fire-and-forget clipboard write; copy failure is not signaled.
fn copy_to_clipboard(text: &str) {
    let _ = js_sys::eval(&format!(
        "navigator.clipboard.writeText(`{}`)",
        text.replace('\\', "\\\\").replace('`', "\\`").replace('$', "\\$")
    ));
}

#[component]
pub fn FormPreview(
    items: RwSignal<Vec<FormItem>>,
    values: RwSignal<HashMap<String, Value>>,
    on_submit: Callback<HashMap<String, Value>>,
    #[prop(into)] dark: Signal<bool>,
) -> impl IntoView {
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let json_output = RwSignal::new(None::<String>);
    // false = Preview tab, true = Code tab
    let code_tab = RwSignal::new(false);

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = items.get_untracked();
        let schema = FormSchema::from_items(&current);
        let collected = collect_values(&current, &values.get_untracked());

        let field_errors = schema.validate(&collected);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            json_output.set(None);
            return;
        }
        errors.set(BTreeMap::new());

        let payload = Value::Object(collected.clone().into_iter().collect());
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => json_output.set(Some(text)),
            Err(err) => {
                // Worst case is a missing JSON panel; the form itself stays
                // usable.
                log::error!("failed to serialize form data: {err}");
            }
        }
        on_submit.run(collected);
    };

    let tab_class = move |active: bool| {
        if active {
            "px-2 py-1 text-xs font-medium rounded bg-white shadow text-gray-900"
        } else {
            "px-2 py-1 text-xs font-medium rounded text-gray-600 hover:text-gray-900"
        }
    };

    view! {
        <div class=move || {
            if dark.get() {
                "p-4 rounded-md bg-gray-800"
            } else {
                "p-4 rounded-md bg-white border border-gray-300"
            }
        }>
            <div class="flex items-center justify-end mb-3">
                <div class="inline-flex bg-gray-100 rounded-lg p-0.5">
                    <button
                        type="button"
                        class=move || tab_class(!code_tab.get())
                        on:click=move |_| code_tab.set(false)
                    >
                        "Preview"
                    </button>
                    <button
                        type="button"
                        class=move || tab_class(code_tab.get())
                        on:click=move |_| code_tab.set(true)
                    >
                        "Code"
                    </button>
                </div>
            </div>

            // Preview tab
            <div style=move || if code_tab.get() { "display: none" } else { "display: block" }>
                <form on:submit=on_form_submit>
                    {move || items.get().into_iter().map(|item| {
                        view! {
                            <FormField
                                item=item
                                values=values
                                errors=errors
                                dark=dark
                            />
                        }
                    }).collect_view()}
                    <button
                        type="submit"
                        class="mt-4 w-full px-3 py-2 text-sm font-medium rounded-md bg-gray-900 text-white hover:bg-gray-700"
                    >
                        "Submit"
                    </button>
                </form>

                {move || json_output.get().map(|text| view! {
                    <div class=move || {
                        if dark.get() {
                            "mt-4 p-4 bg-gray-900 rounded-md"
                        } else {
                            "mt-4 p-4 bg-gray-50 rounded-md border border-gray-200"
                        }
                    }>
                        <h3 class="text-sm font-bold mb-2">"Form Data (JSON):"</h3>
                        <pre class="whitespace-pre-wrap break-words text-xs text-green-600">
                            {text}
                        </pre>
                    </div>
                })}
            </div>

            // Code tab
            <div style=move || if code_tab.get() { "display: block" } else { "display: none" }>
                <div class="flex items-center justify-end mb-2">
                    <button
                        type="button"
                        class="text-xs text-gray-500 hover:text-gray-700"
                        on:click=move |_| {
                            copy_to_clipboard(&generate_code(&items.get_untracked()));
                        }
                    >
                        "Copy"
                    </button>
                </div>
                <pre class=move || {
                    if dark.get() {
                        "p-3 rounded-md bg-gray-900 text-gray-100 text-xs overflow-x-auto"
                    } else {
                        "p-3 rounded-md bg-gray-50 border border-gray-200 text-xs overflow-x-auto"
                    }
                }>
                    {move || generate_code(&items.get())}
                </pre>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldType;
    use serde_json::json;

    #[test]
    fn test_collect_overlays_entered_values_on_defaults() {
        let items = [
            FormItem::new(FieldType::Input, 1),
            FormItem::new(FieldType::Checkbox, 2),
        ];
        let mut entered = HashMap::new();
        entered.insert("input-1".to_string(), json!("hello"));

        let collected = collect_values(&items, &entered);
        assert_eq!(collected["input-1"], json!("hello"));
        assert_eq!(collected["checkbox-2"], json!(false));
    }

    #[test]
    fn test_collect_drops_values_for_removed_items() {
        let items = [FormItem::new(FieldType::Input, 1)];
        let mut entered = HashMap::new();
        entered.insert("input-1".to_string(), json!("keep"));
        entered.insert("select-99".to_string(), json!("stale"));

        let collected = collect_values(&items, &entered);
        assert_eq!(collected.len(), 1);
        assert!(!collected.contains_key("select-99"));
    }
}
