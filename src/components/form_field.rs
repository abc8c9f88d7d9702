//! Per-type control rendering for the form preview.
//!
//! One control per descriptor, bound bidirectionally to the shared value
//! map: `prop:*` reads the current value, the change handler writes it back,
//! and the field's validation message renders beneath the control.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;
use wasm_bindgen::JsCast;

use super::date_picker::DatePicker;
use crate::types::{FieldType, FormItem};

// ============================================================================
// OTP Helpers
// ============================================================================

/// Character shown in OTP slot `index` for the current code.
pub fn otp_char(code: &str, index: usize) -> String {
    code.chars().nth(index).map(String::from).unwrap_or_default()
}

/// New code after editing slot `index`: replace in place, append at or past
/// the end, or delete the slot's character when the input was cleared.
pub fn set_otp_char(code: &str, index: usize, entered: Option<char>) -> String {
    let mut chars: Vec<char> = code.chars().collect();
    match entered {
        Some(ch) => {
            if index < chars.len() {
                chars[index] = ch;
            } else {
                chars.push(ch);
            }
        }
        None => {
            if index < chars.len() {
                chars.remove(index);
            }
        }
    }
    chars.into_iter().collect()
}

// ============================================================================
// Field Component
// ============================================================================

/// Label, control, and inline error for one form item.
#[component]
pub fn FormField(
    item: FormItem,
    values: RwSignal<HashMap<String, Value>>,
    #[prop(into)] errors: Signal<BTreeMap<String, String>>,
    #[prop(into)] dark: Signal<bool>,
) -> impl IntoView {
    let id = item.id.clone();
    let error_id = id.clone();
    let error = move || errors.get().get(&error_id).cloned();

    view! {
        <div class="mb-4">
            <label
                class=move || {
                    if dark.get() {
                        "block text-sm font-medium mb-1 text-gray-200"
                    } else {
                        "block text-sm font-medium mb-1 text-gray-700"
                    }
                }
                for=id.clone()
            >
                {item.label.clone()}
            </label>
            <FieldControl item=item values=values />
            {move || error().map(|msg| view! {
                <p class="mt-1 text-xs text-red-500">{msg}</p>
            })}
        </div>
    }
}

/// The control itself, dispatched exhaustively on the item type.
#[component]
fn FieldControl(item: FormItem, values: RwSignal<HashMap<String, Value>>) -> impl IntoView {
    match item.field_type {
        FieldType::Input => text_input(item, values, "text"),
        FieldType::Password => text_input(item, values, "password"),
        FieldType::Phone => text_input(item, values, "tel"),
        FieldType::Date => text_input(item, values, "date"),
        FieldType::Datetime => text_input(item, values, "datetime-local"),
        FieldType::Checkbox => checkbox_input(item, values),
        FieldType::Select => select_input(item, values),
        FieldType::InputOtp => otp_input(item, values),
        FieldType::DatePicker => date_picker_input(item, values),
        FieldType::File => file_input(item, values),
    }
}

// ============================================================================
// Controls
// ============================================================================

fn string_value(values: RwSignal<HashMap<String, Value>>, id: &str) -> String {
    values
        .get()
        .get(id)
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_default()
}

fn text_input(
    item: FormItem,
    values: RwSignal<HashMap<String, Value>>,
    input_type: &'static str,
) -> AnyView {
    let id = item.id.clone();
    let id_for_change = id.clone();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        let value = input.value();
        values.update(|v| {
            v.insert(id_for_change.clone(), Value::String(value));
        });
    };

    view! {
        <input
            type=input_type
            id=id.clone()
            class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
            placeholder=item.placeholder.unwrap_or_default()
            prop:value=move || string_value(values, &id)
            on:input=on_change
        />
    }
    .into_any()
}

fn checkbox_input(item: FormItem, values: RwSignal<HashMap<String, Value>>) -> AnyView {
    let id = item.id.clone();
    let id_for_change = id.clone();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        let checked = input.checked();
        values.update(|v| {
            v.insert(id_for_change.clone(), Value::Bool(checked));
        });
    };

    view! {
        <input
            type="checkbox"
            id=id.clone()
            class="h-4 w-4 rounded border-gray-300 focus:ring-2 focus:ring-blue-500"
            prop:checked=move || {
                values.get().get(&id).and_then(|v| v.as_bool()).unwrap_or(false)
            }
            on:change=on_change
        />
    }
    .into_any()
}

fn select_input(item: FormItem, values: RwSignal<HashMap<String, Value>>) -> AnyView {
    let id = item.id.clone();
    let id_for_change = id.clone();
    let options = item.options.clone().unwrap_or_default();
    let placeholder = item
        .placeholder
        .clone()
        .unwrap_or_else(|| "Select an option".to_string());

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
        let value = select.value();
        values.update(|v| {
            v.insert(id_for_change.clone(), Value::String(value));
        });
    };

    view! {
        <select
            id=id.clone()
            class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
            prop:value=move || string_value(values, &id)
            on:change=on_change
        >
            <option value="">{placeholder}</option>
            {options.into_iter().map(|option| {
                let option_value = option.clone();
                view! {
                    <option value=option_value>{option}</option>
                }
            }).collect_view()}
        </select>
    }
    .into_any()
}

/// Split 3+3 one-time-code input: six single-character slots, the combined
/// string is the field value.
fn otp_input(item: FormItem, values: RwSignal<HashMap<String, Value>>) -> AnyView {
    let id = item.id.clone();

    let slot = move |index: usize| {
        let id_read = id.clone();
        let id_write = id.clone();

        let on_change = move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
            let entered = input.value().chars().next();
            values.update(|v| {
                let current = v
                    .get(&id_write)
                    .and_then(|val| val.as_str())
                    .unwrap_or_default()
                    .to_string();
                v.insert(
                    id_write.clone(),
                    Value::String(set_otp_char(&current, index, entered)),
                );
            });
        };

        view! {
            <input
                type="text"
                inputmode="numeric"
                maxlength="1"
                class="w-9 h-10 text-center text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || {
                    otp_char(
                        values.get().get(&id_read).and_then(|v| v.as_str()).unwrap_or_default(),
                        index,
                    )
                }
                on:input=on_change
            />
        }
    };

    view! {
        <div class="flex items-center gap-1">
            {(0..3).map(slot.clone()).collect_view()}
            <span class="px-1 text-gray-400">"-"</span>
            {(3..6).map(slot).collect_view()}
        </div>
    }
    .into_any()
}

fn date_picker_input(item: FormItem, values: RwSignal<HashMap<String, Value>>) -> AnyView {
    let id = item.id.clone();
    let id_for_select = id.clone();

    // The stored value is the ISO date string; the picker works in NaiveDate.
    let selected = Signal::derive(move || {
        values
            .get()
            .get(&id)
            .and_then(|v| v.as_str())
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    });

    let on_select = Callback::new(move |date: NaiveDate| {
        values.update(|v| {
            v.insert(
                id_for_select.clone(),
                Value::String(date.format("%Y-%m-%d").to_string()),
            );
        });
    });

    view! { <DatePicker value=selected on_select=on_select /> }.into_any()
}

fn file_input(item: FormItem, values: RwSignal<HashMap<String, Value>>) -> AnyView {
    let id = item.id.clone();

    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
        let names: Vec<Value> = input
            .files()
            .map(|files| {
                (0..files.length())
                    .filter_map(|i| files.get(i))
                    .map(|file| Value::String(file.name()))
                    .collect()
            })
            .unwrap_or_default();
        values.update(|v| {
            v.insert(id.clone(), Value::Array(names));
        });
    };

    view! {
        <input
            type="file"
            class="w-full text-sm text-gray-500 file:mr-3 file:px-3 file:py-1.5 file:border-0 file:rounded-md file:bg-gray-100 file:text-gray-700 hover:file:bg-gray-200"
            on:change=on_change
        />
    }
    .into_any()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_char_reads_by_slot() {
        assert_eq!(otp_char("123456", 0), "1");
        assert_eq!(otp_char("123456", 5), "6");
        assert_eq!(otp_char("12", 4), "");
        assert_eq!(otp_char("", 0), "");
    }

    #[test]
    fn test_set_otp_char_replaces_in_place() {
        assert_eq!(set_otp_char("123456", 2, Some('9')), "129456");
    }

    #[test]
    fn test_set_otp_char_appends_at_or_past_the_end() {
        assert_eq!(set_otp_char("12", 2, Some('3')), "123");
        // Typing into a later slot while earlier ones are empty still just
        // extends the code.
        assert_eq!(set_otp_char("12", 5, Some('9')), "129");
    }

    #[test]
    fn test_set_otp_char_deletes_on_cleared_slot() {
        assert_eq!(set_otp_char("123", 1, None), "13");
        assert_eq!(set_otp_char("", 0, None), "");
    }
}
