//! Drag-and-drop canvas: live reorder on hover, per-item removal.
//!
//! The reorder happens on every hover-boundary crossing during a drag, not
//! only on drop, so the visible order tracks the pointer continuously. The
//! drag state is one index, local to the area.

use leptos::prelude::*;
use leptos::web_sys;

use crate::types::FormItem;

// ============================================================================
// List Operations
// ============================================================================

/// Move the element at `from` to `to`, keeping the relative order of the
/// rest. Equal or out-of-range indices are a no-op.
pub fn reorder(items: &mut Vec<FormItem>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Remove the element at `index`; out-of-range indices are a no-op.
pub fn remove_at(items: &mut Vec<FormItem>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

// ============================================================================
// Component
// ============================================================================

/// The canvas owns no item state; the sequence signal is shared with the
/// builder root and mutated only through `update`.
#[component]
pub fn DragAndDropArea(items: RwSignal<Vec<FormItem>>, dark: Signal<bool>) -> impl IntoView {
    // Index of the item currently being dragged, if any.
    let drag_index = RwSignal::new(None::<usize>);

    let entry_class = move || {
        if dark.get() {
            "mb-2 p-3 border border-gray-600 rounded-md shadow-sm bg-gray-800 text-white cursor-move flex items-center justify-between"
        } else {
            "mb-2 p-3 border border-gray-300 rounded-md shadow-sm bg-white cursor-move flex items-center justify-between"
        }
    };

    view! {
        <div class=move || {
            if dark.get() {
                "border border-gray-600 p-3 rounded-md bg-gray-800 min-h-32"
            } else {
                "border border-gray-300 p-3 rounded-md bg-gray-50 min-h-32"
            }
        }>
            {move || {
                let list = items.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-sm text-gray-400 italic">
                            "Add elements from the sidebar to get started."
                        </p>
                    }.into_any();
                }

                view! {
                    <div>
                        {list.into_iter().enumerate().map(|(index, item)| view! {
                            <div
                                class=entry_class
                                draggable="true"
                                on:dragstart=move |_| drag_index.set(Some(index))
                                on:dragover=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(from) = drag_index.get_untracked() {
                                        // Hovering over the dragged item itself
                                        // must not touch the sequence.
                                        if from != index {
                                            items.update(|list| reorder(list, from, index));
                                            drag_index.set(Some(index));
                                        }
                                    }
                                }
                                on:drop=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    drag_index.set(None);
                                }
                                on:dragend=move |_| drag_index.set(None)
                            >
                                <span>{item.label.clone()}</span>
                                <button
                                    type="button"
                                    class="p-1 rounded hover:bg-red-100"
                                    title="Remove"
                                    on:click=move |_| items.update(|list| remove_at(list, index))
                                >
                                    <svg class="w-4 h-4 text-red-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
                                    </svg>
                                </button>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

// ============================================================================
// Tests
// ============================================================================
