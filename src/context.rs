//! Session-scoped layout state, provided once at the root.
//!
//! The layout variant lives in a reactive context rather than a global: the
//! root installs it, any descendant reads it, and the signal is the only
//! write channel. State resets on a full page reload.

use leptos::prelude::*;

use crate::types::Layout;

#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub layout: RwSignal<Layout>,
}

/// Install the layout context. Call once from the root component.
pub fn provide_layout() -> LayoutContext {
    let ctx = LayoutContext {
        layout: RwSignal::new(Layout::default()),
    };
    provide_context(ctx);
    ctx
}

/// Read the layout context. Panics when no provider is mounted: misuse is a
/// programming error in the component tree, not a runtime condition.
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("use_layout called outside a layout provider")
}
