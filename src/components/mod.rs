pub mod date_picker;
pub mod dnd_area;
pub mod form_builder;
pub mod form_field;
pub mod form_preview;
pub mod sidebar;
