//! Core types for the form builder
//!
//! `FormItem` is the sole domain entity: one descriptor per form control,
//! created from the palette, reordered by drag, removed explicitly. The
//! descriptor's id and type never change after creation; only the position
//! in the owning sequence does.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Field Type
// ============================================================================

/// The closed set of form element types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "select")]
    Select,
    #[serde(rename = "datetime")]
    Datetime,
    #[serde(rename = "datePicker")]
    DatePicker,
    #[serde(rename = "inputOTP")]
    InputOtp,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "phone")]
    Phone,
}

impl FieldType {
    /// Canonical wire name, used in generated ids and code output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Checkbox => "checkbox",
            FieldType::Input => "input",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::Select => "select",
            FieldType::Datetime => "datetime",
            FieldType::DatePicker => "datePicker",
            FieldType::InputOtp => "inputOTP",
            FieldType::Password => "password",
            FieldType::Phone => "phone",
        }
    }

    /// Parse a canonical name. Unknown names yield `None`; callers degrade
    /// to the optional-string rule instead of erroring.
    pub fn from_name(name: &str) -> Option<FieldType> {
        match name {
            "checkbox" => Some(FieldType::Checkbox),
            "input" => Some(FieldType::Input),
            "date" => Some(FieldType::Date),
            "file" => Some(FieldType::File),
            "select" => Some(FieldType::Select),
            "datetime" => Some(FieldType::Datetime),
            "datePicker" => Some(FieldType::DatePicker),
            "inputOTP" => Some(FieldType::InputOtp),
            "password" => Some(FieldType::Password),
            "phone" => Some(FieldType::Phone),
            _ => None,
        }
    }

    /// Display label derived from the wire name: first letter capitalized,
    /// a space before every internal capital ("datePicker" -> "Date Picker").
    pub fn label(&self) -> String {
        derive_label(self.as_str())
    }
}

/// Label derivation rule for the render boundary.
pub fn derive_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

// ============================================================================
// Form Item
// ============================================================================

/// Options seeded onto newly created select items.
pub const DEFAULT_SELECT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// Descriptor for a single form control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormItem {
    /// Unique within a sequence, `"{type}-{stamp}"`. Immutable.
    pub id: String,
    /// Immutable after creation.
    pub field_type: FieldType,
    pub label: String,
    /// Present if and only if `field_type` is `Select`, and then non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Optional initial value; runtime values live in the form state map,
    /// never on the descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FormItem {
    pub fn new(field_type: FieldType, stamp: u64) -> Self {
        let options = (field_type == FieldType::Select).then(|| {
            DEFAULT_SELECT_OPTIONS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        Self {
            id: format!("{}-{}", field_type.as_str(), stamp),
            field_type,
            label: field_type.label(),
            options,
            placeholder: None,
            value: None,
        }
    }
}

// ============================================================================
// Id Stamps
// ============================================================================

/// Monotonic source for id stamps. Seeded from the wall clock on each call;
/// two adds within the same millisecond still get distinct stamps, so ids
/// stay unique within a sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdStamp {
    last: u64,
}

impl IdStamp {
    pub fn next(&mut self, now_ms: u64) -> u64 {
        self.last = now_ms.max(self.last + 1);
        self.last
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Visual theme applied uniformly across the composed UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Default,
    Custom,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Default => "default",
            Layout::Custom => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Layout> {
        match name {
            "default" => Some(Layout::Default),
            "custom" => Some(Layout::Custom),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_derivation() {
        assert_eq!(derive_label("input"), "Input");
        assert_eq!(derive_label("checkbox"), "Checkbox");
        assert_eq!(derive_label("datePicker"), "Date Picker");
        assert_eq!(derive_label("datetime"), "Datetime");
        // Consecutive capitals each get their own space; the rule is
        // mechanical, not linguistic.
        assert_eq!(derive_label("inputOTP"), "Input O T P");
    }

    #[test]
    fn test_field_type_name_roundtrip() {
        let all = [
            FieldType::Checkbox,
            FieldType::Input,
            FieldType::Date,
            FieldType::File,
            FieldType::Select,
            FieldType::Datetime,
            FieldType::DatePicker,
            FieldType::InputOtp,
            FieldType::Password,
            FieldType::Phone,
        ];
        for ty in all {
            assert_eq!(FieldType::from_name(ty.as_str()), Some(ty));
        }
        assert_eq!(FieldType::from_name("signature"), None);
    }

    #[test]
    fn test_select_items_get_default_options() {
        let item = FormItem::new(FieldType::Select, 1);
        assert_eq!(
            item.options.as_deref(),
            Some(&["Option 1".to_string(), "Option 2".into(), "Option 3".into()][..])
        );

        let plain = FormItem::new(FieldType::Input, 2);
        assert!(plain.options.is_none());
    }

    #[test]
    fn test_item_id_embeds_type_and_stamp() {
        let item = FormItem::new(FieldType::DatePicker, 1700000000123);
        assert_eq!(item.id, "datePicker-1700000000123");
        assert_eq!(item.label, "Date Picker");
    }

    #[test]
    fn test_id_stamps_are_strictly_monotonic() {
        let mut stamps = IdStamp::default();
        // Three adds within the same millisecond.
        let a = stamps.next(1000);
        let b = stamps.next(1000);
        let c = stamps.next(1000);
        assert!(a < b && b < c);
        // Clock moving forward wins again.
        assert_eq!(stamps.next(5000), 5000);
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(Layout::from_name("custom"), Some(Layout::Custom));
        assert_eq!(Layout::from_name("default"), Some(Layout::Default));
        assert_eq!(Layout::from_name("fancy"), None);
        assert_eq!(Layout::default(), Layout::Default);
    }
}
