//! Validation rule table and the composite form validator.
//!
//! Every item type maps to exactly one `FieldRule`; the composite
//! `FormSchema` covers every item id in the current sequence. Unknown type
//! names degrade to the optional-string rule rather than erroring.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::types::{FieldType, FormItem};

// ============================================================================
// Per-Type Rules
// ============================================================================

/// Validation rule for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    /// Non-empty string required.
    RequiredText,
    /// Boolean, defaults to `false`. Always passes.
    Bool,
    /// Optional date value.
    OptionalDate,
    /// Optional file-list value.
    OptionalFile,
    /// String of exactly this many characters.
    ExactLength(usize),
    /// Optional string; the forward-compatibility default.
    OptionalText,
}

impl FieldRule {
    /// Rule for a known type. Exhaustive over the closed type set.
    pub fn for_type(field_type: FieldType) -> FieldRule {
        match field_type {
            FieldType::Input | FieldType::Password | FieldType::Phone => FieldRule::RequiredText,
            FieldType::Checkbox => FieldRule::Bool,
            // A select submits a string; requiring it non-empty is the
            // "must choose" behavior.
            FieldType::Select => FieldRule::RequiredText,
            FieldType::Date => FieldRule::RequiredText,
            FieldType::DatePicker | FieldType::Datetime => FieldRule::OptionalDate,
            FieldType::File => FieldRule::OptionalFile,
            FieldType::InputOtp => FieldRule::ExactLength(6),
        }
    }

    /// Rule for a type name. Names outside the catalogue fall through to the
    /// optional-string default.
    pub fn for_name(name: &str) -> FieldRule {
        match FieldType::from_name(name) {
            Some(ty) => FieldRule::for_type(ty),
            None => FieldRule::OptionalText,
        }
    }

    /// Check one value against this rule. `None` means the field passes.
    fn check(&self, label: &str, value: Option<&Value>) -> Option<String> {
        match self {
            FieldRule::RequiredText => {
                let present = value
                    .and_then(|v| v.as_str())
                    .map(|s| !s.is_empty())
                    .unwrap_or(false);
                (!present).then(|| format!("{label} is required"))
            }
            FieldRule::ExactLength(n) => {
                let len = value
                    .and_then(|v| v.as_str())
                    .map(|s| s.chars().count())
                    .unwrap_or(0);
                (len != *n).then(|| format!("Must be {n} characters"))
            }
            FieldRule::Bool
            | FieldRule::OptionalDate
            | FieldRule::OptionalFile
            | FieldRule::OptionalText => None,
        }
    }
}

// ============================================================================
// Composite Schema
// ============================================================================

/// One validated field: the item's id as the field key, plus the display
/// label used in error messages.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSchema {
    pub id: String,
    pub label: String,
    pub rule: FieldRule,
}

/// The composite validator for the current item sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn from_items(items: &[FormItem]) -> Self {
        let fields = items
            .iter()
            .map(|item| FieldSchema {
                id: item.id.clone(),
                label: item.label.clone(),
                rule: FieldRule::for_type(item.field_type),
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Validate a value map. An empty result means the form is valid;
    /// otherwise each offending field id maps to its inline message.
    pub fn validate(&self, values: &HashMap<String, Value>) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .rule
                    .check(&field.label, values.get(&field.id))
                    .map(|msg| (field.id.clone(), msg))
            })
            .collect()
    }
}

/// Initial form state for a sequence: each item's declared value if present,
/// otherwise `false` for checkboxes and the empty string for everything else.
pub fn default_values(items: &[FormItem]) -> HashMap<String, Value> {
    items
        .iter()
        .map(|item| {
            let value = item.value.clone().unwrap_or_else(|| match item.field_type {
                FieldType::Checkbox => Value::Bool(false),
                _ => Value::String(String::new()),
            });
            (item.id.clone(), value)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(field_type: FieldType, stamp: u64) -> FormItem {
        FormItem::new(field_type, stamp)
    }

    #[test]
    fn test_rule_table_is_total() {
        use FieldRule::*;
        let expected = [
            ("input", RequiredText),
            ("password", RequiredText),
            ("phone", RequiredText),
            ("checkbox", Bool),
            ("select", RequiredText),
            ("date", RequiredText),
            ("datePicker", OptionalDate),
            ("datetime", OptionalDate),
            ("file", OptionalFile),
            ("inputOTP", ExactLength(6)),
        ];
        for (name, rule) in expected {
            assert_eq!(FieldRule::for_name(name), rule, "rule for {name}");
        }
    }

    #[test]
    fn test_unknown_type_name_gets_optional_string_default() {
        assert_eq!(FieldRule::for_name("signature"), FieldRule::OptionalText);
        assert_eq!(FieldRule::for_name(""), FieldRule::OptionalText);
    }

    #[test]
    fn test_required_text_rejects_empty_and_missing() {
        let items = [item(FieldType::Input, 1)];
        let schema = FormSchema::from_items(&items);
        let id = &items[0].id;

        let errors = schema.validate(&default_values(&items));
        assert_eq!(errors.get(id).map(String::as_str), Some("Input is required"));

        let mut values = default_values(&items);
        values.remove(id);
        assert!(!schema.validate(&values).is_empty());

        values.insert(id.clone(), json!("hello"));
        assert!(schema.validate(&values).is_empty());
    }

    #[test]
    fn test_unchecked_checkbox_is_valid() {
        let items = [item(FieldType::Checkbox, 1)];
        let schema = FormSchema::from_items(&items);
        let values = default_values(&items);
        assert_eq!(values[&items[0].id], Value::Bool(false));
        assert!(schema.validate(&values).is_empty());
    }

    #[test]
    fn test_otp_requires_exactly_six_characters() {
        let items = [item(FieldType::InputOtp, 1)];
        let schema = FormSchema::from_items(&items);
        let id = items[0].id.clone();

        let mut values = default_values(&items);
        values.insert(id.clone(), json!("12345"));
        let errors = schema.validate(&values);
        assert_eq!(errors.get(&id).map(String::as_str), Some("Must be 6 characters"));

        values.insert(id.clone(), json!("123456"));
        assert!(schema.validate(&values).is_empty());

        values.insert(id.clone(), json!("1234567"));
        assert!(!schema.validate(&values).is_empty());
    }

    #[test]
    fn test_optional_rules_pass_when_empty() {
        let items = [
            item(FieldType::File, 1),
            item(FieldType::DatePicker, 2),
            item(FieldType::Datetime, 3),
        ];
        let schema = FormSchema::from_items(&items);
        assert!(schema.validate(&default_values(&items)).is_empty());
        assert!(schema.validate(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_declared_value_overrides_derived_default() {
        let mut pre = item(FieldType::Input, 1);
        pre.value = Some(json!("prefilled"));
        let values = default_values(&[pre.clone()]);
        assert_eq!(values[&pre.id], json!("prefilled"));
    }

    #[test]
    fn test_schema_covers_every_item_id_in_order() {
        let items = [
            item(FieldType::Input, 1),
            item(FieldType::Select, 2),
            item(FieldType::Checkbox, 3),
        ];
        let schema = FormSchema::from_items(&items);
        let ids: Vec<_> = schema.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["input-1", "select-2", "checkbox-3"]);
    }
}
