//! Source-listing generator for the Code tab.
//!
//! Pure function from the current item sequence to an illustrative listing
//! that mirrors the preview: the schema declaration first, then a `view!`
//! markup skeleton. The table here covers the full type catalogue so the
//! listing and the rendered preview never disagree.

use std::fmt::Write;

use crate::schema::FieldRule;
use crate::types::{FieldType, FormItem};

/// Generate the copyable listing for the current sequence.
pub fn generate_code(items: &[FormItem]) -> String {
    let mut out = String::new();

    out.push_str("// Form schema\nlet fields = vec![\n");
    for item in items {
        let _ = writeln!(
            out,
            "    ({:?}, {}), // {}",
            item.id,
            rule_expr(FieldRule::for_type(item.field_type)),
            item.label
        );
    }
    out.push_str("];\n\nview! {\n    <form>\n");

    for item in items {
        out.push_str("        <div class=\"form-field\">\n");
        let _ = writeln!(
            out,
            "            <label for={:?}>{:?}</label>",
            item.id, item.label
        );
        push_control(&mut out, item);
        out.push_str("        </div>\n");
    }

    out.push_str("        <button type=\"submit\">\"Submit\"</button>\n    </form>\n}\n");
    out
}

fn rule_expr(rule: FieldRule) -> &'static str {
    match rule {
        FieldRule::RequiredText => "FieldRule::RequiredText",
        FieldRule::Bool => "FieldRule::Bool",
        FieldRule::OptionalDate => "FieldRule::OptionalDate",
        FieldRule::OptionalFile => "FieldRule::OptionalFile",
        FieldRule::ExactLength(_) => "FieldRule::ExactLength(6)",
        FieldRule::OptionalText => "FieldRule::OptionalText",
    }
}

fn push_control(out: &mut String, item: &FormItem) {
    match item.field_type {
        FieldType::Select => {
            let _ = writeln!(out, "            <select name={:?}>", item.id);
            out.push_str("                <option value=\"\">\"Select an option\"</option>\n");
            for option in item.options.as_deref().unwrap_or_default() {
                let _ = writeln!(
                    out,
                    "                <option value={option:?}>{option:?}</option>"
                );
            }
            out.push_str("            </select>\n");
        }
        FieldType::InputOtp => {
            let _ = writeln!(
                out,
                "            <input type=\"text\" inputmode=\"numeric\" maxlength=\"6\" name={:?} />",
                item.id
            );
        }
        other => {
            let input_type = match other {
                FieldType::Checkbox => "checkbox",
                FieldType::Password => "password",
                FieldType::Phone => "tel",
                // The popover picker collapses to a plain date input in the
                // generated skeleton.
                FieldType::Date | FieldType::DatePicker => "date",
                FieldType::Datetime => "datetime-local",
                FieldType::File => "file",
                _ => "text",
            };
            let _ = writeln!(
                out,
                "            <input type=\"{}\" name={:?} />",
                input_type, item.id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_still_yields_a_form_shell() {
        let code = generate_code(&[]);
        assert!(code.contains("let fields = vec![\n];"));
        assert!(code.contains("<form>"));
        assert!(code.contains("\"Submit\""));
    }

    #[test]
    fn test_one_schema_entry_and_one_block_per_item_in_order() {
        let items = [
            FormItem::new(FieldType::Input, 1),
            FormItem::new(FieldType::Checkbox, 2),
            FormItem::new(FieldType::Select, 3),
        ];
        let code = generate_code(&items);

        let input_pos = code.find("\"input-1\"").unwrap();
        let checkbox_pos = code.find("\"checkbox-2\"").unwrap();
        let select_pos = code.find("\"select-3\"").unwrap();
        assert!(input_pos < checkbox_pos && checkbox_pos < select_pos);

        assert!(code.contains("(\"input-1\", FieldRule::RequiredText)"));
        assert!(code.contains("(\"checkbox-2\", FieldRule::Bool)"));
        assert!(code.contains("<input type=\"checkbox\" name=\"checkbox-2\" />"));
    }

    #[test]
    fn test_select_markup_lists_declared_options() {
        let items = [FormItem::new(FieldType::Select, 7)];
        let code = generate_code(&items);
        assert!(code.contains("<option value=\"Option 1\">\"Option 1\"</option>"));
        assert!(code.contains("<option value=\"Option 3\">\"Option 3\"</option>"));
    }

    #[test]
    fn test_generator_covers_the_full_catalogue() {
        let all = [
            (FieldType::Input, "type=\"text\""),
            (FieldType::Password, "type=\"password\""),
            (FieldType::Phone, "type=\"tel\""),
            (FieldType::Date, "type=\"date\""),
            (FieldType::DatePicker, "type=\"date\""),
            (FieldType::Datetime, "type=\"datetime-local\""),
            (FieldType::Checkbox, "type=\"checkbox\""),
            (FieldType::File, "type=\"file\""),
            (FieldType::InputOtp, "maxlength=\"6\""),
            (FieldType::Select, "<select"),
        ];
        for (ty, marker) in all {
            let code = generate_code(&[FormItem::new(ty, 1)]);
            assert!(code.contains(marker), "{:?} should emit {marker}", ty);
        }
    }
}
