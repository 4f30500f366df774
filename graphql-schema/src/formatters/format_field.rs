use crate::field::GqlField;

/// Render a single rendered field as a definition line.
pub fn format_field(field: &GqlField) -> String {
    format!("{}: {}", field.name, field.field_type)
}
