use crate::field::GqlField;
use datamodel::Model;

/// Map a field's native type onto the output type name.
///
/// Identifier fields become the `ID` scalar. Built-in scalars map onto
/// their GraphQL namesakes. Every other name - enum references,
/// relation fields, natives such as `Bytes` - passes through verbatim:
/// enums and object types are emitted under their own names, and the
/// remaining names end up declared as custom scalars by the extractor.
pub(super) fn convert_type(mut field: GqlField, _model: &Model) -> GqlField {
    if field.is_id {
        field.field_type = "ID".to_owned();
        return field;
    }

    let converted = match field.field_type.as_str() {
        "Int" => "Int",
        "Float" => "Float",
        "String" => "String",
        "Boolean" => "Boolean",
        "DateTime" => "DateTime",
        _ => return field,
    };

    field.field_type = converted.to_owned();
    field
}
