use crate::field::GqlField;
use datamodel::{FieldArity, Model};

/// Append the output language's type modifiers to a converted type.
///
/// Composition order: element-level non-null wraps the inner type
/// first, then the list wrapper, then the outer non-null. Must run
/// exactly once per field; rerunning corrupts the rendered type.
pub(super) fn add_type_modifiers(mut field: GqlField, _model: &Model) -> GqlField {
    field.field_type = match field.arity {
        FieldArity::List => {
            let element = format!("{}!", field.field_type);
            format!("[{element}]!")
        }
        FieldArity::Required => format!("{}!", field.field_type),
        FieldArity::Optional => field.field_type,
    };

    field
}
