use datamodel::FieldArity;

/// A field in flight through the transform pipeline.
///
/// Starts out carrying the native type name of the datamodel field it
/// was built from; after the pipeline has run, `field_type` holds the
/// fully rendered output type including modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct GqlField {
    pub name: String,
    pub field_type: String,
    pub arity: FieldArity,
    pub is_id: bool,
}

impl From<&datamodel::Field> for GqlField {
    fn from(field: &datamodel::Field) -> Self {
        GqlField {
            name: field.name.clone(),
            field_type: field.field_type.clone(),
            arity: field.arity,
            is_id: field.is_id,
        }
    }
}

/// A field excluded from the rendered output by a failing pipeline
/// stage. One bad field never blocks the rest of its model.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedField {
    pub model: String,
    pub field: String,
    pub stage: &'static str,
    pub reason: String,
}
