use datamodel::Datamodel;
use indexmap::IndexSet;

/// Scalar names that need no declaration in the output.
const BUILT_IN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "DateTime", "ID"];

/// Collect the custom scalar names used across all models, each once,
/// in first-seen order.
///
/// Names of declared models and enums are object-type or enum
/// references rather than scalars and are left out. The result is
/// derived from the datamodel on every call; nothing is accumulated
/// between generations.
pub(crate) fn extract_scalars(datamodel: &Datamodel) -> Vec<&str> {
    let mut scalars = IndexSet::new();

    for model in datamodel.models.values() {
        for field in &model.fields {
            let name = field.field_type.as_str();

            if BUILT_IN_SCALARS.contains(&name) || datamodel.is_declared_type(name) {
                continue;
            }

            scalars.insert(name);
        }
    }

    scalars.into_iter().collect()
}
