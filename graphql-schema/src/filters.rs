//! Operator fields for the auto-generated filter-input types.

/// The filter operators exposed for one queryable field, keyed by its
/// base type.
///
/// Numeric and temporal bases get the comparison set; every other
/// retained base, Boolean included, falls back to the string set.
pub(crate) fn query_input_fields(base_type: &str) -> Vec<String> {
    match base_type {
        "Int" | "Float" | "DateTime" => {
            let mut fields: Vec<String> = ["_gt", "_lt", "_gte", "_lte", "_eq", "_neq"]
                .iter()
                .map(|op| format!("{op}: {base_type}"))
                .collect();
            fields.push("_is_null: Boolean".to_owned());
            fields
        }
        _ => [
            "_eq: String",
            "_contains: String",
            "_is_empty: Boolean",
            "_in: [String]",
            "_not_in: [String]",
            "_is_null: Boolean",
        ]
        .iter()
        .map(|field| (*field).to_owned())
        .collect(),
    }
}
