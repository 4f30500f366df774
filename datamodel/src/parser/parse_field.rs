use super::{Pair, Rule, helpers::parsing_catch_all, parse_attribute::parse_attribute};
use crate::{Field, FieldArity};

pub(super) fn parse_field(pair: Pair<'_>) -> Field {
    let mut name: Option<String> = None;
    let mut field_type: Option<String> = None;
    let mut arity = FieldArity::Required;
    let mut is_id = false;
    let mut is_unique = false;
    let mut relation_from_fields = None;
    let mut relation_references = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(current.as_str().to_owned()),
            Rule::field_type => {
                for part in current.into_inner() {
                    match part.as_rule() {
                        Rule::identifier => field_type = Some(part.as_str().to_owned()),
                        Rule::list_modifier => arity = FieldArity::List,
                        Rule::optional_modifier => arity = FieldArity::Optional,
                        _ => parsing_catch_all(&part, "field type"),
                    }
                }
            }
            Rule::field_attribute => {
                let attribute = parse_attribute(current);

                match attribute.name.as_str() {
                    "id" => is_id = true,
                    "unique" => is_unique = true,
                    "relation" => {
                        relation_from_fields = attribute.array_arg("fields");
                        relation_references = attribute.array_arg("references");
                    }
                    // @default, @updatedAt, @map, native type attributes:
                    // irrelevant to the generated schema.
                    _ => (),
                }
            }
            _ => parsing_catch_all(&current, "field"),
        }
    }

    Field {
        name: name.expect("a field declaration always carries a name"),
        field_type: field_type.expect("a field declaration always carries a type"),
        arity,
        is_id,
        is_unique,
        relation_from_fields,
        relation_references,
    }
}
