use super::{
    Pair, Rule, helpers::parsing_catch_all, parse_attribute::parse_attribute,
    parse_field::parse_field,
};
use crate::{Model, PrimaryKey};

pub(super) fn parse_model(pair: Pair<'_>) -> Model {
    let mut name: Option<String> = None;
    let mut fields = Vec::new();
    let mut primary_key = None;
    let mut unique_fields = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(current.as_str().to_owned()),
            Rule::field_declaration => fields.push(parse_field(current)),
            Rule::block_attribute => {
                let attribute = parse_attribute(current);

                match attribute.name.as_str() {
                    "id" => {
                        primary_key = attribute.first_array_arg().map(|fields| PrimaryKey { fields })
                    }
                    "unique" => {
                        if let Some(group) = attribute.first_array_arg() {
                            unique_fields.push(group);
                        }
                    }
                    // @@index, @@map and friends have no bearing on the
                    // generated schema.
                    _ => (),
                }
            }
            _ => parsing_catch_all(&current, "model"),
        }
    }

    Model {
        name: name.expect("a model declaration always carries a name"),
        fields,
        primary_key,
        unique_fields,
    }
}
