use super::{Pair, Rule, helpers::parsing_catch_all};
use crate::{Enum, EnumValue};

pub(super) fn parse_enum(pair: Pair<'_>) -> Enum {
    let mut name: Option<String> = None;
    let mut values = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(current.as_str().to_owned()),
            Rule::enum_value_declaration => values.push(parse_enum_value(current)),
            // @@map on the enum block carries nothing we render.
            Rule::block_attribute => (),
            _ => parsing_catch_all(&current, "enum"),
        }
    }

    Enum {
        name: name.expect("an enum declaration always carries a name"),
        values,
    }
}

fn parse_enum_value(pair: Pair<'_>) -> EnumValue {
    let mut name: Option<String> = None;

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(current.as_str().to_owned()),
            // Value attributes such as @map are ignored.
            Rule::field_attribute => (),
            _ => parsing_catch_all(&current, "enum value"),
        }
    }

    EnumValue {
        name: name.expect("an enum value always carries a name"),
    }
}
