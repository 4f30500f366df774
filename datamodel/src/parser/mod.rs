mod helpers;
mod parse_attribute;
mod parse_enum;
mod parse_field;
mod parse_model;
mod parse_schema;

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/datamodel.pest"]
pub(crate) struct DatamodelParser;

pub(crate) use parse_schema::parse_schema;

pub(crate) type Pair<'a> = pest::iterators::Pair<'a, Rule>;
