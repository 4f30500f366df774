use super::{
    DatamodelParser, Rule, helpers::parsing_catch_all, parse_enum::parse_enum,
    parse_model::parse_model,
};
use crate::{Datamodel, DatamodelError};
use pest::Parser;

/// Parse a schema string and return the normalized datamodel.
pub(crate) fn parse_schema(datamodel_string: &str) -> Result<Datamodel, DatamodelError> {
    let mut parsed = DatamodelParser::parse(Rule::schema, datamodel_string)
        .map_err(DatamodelError::new_parser_error)?;

    let schema = parsed.next().expect("parse result must contain a schema");
    let mut datamodel = Datamodel::default();

    for current in schema.into_inner() {
        match current.as_rule() {
            Rule::model_declaration => {
                let model = parse_model(current);
                datamodel.models.insert(model.name.clone(), model);
            }
            Rule::enum_declaration => {
                let r#enum = parse_enum(current);
                datamodel.enums.insert(r#enum.name.clone(), r#enum);
            }
            // Datasource and generator blocks are validated by the grammar
            // but carry nothing the transpiler consumes.
            Rule::config_block => (),
            Rule::EOI => (),
            _ => parsing_catch_all(&current, "schema"),
        }
    }

    Ok(datamodel)
}
