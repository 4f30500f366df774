use crate::parser::Rule;
use thiserror::Error;

/// An error encountered while parsing a schema into a [`crate::Datamodel`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DatamodelError {
    message: String,
}

impl DatamodelError {
    pub(crate) fn new_parser_error(err: pest::error::Error<Rule>) -> Self {
        DatamodelError {
            message: format!("Error validating datamodel:\n{err}"),
        }
    }
}
