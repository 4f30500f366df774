//! Parsing of Prisma-style schema text into the normalized datamodel
//! consumed by the `graphql-schema` transpiler.
//!
//! The grammar covers the subset of the schema language the generator
//! cares about: `model` and `enum` blocks, field arities, `@id`,
//! `@unique` and `@relation` attributes, and `datasource`/`generator`
//! config blocks (parsed, then ignored). Everything else an attribute
//! position can hold is tolerated.

mod datamodel;
mod error;
mod parser;
mod query_args;

pub use self::datamodel::{Datamodel, Enum, EnumValue, Field, FieldArity, Model, PrimaryKey};
pub use error::DatamodelError;
pub use query_args::{QueryArg, scan_query_args};

/// Parse a schema string into a [`Datamodel`].
pub fn parse_schema(datamodel_string: &str) -> Result<Datamodel, DatamodelError> {
    parser::parse_schema(datamodel_string)
}
