//! Transpilation of a normalized datamodel into GraphQL SDL.
//!
//! The entry point is [`generate_graphql_schema`]: schema text plus a
//! [`GeneratorConfig`] in, the complete schema description out. The
//! datamodel parsing itself lives in the `datamodel` crate; this crate
//! owns the field transform pipeline, the derivation of operation
//! signatures and filter inputs, and the assembly and validation of the
//! final text.

mod config;
mod converters;
mod error;
mod extractors;
mod field;
mod filters;
mod formatters;
mod transpile;
mod utils;

pub use config::{CustomRule, CustomRules, GeneratorConfig, convert_config};
pub use error::GenerateError;
pub use field::{GqlField, SkippedField};
pub use formatters::{DefinitionKind, format_definition, format_field, format_scalar};
pub use transpile::transpile;
pub use utils::{format_pascal, remove_exclamation};

use tracing::debug;

/// Banner prepended to every generated schema file.
pub const DESCRIPTION: &str =
    "# Generated by graphql-schema-generator. Do not edit this file directly.";

/// Generate the GraphQL schema text for a schema source string.
///
/// Rewrites the config shorthands, parses the datamodel, scans the raw
/// text for queryable-field markers and hands everything to the
/// transpiler. The returned text is the validated, canonically printed
/// schema with the generated-file banner on top.
pub fn generate_graphql_schema(
    schema: &str,
    config: GeneratorConfig,
) -> Result<String, GenerateError> {
    let config = convert_config(config);
    let datamodel = datamodel::parse_schema(schema)?;
    let query_args = datamodel::scan_query_args(schema);

    debug!(
        models = datamodel.models.len(),
        enums = datamodel.enums.len(),
        query_args = query_args.len(),
        "transpiling datamodel"
    );

    let sdl = transpile(&datamodel, &config, &query_args)?;

    Ok(format!("{DESCRIPTION}\n\n{sdl}"))
}
