use crate::error::GeneratorError;
use crate::logger::LogFormat;
use graphql_schema::GeneratorConfig;
use std::fs;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "graphql-schema-generator",
    about = "Generates a GraphQL schema description from a datamodel."
)]
pub struct GeneratorOpt {
    /// Path of the datamodel file.
    #[structopt(long, short)]
    pub schema: PathBuf,

    /// Directory the generated schema is written to.
    #[structopt(long, default_value = "./generated")]
    pub out: PathBuf,

    /// Generator configuration as repeated key=value pairs, e.g.
    /// `-c createCRUD=true`. Overrides values from --config-file.
    #[structopt(long = "config", short = "c", parse(try_from_str = parse_key_value), number_of_values = 1)]
    pub config: Vec<(String, String)>,

    /// A flat JSON object with generator configuration.
    #[structopt(long)]
    pub config_file: Option<PathBuf>,

    /// Log output format: `text` or `json`.
    #[structopt(long, default_value = "text")]
    log_format: String,
}

impl GeneratorOpt {
    pub fn log_format(&self) -> LogFormat {
        match self.log_format.as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    /// Assemble the generator config from the config file and the
    /// key=value pairs, pairs taking precedence.
    pub fn generator_config(&self) -> Result<GeneratorConfig, GeneratorError> {
        let mut pairs = Vec::new();

        if let Some(path) = &self.config_file {
            pairs.extend(read_config_file(path)?);
        }

        pairs.extend(self.config.iter().cloned());

        // Custom rules are compiled-in library hooks; a config key
        // naming a rules module cannot be honored by this host.
        if pairs.iter().any(|(key, _)| key == "customRules") {
            return Err(GeneratorError::ConfigurationError(
                "customRules is not supported on the command line; supply CustomRules through the graphql-schema library API".to_owned(),
            ));
        }

        Ok(GeneratorConfig::from_pairs(pairs))
    }
}

fn read_config_file(path: &Path) -> Result<Vec<(String, String)>, GeneratorError> {
    let content = fs::read_to_string(path)?;
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .map_err(|err| {
            GeneratorError::ConfigurationError(format!(
                "error parsing {}: {err}",
                path.display()
            ))
        })?;

    map.into_iter()
        .map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => {
                    return Err(GeneratorError::ConfigurationError(format!(
                        "config key {key} must be a string, boolean or number"
                    )));
                }
            };

            Ok((key, rendered))
        })
        .collect()
}

fn parse_key_value(pair: &str) -> Result<(String, String), String> {
    match pair.split_once('=') {
        Some((key, value)) => Ok((key.to_owned(), value.to_owned())),
        None => Err(format!("invalid key=value pair: {pair}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt_with_pairs(pairs: &[(&str, &str)]) -> GeneratorOpt {
        GeneratorOpt {
            schema: PathBuf::from("schema.prisma"),
            out: PathBuf::from("./generated"),
            config: pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
            config_file: None,
            log_format: "text".to_owned(),
        }
    }

    #[test]
    fn parses_key_value_pairs() {
        assert_eq!(
            parse_key_value("createCRUD=true").unwrap(),
            ("createCRUD".to_owned(), "true".to_owned())
        );
        assert!(parse_key_value("createCRUD").is_err());
    }

    #[test]
    fn config_pairs_reach_the_generator_config() {
        let opt = opt_with_pairs(&[("createCRUD", "true"), ("format", "ts")]);
        let config = opt.generator_config().unwrap();

        assert_eq!(config.get("createCRUD"), Some("true"));
        assert_eq!(config.get("format"), Some("ts"));
    }

    #[test]
    fn custom_rules_on_the_command_line_are_rejected() {
        let opt = opt_with_pairs(&[("customRules", "./rules")]);

        assert!(matches!(
            opt.generator_config(),
            Err(GeneratorError::ConfigurationError(_))
        ));
    }
}
