use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{0}")]
    Generate(#[from] graphql_schema::GenerateError),

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    ConfigurationError(String),
}
