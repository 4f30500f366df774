use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The STDOUT log output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// An installer for a global logger.
#[derive(Debug)]
pub struct Logger {
    log_format: LogFormat,
}

impl Logger {
    pub fn new() -> Self {
        Logger {
            log_format: LogFormat::Text,
        }
    }

    /// Sets the STDOUT log output format. Default: Text.
    pub fn log_format(&mut self, log_format: LogFormat) {
        self.log_format = log_format;
    }

    /// Install this logger as the global default, filtered by
    /// `RUST_LOG`.
    pub fn install(self) -> Result<(), SetGlobalDefaultError> {
        let filter = EnvFilter::from_default_env();

        match self.log_format {
            LogFormat::Text => {
                let subscriber = FmtSubscriber::builder()
                    .with_env_filter(filter)
                    .finish();

                tracing::subscriber::set_global_default(subscriber)
            }
            LogFormat::Json => {
                let subscriber = FmtSubscriber::builder()
                    .with_env_filter(filter)
                    .json()
                    .finish();

                tracing::subscriber::set_global_default(subscriber)
            }
        }
    }
}
