use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring validation, outside the engine itself.
///
/// Rule failures are never errors: they are reported on the field.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid validator options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown form '{0}' (expected login, registration or service-request)")]
    UnknownForm(String),
}
