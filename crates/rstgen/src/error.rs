//! CLI error types.

use rstgen_config::ConfigError;
use rstgen_directives::FormatError;
use rstgen_editor::SessionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A compose step failed; `index` counts from 1.
    #[error("Step {index}: {source}")]
    Step {
        index: usize,
        #[source]
        source: SessionError,
    },

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),
}

