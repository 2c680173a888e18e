use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = InterpolateError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum InterpolateError {
    #[error("failed to read template {}", path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A replacement value in untyped configuration was not a string.
    #[error("Expected a string")]
    ExpectedString { token: String },
    #[error("replacements must be a mapping of token names to strings")]
    ExpectedMapping,
    #[error("failed to determine working directory")]
    WorkingDirectory(#[source] io::Error),
    #[error("invalid token pattern")]
    Pattern(#[from] regex::Error),
    #[error("invalid JSON options")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML options")]
    Toml(#[from] toml::de::Error),
}
