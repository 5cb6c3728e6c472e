//! Error types for shepherd-core.

use thiserror::Error;

/// All errors that can arise from configuration and manifest handling.
///
/// Every variant is fatal at startup, before any repository is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error on the repository manifest — includes line context
    /// from the toml crate.
    #[error("failed to parse repository manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// A repository slug was not of the `owner/name` form.
    #[error("invalid repository slug '{value}'; expected owner/name")]
    InvalidSlug { value: String },

    /// The manifest parsed but listed no repositories.
    #[error("repository manifest lists no repositories")]
    EmptyManifest,
}
