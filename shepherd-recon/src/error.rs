//! Error types for shepherd-recon.

use std::path::PathBuf;

use thiserror::Error;

use shepherd_core::{ConfigError, RepoName};
use shepherd_exec::CommandError;
use shepherd_term::PromptError;

/// All errors that can arise from the reconciliation workflow.
///
/// A declined prompt or an abandoned editor session is NOT an error — those
/// are ordinary [`crate::CheckOutcome`] values.
#[derive(Debug, Error)]
pub enum ReconError {
    /// An external command exited nonzero or could not be run.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration was malformed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Prompting the user failed at the I/O level.
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A check was asked to run before the repository was cloned.
    #[error("repository '{name}' has no working directory; it was never cloned")]
    WorkDirUnset { name: RepoName },
}

/// Convenience constructor for [`ReconError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ReconError {
    ReconError::Io {
        path: path.into(),
        source,
    }
}
