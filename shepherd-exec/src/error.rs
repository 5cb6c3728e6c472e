//! Error types for shepherd-exec.

use std::io;

use thiserror::Error;

/// All errors that can arise from running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command ran and exited nonzero. Carries both captured streams so
    /// the run-level handler can surface them.
    #[error("command '{command}' failed with exit code {code}")]
    Failed {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    /// The command could not be started at all.
    #[error("failed to start command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// I/O failure while feeding or draining the child process.
    #[error("I/O error while running '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}
