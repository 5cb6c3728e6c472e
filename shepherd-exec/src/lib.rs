//! # shepherd-exec
//!
//! External command execution. One seam — [`CommandRunner`] — through which
//! every subprocess in the workflow funnels, with a shell-backed
//! implementation offering spinner-captured and verbose-tee modes.

pub mod error;
pub mod runner;

pub use error::CommandError;
pub use runner::{CommandOutput, CommandRequest, CommandRunner, ShellRunner};
