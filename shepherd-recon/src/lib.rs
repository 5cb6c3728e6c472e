//! # shepherd-recon
//!
//! The repository reconciliation workflow: a fork/clone orchestrator that
//! populates every repository's working directory, and per-repository checks
//! that compare a tracked file against its canonical reference and drive the
//! branch/commit/push/PR cycle on divergence.

pub mod checks;
pub mod error;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod testing;

pub use checks::{CheckOutcome, TrackedFileCheck, TOX_INI};
pub use error::ReconError;
pub use orchestrator::clone_all;
