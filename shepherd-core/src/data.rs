//! Reference data bundled into the binary.
//!
//! The manifest enumerates the managed repositories; the canonical file
//! copies are the diff baselines the reconciler enforces.

/// Default repository manifest.
pub const REPOS_TOML: &str = include_str!("../data/repos.toml");

/// Canonical `tox.ini` content, the baseline for the tracked-file check.
pub const TOX_INI: &str = include_str!("../data/tox.ini");
