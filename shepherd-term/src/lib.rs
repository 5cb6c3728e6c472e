//! # shepherd-term
//!
//! Terminal capability detection, progress spinner, colored unified-diff
//! rendering, and interactive prompts.

pub mod diff;
pub mod features;
pub mod prompt;
pub mod spinner;

pub use diff::render_diff;
pub use features::TermFeatures;
pub use prompt::{CommitMessage, Prompt, PromptError, TerminalPrompt};
pub use spinner::Spinner;
