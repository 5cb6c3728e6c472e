//! Interactive prompts: yes/no confirmation and editor-backed commit
//! messages.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::Command;

use colored::Colorize;
use thiserror::Error;

/// I/O failures while interacting with the user. Distinct from a *negative*
/// answer, which is an ordinary `Ok` value.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error while prompting: {0}")]
    Io(#[from] io::Error),

    /// The editor command could not be launched at all.
    #[error("failed to launch editor '{command}': {source}")]
    Editor {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// A commit message plus the temp file backing it.
///
/// The backing file must outlive the commit and PR steps: it is handed
/// verbatim to `git commit --file` and `gh pr create --body-file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub text: String,
    pub path: PathBuf,
}

/// The interactive surface the reconciliation workflow talks to.
pub trait Prompt {
    /// Block until the user answers `y` or `n`.
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError>;

    /// Solicit a commit message through the editor. `Ok(None)` means the
    /// user saved nothing — the caller must abort the current step.
    fn commit_message(&mut self, prior: &str) -> Result<Option<CommitMessage>, PromptError>;
}

/// [`Prompt`] over the real terminal and `$EDITOR`.
#[derive(Debug)]
pub struct TerminalPrompt {
    editor: String,
}

impl TerminalPrompt {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let stdin = io::stdin();
        confirm_from(&mut stdin.lock(), &mut io::stdout(), question)
    }

    fn commit_message(&mut self, prior: &str) -> Result<Option<CommitMessage>, PromptError> {
        let (mut file, path) = tempfile::NamedTempFile::new()?
            .keep()
            .map_err(|e| PromptError::Io(e.error))?;
        file.write_all(prior.as_bytes())?;
        file.flush()?;
        drop(file);

        let before = fs::metadata(&path)?.modified()?;
        let command = format!("{} {}", self.editor, path.display());
        Command::new("sh")
            .arg("-c")
            .arg(&command)
            .status()
            .map_err(|source| PromptError::Editor {
                command: command.clone(),
                source,
            })?;
        let after = fs::metadata(&path)?.modified()?;

        if before == after {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?.trim().to_owned();
        Ok(Some(CommitMessage { text, path }))
    }
}

/// The y/n loop, generic over its streams. Only the exact lowercased,
/// trimmed answers `y` and `n` terminate it; everything else re-asks.
pub fn confirm_from<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<bool, PromptError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}: ", format!("{question} (y/n)").bright_white())?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while awaiting a y/n answer",
            )));
        }
        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => continue,
        }
    }
}
