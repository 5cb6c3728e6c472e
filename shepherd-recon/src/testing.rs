//! Scripted collaborators for workflow tests.
//!
//! `RecordingRunner` stands in for the shell: it records every request,
//! emulates `gh repo clone` by creating the target directory, and can be told
//! to fail commands matching a substring. `ScriptedPrompt` replays canned
//! answers and records the questions asked.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use shepherd_exec::{CommandError, CommandOutput, CommandRequest, CommandRunner};
use shepherd_term::{CommitMessage, Prompt, PromptError};

pub(crate) struct RecordingRunner {
    requests: RefCell<Vec<CommandRequest>>,
    fail_matching: Option<(String, i32)>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            fail_matching: None,
        }
    }

    /// Fail any command containing `needle` with the given exit code.
    pub(crate) fn fail_matching(mut self, needle: &str, code: i32) -> Self {
        self.fail_matching = Some((needle.to_owned(), code));
        self
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.command.clone())
            .collect()
    }

    pub(crate) fn requests(&self) -> Vec<CommandRequest> {
        self.requests.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, request: &CommandRequest) -> Result<CommandOutput, CommandError> {
        self.requests.borrow_mut().push(request.clone());

        if let Some((needle, code)) = &self.fail_matching {
            if request.command.contains(needle.as_str()) {
                return Err(CommandError::Failed {
                    command: request.command.clone(),
                    code: *code,
                    stdout: String::new(),
                    stderr: String::new(),
                });
            }
        }

        if let Some(dir) = clone_target(request) {
            fs::create_dir_all(dir).expect("create emulated clone dir");
        }

        Ok(CommandOutput {
            stdout: String::new(),
            stderr: String::new(),
            code: 0,
        })
    }
}

/// For `gh repo clone <uri> ...`, the directory the clone would create.
fn clone_target(request: &CommandRequest) -> Option<PathBuf> {
    let rest = request.command.strip_prefix("gh repo clone ")?;
    let uri = rest.split_whitespace().next()?;
    let name = uri.rsplit('/').next()?.trim_end_matches(".git");
    Some(request.cwd.as_ref()?.join(name))
}

pub(crate) struct ScriptedPrompt {
    confirms: VecDeque<bool>,
    messages: VecDeque<Option<CommitMessage>>,
    pub(crate) questions: Vec<String>,
}

impl ScriptedPrompt {
    pub(crate) fn new() -> Self {
        Self {
            confirms: VecDeque::new(),
            messages: VecDeque::new(),
            questions: Vec::new(),
        }
    }

    pub(crate) fn then_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub(crate) fn then_message(mut self, message: Option<CommitMessage>) -> Self {
        self.messages.push_back(message);
        self
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        self.questions.push(question.to_owned());
        Ok(self
            .confirms
            .pop_front()
            .expect("workflow asked an unscripted y/n question"))
    }

    fn commit_message(&mut self, _prior: &str) -> Result<Option<CommitMessage>, PromptError> {
        Ok(self
            .messages
            .pop_front()
            .expect("workflow solicited an unscripted commit message"))
    }
}
