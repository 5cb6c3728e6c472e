//! The tracked-file check.
//!
//! Compares each repository's copy of a tracked file against the canonical
//! reference and, on divergence, walks the user through the update: show the
//! diff, confirm, acquire a commit message, then branch / overwrite / stage /
//! commit / push / open a PR — each step a blocking external command, any
//! failure aborting the remaining steps with no rollback.

use std::fmt;
use std::fs;

use similar::TextDiff;
use tracing::info;

use shepherd_core::{RepoName, Session};
use shepherd_exec::{CommandRequest, CommandRunner};
use shepherd_term::{render_diff, CommitMessage, Prompt};

use crate::error::{io_err, ReconError};

/// Description of one canonical-content check.
#[derive(Debug, Clone, Copy)]
pub struct TrackedFileCheck {
    /// Short name, used in branch names.
    pub name: &'static str,
    /// File name inside each repository.
    pub file_name: &'static str,
    /// The content the file must match.
    pub canonical: &'static str,
}

/// The bundled `tox.ini` check.
pub const TOX_INI: TrackedFileCheck = TrackedFileCheck {
    name: "tox_ini",
    file_name: "tox.ini",
    canonical: shepherd_core::data::TOX_INI,
};

/// Terminal state of a check for one repository. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The tracked file already matches the canonical reference.
    InSync,
    /// The file diverges and the user declined the update.
    Declined,
    /// The user accepted but the editor session produced no message.
    NoMessage,
    /// Branch created, file updated, committed, pushed, PR opened.
    Updated,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::InSync => write!(f, "in sync"),
            CheckOutcome::Declined => write!(f, "update declined"),
            CheckOutcome::NoMessage => write!(f, "no commit message provided"),
            CheckOutcome::Updated => write!(f, "updated, PR opened"),
        }
    }
}

/// Run the check across every repository in the session, in order.
///
/// The commit message is cached for the whole run: the first accepted update
/// seeds the message offered (behind a reuse prompt) to every later one.
pub fn run(
    check: &TrackedFileCheck,
    session: &Session,
    runner: &dyn CommandRunner,
    prompt: &mut dyn Prompt,
) -> Result<Vec<(RepoName, CheckOutcome)>, ReconError> {
    let base_lines: Vec<&str> = check.canonical.lines().collect();
    let mut cached: Option<CommitMessage> = None;
    let mut outcomes = Vec::new();

    for repo in &session.repos {
        info!("[{}] Checking {}...", repo.name, check.file_name);
        let work_dir = repo
            .work_dir
            .as_deref()
            .ok_or_else(|| ReconError::WorkDirUnset {
                name: repo.name.clone(),
            })?;
        let repo_file = work_dir.join(check.file_name);
        let repo_content = fs::read_to_string(&repo_file).map_err(|e| io_err(&repo_file, e))?;

        if base_lines == repo_content.lines().collect::<Vec<&str>>() {
            info!("[{}] {} is correct.", repo.name, check.file_name);
            outcomes.push((repo.name.clone(), CheckOutcome::InSync));
            continue;
        }

        let diff = unified_diff(check.canonical, &repo_content);
        render_diff(diff.lines());

        let question = format!(
            "Do you want to update the {} file in {}?",
            check.file_name, repo.name
        );
        if !prompt.confirm(&question)? {
            outcomes.push((repo.name.clone(), CheckOutcome::Declined));
            continue;
        }

        let message = match next_message(&mut cached, prompt)? {
            Some(message) => message,
            None => {
                outcomes.push((repo.name.clone(), CheckOutcome::NoMessage));
                continue;
            }
        };

        let branch = format!("chore/{}_{}", check.name, session.session_id);
        let command = format!("git checkout -t -b {branch}");
        let msg = format!("[{}] Creating a new tracking branch {branch}...", repo.name);
        runner.run(&CommandRequest::new(command, msg).cwd(work_dir))?;

        fs::write(&repo_file, check.canonical).map_err(|e| io_err(&repo_file, e))?;
        info!("[{}] Updated {}.", repo.name, check.file_name);

        let command = format!("git add {}", check.file_name);
        let msg = format!("[{}] Staging changes...", repo.name);
        runner.run(&CommandRequest::new(command, msg).cwd(work_dir))?;

        let command = format!("git commit --file {}", message.path.display());
        let msg = format!("[{}] Committing changes...", repo.name);
        runner.run(&CommandRequest::new(command, msg).cwd(work_dir))?;

        let command = format!("git push origin {branch}");
        let msg = format!("[{}] Pushing changes to origin...", repo.name);
        runner.run(&CommandRequest::new(command, msg).cwd(work_dir))?;

        let title = format!("chore: Update {}", check.file_name);
        let command = format!(
            "gh pr create --repo {} --title \"{}\" --base main --head {}:{} --body-file {}",
            repo.upstream,
            title,
            repo.origin_owner,
            branch,
            message.path.display(),
        );
        let msg = format!("[{}] Creating PR...", repo.name);
        runner.run(&CommandRequest::new(command, msg).cwd(work_dir))?;

        info!("[{}] PR created.", repo.name);
        outcomes.push((repo.name.clone(), CheckOutcome::Updated));
    }

    Ok(outcomes)
}

/// Resolve the commit message for the next accepted update.
///
/// First update: straight to the editor. Later updates: offer to reuse the
/// cached message; declining re-opens the editor seeded with it.
fn next_message(
    cached: &mut Option<CommitMessage>,
    prompt: &mut dyn Prompt,
) -> Result<Option<CommitMessage>, ReconError> {
    if let Some(existing) = cached.as_ref() {
        if prompt.confirm("Do you want to reuse the commit message?")? {
            return Ok(Some(existing.clone()));
        }
    }
    let prior = cached.as_ref().map(|m| m.text.clone()).unwrap_or_default();
    let fresh = prompt.commit_message(&prior)?;
    if let Some(message) = &fresh {
        *cached = Some(message.clone());
    }
    Ok(fresh)
}

/// Unified diff between canonical and repository content, 5 lines of
/// context, headed `base` / `repo`.
pub fn unified_diff(base: &str, repo: &str) -> String {
    TextDiff::from_lines(base, repo)
        .unified_diff()
        .context_radius(5)
        .header("base", "repo")
        .to_string()
}
