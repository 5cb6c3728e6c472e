//! Fork/clone orchestration.
//!
//! Populates every repository's working directory before any check runs:
//! optionally ensures a fork exists upstream, shallow-clones the origin into
//! the session scratch directory, and hard-resets the clone to the
//! upstream's default branch so checks always start from a known-clean base.
//!
//! Any command failure is fatal for the whole run — reconciliation is
//! meaningless for a repository that was never cloned.

use std::fs;
use std::path::Path;

use tracing::debug;

use shepherd_core::{Repo, Session};
use shepherd_exec::{CommandRequest, CommandRunner};

use crate::error::{io_err, ReconError};

/// Clone and reset every configured repository, in manifest order, setting
/// `work_dir` on each as it lands on disk.
pub fn clone_all(session: &mut Session, runner: &dyn CommandRunner) -> Result<(), ReconError> {
    let scratch = session.scratch_dir.clone();
    let check_forks = session.check_forks;

    for repo in &mut session.repos {
        if check_forks {
            ensure_fork(repo, &scratch, runner)?;
        }

        let command = format!("gh repo clone {} -- --depth=1", repo.origin_uri);
        let msg = format!("[{}] Cloning from origin...", repo.name);
        runner.run(&CommandRequest::new(command, msg).cwd(&scratch))?;

        // gh names the clone after the repository, not the manifest key
        let work_dir = scratch.join(repo.origin.name());
        debug!("[{}] work dir is {}", repo.name, work_dir.display());
        repo.work_dir = Some(work_dir.clone());

        let msg = format!("[{}] Resetting to upstream/main...", repo.name);
        runner.run(&CommandRequest::new("git reset --hard upstream/main", msg).cwd(&work_dir))?;
    }

    Ok(())
}

/// Ensure the user has a fork of the upstream repository.
///
/// `gh repo fork` must run inside a clone, so the upstream is shallow-cloned
/// into the scratch directory and discarded afterwards. Creating a fork that
/// already exists is not an error.
fn ensure_fork(repo: &Repo, scratch: &Path, runner: &dyn CommandRunner) -> Result<(), ReconError> {
    let command = format!("gh repo clone {} -- --depth=1", repo.upstream_uri);
    let msg = format!("[{}] Cloning from upstream...", repo.name);
    runner.run(&CommandRequest::new(command, msg).cwd(scratch))?;

    let scratch_clone = scratch.join(repo.upstream.name());
    let msg = format!("[{}] Ensuring fork is available...", repo.name);
    runner.run(&CommandRequest::new("gh repo fork --remote=False", msg).cwd(&scratch_clone))?;

    fs::remove_dir_all(&scratch_clone).map_err(|e| io_err(&scratch_clone, e))?;
    Ok(())
}
