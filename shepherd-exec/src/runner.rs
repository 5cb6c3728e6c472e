//! Shell command execution with captured or tee'd output.
//!
//! Commands are whole shell lines (the workflow formats remote URIs, branch
//! names, and file paths into them), executed via `sh -c`. Two modes:
//!
//! - spinner mode (default): output fully captured, an indeterminate spinner
//!   shown while the command runs;
//! - tee mode (verbosity ≥ 3): stdout/stderr echoed to the terminal line by
//!   line in real time while still being captured.
//!
//! Both modes are synchronous and share one failure contract: nonzero exit
//! becomes [`CommandError::Failed`] with the captured streams attached.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use tracing::debug;

use shepherd_term::{Spinner, TermFeatures};

use crate::error::CommandError;

/// Verbosity at which commands run in tee mode instead of behind a spinner.
const TEE_VERBOSITY: u8 = 3;

/// One external command invocation.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    /// The full shell command line.
    pub command: String,
    /// Working directory for the child, if any.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables layered over the inherited environment.
    pub env: Vec<(String, String)>,
    /// Spinner label shown while the command runs.
    pub progress: String,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>, progress: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cwd: None,
            env: Vec::new(),
            progress: progress.into(),
        }
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Captured result of a successful command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// The seam every external command goes through. The workflow crates depend
/// on this trait, never on [`ShellRunner`] directly, so tests can script the
/// commands a run would issue.
pub trait CommandRunner {
    fn run(&self, request: &CommandRequest) -> Result<CommandOutput, CommandError>;
}

/// [`CommandRunner`] backed by `sh -c`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    verbosity: u8,
    features: TermFeatures,
}

impl ShellRunner {
    pub fn new(verbosity: u8, features: TermFeatures) -> Self {
        Self {
            verbosity,
            features,
        }
    }

    fn run_captured(&self, request: &CommandRequest) -> Result<CommandOutput, CommandError> {
        let _spinner = Spinner::start(&request.progress, self.features);
        let output = shell_command(request)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: request.command.clone(),
                source,
            })?;
        finish(
            request,
            output.status,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    }

    fn run_tee(&self, request: &CommandRequest) -> Result<CommandOutput, CommandError> {
        let mut child = shell_command(request)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CommandError::Spawn {
                command: request.command.clone(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or_else(|| CommandError::Io {
            command: request.command.clone(),
            source: io::Error::other("stdout was not piped"),
        })?;
        let stderr = child.stderr.take().ok_or_else(|| CommandError::Io {
            command: request.command.clone(),
            source: io::Error::other("stderr was not piped"),
        })?;

        let out_handle = thread::spawn(move || tee_stream(stdout, io::stdout()));
        let err_handle = thread::spawn(move || tee_stream(stderr, io::stderr()));

        let status = child.wait().map_err(|source| CommandError::Io {
            command: request.command.clone(),
            source,
        })?;

        let stdout = join_tee(request, out_handle)?;
        let stderr = join_tee(request, err_handle)?;
        finish(request, status, stdout, stderr)
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, request: &CommandRequest) -> Result<CommandOutput, CommandError> {
        debug!("Running command: {}", request.command);
        if self.verbosity >= TEE_VERBOSITY {
            self.run_tee(request)
        } else {
            self.run_captured(request)
        }
    }
}

fn shell_command(request: &CommandRequest) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(&request.command);
    if let Some(dir) = &request.cwd {
        cmd.current_dir(dir);
    }
    for (key, value) in &request.env {
        cmd.env(key, value);
    }
    cmd
}

fn finish(
    request: &CommandRequest,
    status: ExitStatus,
    stdout: String,
    stderr: String,
) -> Result<CommandOutput, CommandError> {
    let code = status.code().unwrap_or(-1);
    if !status.success() {
        return Err(CommandError::Failed {
            command: request.command.clone(),
            code,
            stdout,
            stderr,
        });
    }
    Ok(CommandOutput {
        stdout,
        stderr,
        code,
    })
}

/// Echo a child stream line by line while capturing it.
fn tee_stream<R, W>(reader: R, mut sink: W) -> io::Result<Vec<u8>>
where
    R: Read,
    W: Write,
{
    let mut buffered = BufReader::new(reader);
    let mut captured = Vec::new();
    loop {
        let mut line = Vec::new();
        let n = buffered.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        sink.write_all(&line)?;
        sink.flush()?;
        captured.extend_from_slice(&line);
    }
    Ok(captured)
}

fn join_tee(
    request: &CommandRequest,
    handle: JoinHandle<io::Result<Vec<u8>>>,
) -> Result<String, CommandError> {
    let bytes = handle
        .join()
        .map_err(|_| CommandError::Io {
            command: request.command.clone(),
            source: io::Error::other("output reader thread panicked"),
        })?
        .map_err(|source| CommandError::Io {
            command: request.command.clone(),
            source,
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
