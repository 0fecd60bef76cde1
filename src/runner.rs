//! External command execution
//!
//! Every side effect outside the project files goes through a shell command
//! line: git, Docker Compose, make, the scripthor helpers. Two call shapes:
//! captured (caller inspects stdout) and interactive (inherits the console).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Exit status of an interactive command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

pub trait CommandRunner {
    /// Run `line` to completion and return its stdout, trimmed.
    ///
    /// Errors only when the command cannot be started.
    fn run_captured(&self, line: &str) -> Result<String>;

    /// Run `line` to completion with inherited stdin/stdout/stderr
    fn run_interactive(&self, line: &str) -> Result<CommandOutcome>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run_captured(&self, line: &str) -> Result<String> {
        (**self).run_captured(line)
    }

    fn run_interactive(&self, line: &str) -> Result<CommandOutcome> {
        (**self).run_interactive(line)
    }
}

/// Runs command lines through `sh -c` in a fixed working directory
#[derive(Debug, Clone)]
pub struct ShellRunner {
    working_dir: PathBuf,
}

impl ShellRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    fn shell(&self, line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line).current_dir(&self.working_dir);
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run_captured(&self, line: &str) -> Result<String> {
        tracing::debug!(command = line, "running (captured)");
        let output = self
            .shell(line)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("Failed to run: {line}"))?;

        tracing::debug!(command = line, status = ?output.status.code(), "finished");
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_interactive(&self, line: &str) -> Result<CommandOutcome> {
        tracing::debug!(command = line, "running");
        let status = self
            .shell(line)
            .status()
            .with_context(|| format!("Failed to run: {line}"))?;

        let outcome = CommandOutcome {
            success: status.success(),
            code: status.code(),
        };
        if !outcome.success {
            tracing::debug!(command = line, code = ?outcome.code, "exited with failure");
        }
        Ok(outcome)
    }
}
