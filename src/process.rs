//! Running external tools.

use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, ExitStatus};

use crate::utils::process_guard::{ProcessGuard, WaitOutcome};

/// A program and its arguments, printed as `Command: <program> <args...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Build a `std::process::Command` inheriting stdio.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of running one external step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    /// Non-zero exit. Children killed by a signal report code 1.
    Failed { code: i32 },
    Interrupted,
}

impl StepOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            StepOutcome::Success
        } else {
            StepOutcome::Failed {
                code: status.code().unwrap_or(1),
            }
        }
    }
}

/// Spawn the command with inherited stdio and wait for it under the guard.
///
/// Failing to spawn (e.g. program not on PATH) is an error, not an outcome.
pub fn run(spec: &CommandSpec, guard: &ProcessGuard) -> Result<StepOutcome> {
    tracing::debug!(command = %spec, "spawning");
    let mut child = spec
        .to_command()
        .spawn()
        .with_context(|| format!("Failed to run {}", spec.program().to_string_lossy()))?;

    let outcome = match guard.wait_or_kill(&mut child)? {
        WaitOutcome::Exited(status) => StepOutcome::from_status(status),
        WaitOutcome::Interrupted => StepOutcome::Interrupted,
    };
    tracing::debug!(command = %spec, ?outcome, "finished");
    Ok(outcome)
}
