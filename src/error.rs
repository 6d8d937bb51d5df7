//! Tool errors and their process exit codes.

use std::io;
use std::path::PathBuf;

/// Failures that end a command with a specific exit code.
///
/// Anything that is not a `ToolError` is treated as unexpected and exits 1.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{step} failed with exit code {code}")]
    StepFailed { step: &'static str, code: i32 },

    #[error("Test executable not found: {}", path.display())]
    TestExecutableMissing { path: PathBuf },

    #[error("{} interrupted by user{}", .task, interrupt_terminator(.task))]
    Interrupted { task: &'static str },

    #[error("Error during cleanup: {0}")]
    Cleanup(#[source] io::Error),
}

/// `run_tests` never ended its interrupt line with a period; the others do.
fn interrupt_terminator(task: &str) -> &'static str {
    if task == "Tests" {
        ""
    } else {
        "."
    }
}

impl ToolError {
    /// Exit code for the process: the failing tool's own code, otherwise 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ToolError::StepFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
