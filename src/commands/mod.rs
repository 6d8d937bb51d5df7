//! Command handlers for the mlt CLI.
//!
//! Each submodule handles one subcommand. Handlers print their own outcome
//! lines and return a `ToolError` carrying the exit code on failure; the
//! dispatch and exit-code mapping remain in main.rs.

pub mod build;
pub mod completions;
pub mod generate;

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use mlt::cmake::test_command;
use mlt::paths::resolve_project_root;
use mlt::process::{self, CommandSpec};
use mlt::utils::process_guard::ProcessGuard;
use mlt::{Config, ProjectPaths, Reporter, StepOutcome, ToolError};

/// Everything a handler needs: settings, paths, the interrupt guard and the
/// report stream.
pub struct Context<W: Write> {
    pub config: Config,
    pub paths: ProjectPaths,
    pub guard: ProcessGuard,
    pub report: Reporter<W>,
}

impl Context<io::Stdout> {
    /// Resolve the project root, load its config and install signal handlers.
    #[cfg(not(tarpaulin_include))]
    pub fn load(project_root: Option<&Path>) -> Result<Self> {
        let root = resolve_project_root(project_root)?;
        let config = Config::load(&root)?;
        tracing::debug!(root = %root.display(), "project root");
        let guard = ProcessGuard::new();
        guard.register_signal_handlers();
        let report = Reporter::stdout(config.output.separator_width);
        let paths = ProjectPaths::new(root, &config);
        Ok(Self::new(config, paths, guard, report))
    }
}

impl<W: Write> Context<W> {
    pub fn new(config: Config, paths: ProjectPaths, guard: ProcessGuard, report: Reporter<W>) -> Self {
        Self {
            config,
            paths,
            guard,
            report,
        }
    }

    pub fn run_step(&self, spec: &CommandSpec) -> Result<StepOutcome> {
        process::run(spec, &self.guard)
    }
}

/// Run the test executable with the configured reporter and report the result.
///
/// `task` names the command in the interruption message.
pub fn run_test_executable<W: Write>(
    ctx: &mut Context<W>,
    executable: &Path,
    task: &'static str,
) -> Result<()> {
    let command = test_command(executable, &ctx.config.tests.reporter);
    match ctx.run_step(&command)? {
        StepOutcome::Success => {
            ctx.report.success_block("✅ All tests passed!")?;
            Ok(())
        }
        StepOutcome::Failed { code } => {
            ctx.report.failure_block("❌ Some tests failed.")?;
            Err(ToolError::StepFailed {
                step: "Tests",
                code,
            }
            .into())
        }
        StepOutcome::Interrupted => Err(ToolError::Interrupted { task }.into()),
    }
}
