//! Build command handler

use anyhow::Result;
use std::io::Write;

use mlt::cmake::CMake;
use mlt::{BuildConfig, StepOutcome, ToolError};

use super::{run_test_executable, Context};

/// Label column of the build summary, one narrower than `generate`'s.
const BUILD_LABEL_WIDTH: usize = 18;

/// Options for `mlt build`.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    pub config: BuildConfig,
    pub run_tests: bool,
    pub clean: bool,
}

/// Build one configuration, then run its tests unless disabled.
///
/// A failing `clean` target is reported but does not stop the build. A test
/// executable that was never built is a warning, not a failure.
pub fn handle<W: Write>(ctx: &mut Context<W>, opts: &BuildOptions) -> Result<()> {
    let cmake = CMake::new(&ctx.config.cmake, &ctx.paths);
    let clean_command = cmake.clean(opts.config);
    let build_command = cmake.build(opts.config);

    ctx.report.banner("MathLib Build Script")?;
    ctx.report.set_label_width(BUILD_LABEL_WIDTH);
    ctx.report
        .field("Build directory", ctx.paths.build_dir().display())?;
    ctx.report.field("Configuration", opts.config)?;
    ctx.report.field("Clean build", opts.clean)?;
    ctx.report
        .field("Output directory", ctx.paths.output_dir(opts.config).display())?;
    ctx.report.field("Run tests", opts.run_tests)?;
    ctx.report.section_break()?;

    if opts.clean {
        ctx.report.warning("🧹 Cleaning...")?;
        ctx.report.warning("Running 'clean' target\n")?;
        match ctx.run_step(&clean_command)? {
            StepOutcome::Success => ctx.report.success("✅ Clean operation complete.")?,
            StepOutcome::Failed { code } => {
                tracing::warn!(code, "clean target failed");
                ctx.report
                    .failure("❌ Clean target failed. Proceeding with build anyway...")?;
            }
            StepOutcome::Interrupted => {
                return Err(ToolError::Interrupted { task: "Build" }.into())
            }
        }
        ctx.report.section_break()?;
    }

    ctx.report.line("🔨 Building MathLib...")?;
    ctx.report.line(&format!("Command: {}\n", build_command))?;

    match ctx.run_step(&build_command)? {
        StepOutcome::Success => {
            ctx.report
                .success_block("✅ Build completed successfully!")?;
        }
        StepOutcome::Failed { code } => {
            ctx.report.failure_block("❌ Build failed.")?;
            return Err(ToolError::StepFailed {
                step: "Build",
                code,
            }
            .into());
        }
        StepOutcome::Interrupted => return Err(ToolError::Interrupted { task: "Build" }.into()),
    }

    if !opts.run_tests {
        return Ok(());
    }

    ctx.report.line("\nRunning Tests...\n")?;
    let executable = ctx.paths.test_executable(opts.config);
    if !executable.exists() {
        ctx.report.warning(&format!(
            "⚠️  Test executable not found: {}",
            executable.display()
        ))?;
        ctx.report.warning(
            "    Tests may not have been built (check '--no-tests' NOT set when running mlt generate).",
        )?;
        ctx.report.rule()?;
        return Ok(());
    }

    run_test_executable(ctx, &executable, "Build")
}
