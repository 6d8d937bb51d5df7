//! Generate command handler

use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use mlt::cmake::{Arch, CMake, GeneratorTarget};
use mlt::{StepOutcome, ToolError};

use super::Context;

/// Options for `mlt generate`.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub arch: Arch,
    pub build_tests: bool,
    pub clean: bool,
    pub target: GeneratorTarget,
}

/// Configure the CMake project into the build directory.
pub fn handle<W: Write>(ctx: &mut Context<W>, opts: &GenerateOptions) -> Result<()> {
    let build_dir = ctx.paths.build_dir().to_path_buf();
    let generator = opts.target.generator();

    ctx.report.banner("CMake Solution Generation")?;
    ctx.report
        .field("Project root", ctx.paths.root().display())?;
    ctx.report.field("Build directory", build_dir.display())?;
    ctx.report.field("Clean build", opts.clean)?;
    ctx.report.field("Generator", generator)?;
    ctx.report.field("Architecture", opts.arch)?;
    ctx.report.field("Generate tests", opts.build_tests)?;
    ctx.report.section_break()?;

    if opts.clean {
        ctx.report.warning("🧹 Cleaning...")?;
        ctx.report.warning(&format!(
            "Deleting build directory: {}\n",
            build_dir.display()
        ))?;
        if let Err(e) = remove_build_dir(&build_dir) {
            ctx.report
                .failure(&format!("❌ Error during cleanup: {}", e))?;
            ctx.report.rule()?;
            return Err(ToolError::Cleanup(e).into());
        }
        ctx.report.success("✅ Clean operation complete.")?;
        ctx.report.section_break()?;
    }

    fs::create_dir_all(&build_dir)
        .with_context(|| format!("Failed to create build directory: {:?}", build_dir))?;

    let command = CMake::new(&ctx.config.cmake, &ctx.paths).configure(
        opts.target,
        opts.arch,
        opts.build_tests,
    );
    ctx.report.line("Running CMake...")?;
    ctx.report.line(&format!("Command: {}\n", command))?;

    match ctx.run_step(&command)? {
        StepOutcome::Success => {
            ctx.report
                .success_block("✅ Solution generated successfully!")?;
            let solution = ctx.paths.solution_file();
            ctx.report
                .line(&format!("\nLocation: {}", solution.display()))?;
            ctx.report.line("\nNext steps:")?;
            ctx.report.line(&format!(
                "  - Open in Visual Studio: start {}",
                solution.display()
            ))?;
            ctx.report.line("  - Build via CLI:         mlt build")?;
            ctx.report.rule()?;
            Ok(())
        }
        StepOutcome::Failed { code } => {
            ctx.report.failure_block("❌ CMake generation failed.")?;
            Err(ToolError::StepFailed {
                step: "CMake generation",
                code,
            }
            .into())
        }
        StepOutcome::Interrupted => Err(ToolError::Interrupted { task: "Generation" }.into()),
    }
}

/// Remove the build tree; a directory that does not exist is already clean.
fn remove_build_dir(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}
