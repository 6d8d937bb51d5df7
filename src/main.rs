//! mlt - MathLib build tooling CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process;

use mlt::cli::{Cli, Commands};
use mlt::ToolError;

use commands::build::BuildOptions;
use commands::generate::GenerateOptions;
use commands::Context;

fn main() {
    let cli = Cli::parse();
    mlt::logging::init(cli.verbose);

    let code = match run(cli) {
        Ok(()) => 0,
        Err(err) => report_error(&err),
    };
    process::exit(code);
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    let project_root = cli.project_root;
    let load = || Context::load(project_root.as_deref());

    match cli.command {
        Commands::Generate {
            arch,
            no_tests,
            clean,
            target,
        } => commands::generate::handle(
            &mut load()?,
            &GenerateOptions {
                arch,
                build_tests: !no_tests,
                clean,
                target,
            },
        ),
        Commands::Build {
            config,
            no_tests,
            clean,
        } => commands::build::handle(
            &mut load()?,
            &BuildOptions {
                config,
                run_tests: !no_tests,
                clean,
            },
        ),
        Commands::Test { config } => commands::test::handle(&mut load()?, config),
        Commands::Completions { shell } => {
            commands::completions::handle::<Cli, _>(shell, &mut io::stdout())
        }
    }
}

/// Print what the handler has not already reported and pick the exit code.
fn report_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ToolError>() {
        Some(tool_err) => {
            tracing::debug!("{}", tool_err);
            if let ToolError::Interrupted { .. } = tool_err {
                println!("\n\n⚠️  {}", tool_err);
            }
            tool_err.exit_code()
        }
        None => {
            println!("\n❌ Unexpected error: {:#}", err);
            1
        }
    }
}
