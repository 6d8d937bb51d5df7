//! CLI definitions for mlt
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::cmake::{Arch, BuildConfig, GeneratorTarget};

/// Build clap styles matching the status colors.
///
/// - Green: headers, usage, command names
/// - Yellow: placeholders and valid values
/// - Red: errors
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Yellow.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "mlt")]
#[command(about = "MathLib build tooling - generate, build and test with CMake")]
#[command(
    long_about = "mlt drives the MathLib CMake project: it generates the Visual Studio
solution, builds a configuration and runs the test executable, reporting
each outcome in color and exiting with the underlying tool's exit code.

QUICK START:
    mlt generate                   Generate build/MathLib.sln with tests
    mlt build                      Build Debug and run the tests
    mlt build --config Release     Build Release and run the tests
    mlt test                       Run the Debug tests only

Settings are read from <project-root>/mlt.toml when present."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Project root containing CMakeLists.txt (default: current directory)
    #[arg(long, global = true, env = "MLT_PROJECT_ROOT", value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the Visual Studio solution with CMake
    #[command(long_about = "Generate the Visual Studio solution with CMake.

Runs cmake -S <root> -B <root>/build with the selected generator and
architecture, enabling or disabling the test target.

EXAMPLES:
    mlt generate                     Generate with tests (default)
    mlt generate --no-tests          Generate without tests (for distribution)
    mlt generate --clean             Delete the build directory first
    mlt generate --arch Win32        32-bit architecture
    mlt generate --target vs2022     Generate for Visual Studio 2022")]
    Generate {
        /// Target architecture
        #[arg(long, value_enum, default_value_t = Arch::X64)]
        arch: Arch,
        /// Don't build tests (for distribution/CI builds)
        #[arg(long)]
        no_tests: bool,
        /// Delete the build directory before generating
        #[arg(long)]
        clean: bool,
        /// Visual Studio generator
        #[arg(long, value_enum, default_value_t = GeneratorTarget::Vs2026)]
        target: GeneratorTarget,
    },

    /// Build MathLib and optionally run the tests
    #[command(long_about = "Build MathLib with cmake --build and run the tests.

EXAMPLES:
    mlt build                        Build Debug, run tests
    mlt build --config Release       Build Release, run tests
    mlt build --no-tests             Build without running tests
    mlt build --clean                Run the 'clean' target first")]
    Build {
        /// Build configuration
        #[arg(long, value_enum, default_value_t = BuildConfig::Debug)]
        config: BuildConfig,
        /// Skip running tests after the build
        #[arg(long)]
        no_tests: bool,
        /// Run the 'clean' target before building
        #[arg(long)]
        clean: bool,
    },

    /// Run the MathLib test executable
    #[command(long_about = "Run the pre-built MathLib test executable with the console reporter.

EXAMPLES:
    mlt test                         Run Debug tests
    mlt test --config Release        Run Release tests")]
    Test {
        /// Test configuration to run
        #[arg(long, value_enum, default_value_t = BuildConfig::Debug)]
        config: BuildConfig,
    },

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    mlt completions bash > ~/.local/share/bash-completion/completions/mlt
    mlt completions zsh > ~/.zfunc/_mlt")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
