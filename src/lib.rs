//! MathLib build tooling (mlt)
//!
//! Drives the MathLib CMake project (generate, build, test) and reports
//! outcomes with ANSI-colored status lines.

pub mod cli;
pub mod cmake;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod process;
pub mod report;
pub mod theme;
pub mod utils;

pub use cmake::{Arch, BuildConfig, GeneratorTarget};
pub use config::Config;
pub use error::ToolError;
pub use paths::ProjectPaths;
pub use process::{CommandSpec, StepOutcome};
pub use report::Reporter;
pub use theme::{colored_text, Color, StyleRequest};
