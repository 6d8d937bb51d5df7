//! Project path layout
//!
//! ```text
//! <root>/
//!   build/                        CMake build tree (cmake.build_dir)
//!   lib/<Config>/mathlib_tests    test executable (tests.output_dir, tests.executable)
//!   mlt.toml                      optional configuration
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::cmake::BuildConfig;
use crate::config::Config;

/// Resolve the project root from `--project-root`, falling back to the
/// current directory. Relative paths are joined onto the current directory.
pub fn resolve_project_root(arg: Option<&Path>) -> Result<PathBuf> {
    match arg {
        Some(path) if path.is_absolute() => Ok(path.to_path_buf()),
        Some(path) => Ok(current_dir()?.join(path)),
        None => current_dir(),
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("Could not determine current directory")
}

/// Paths derived from the project root and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
    build_dir: PathBuf,
    output_root: PathBuf,
    executable: String,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        let build_dir = root.join(&config.cmake.build_dir);
        let output_root = root.join(&config.tests.output_dir);
        Self {
            root,
            build_dir,
            output_root,
            executable: config.tests.executable.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// `<output_root>/<config>`
    pub fn output_dir(&self, config: BuildConfig) -> PathBuf {
        self.output_root.join(config.as_str())
    }

    /// Test executable for a configuration, with the platform suffix.
    pub fn test_executable(&self, config: BuildConfig) -> PathBuf {
        self.output_dir(config).join(format!(
            "{}{}",
            self.executable,
            env::consts::EXE_SUFFIX
        ))
    }

    /// Visual Studio solution written by `generate`.
    pub fn solution_file(&self) -> PathBuf {
        self.build_dir.join("MathLib.sln")
    }
}
