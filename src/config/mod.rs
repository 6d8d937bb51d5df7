//! Configuration management for mlt
//!
//! Settings live in `<project-root>/mlt.toml`. Every section and field is
//! optional; missing values fall back to the defaults in `types`.

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (`<root>/mlt.toml`)
    pub fn config_path(root: &Path) -> PathBuf {
        io::config_path(root)
    }

    /// Load configuration from the project root, or return defaults if not found
    pub fn load(root: &Path) -> Result<Self> {
        io::load(root)
    }

    /// Check values that would produce unusable commands.
    pub fn validate(&self) -> Result<(), String> {
        if self.cmake.program.trim().is_empty() {
            return Err("cmake.program must not be empty".to_string());
        }
        if self.cmake.build_dir.trim().is_empty() {
            return Err("cmake.build_dir must not be empty".to_string());
        }
        if self.tests.executable.trim().is_empty() {
            return Err("tests.executable must not be empty".to_string());
        }
        if self.output.separator_width == 0 {
            return Err("output.separator_width must be at least 1".to_string());
        }
        Ok(())
    }
}
