//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::report::SEPARATOR_WIDTH;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cmake: CMakeConfig,
    #[serde(default)]
    pub tests: TestsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// CMake invocation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMakeConfig {
    /// Program used for configure/build/clean
    #[serde(default = "default_program")]
    pub program: String,
    /// Build directory, relative to the project root unless absolute
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
    /// Cache option toggled by `generate --no-tests`
    #[serde(default = "default_tests_option")]
    pub tests_option: String,
}

pub fn default_program() -> String {
    "cmake".to_string()
}

pub fn default_build_dir() -> String {
    "build".to_string()
}

pub fn default_tests_option() -> String {
    "BUILD_TESTS".to_string()
}

impl Default for CMakeConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            build_dir: default_build_dir(),
            tests_option: default_tests_option(),
        }
    }
}

/// Test executable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestsConfig {
    /// Output root; binaries land in `<output_dir>/<config>/`
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Executable name without the platform suffix
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Value passed to `--reporter`
    #[serde(default = "default_reporter")]
    pub reporter: String,
}

pub fn default_output_dir() -> String {
    "lib".to_string()
}

pub fn default_executable() -> String {
    "mathlib_tests".to_string()
}

pub fn default_reporter() -> String {
    "console".to_string()
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            executable: default_executable(),
            reporter: default_reporter(),
        }
    }
}

/// Console output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

pub fn default_separator_width() -> usize {
    SEPARATOR_WIDTH
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator_width: default_separator_width(),
        }
    }
}
