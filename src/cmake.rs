//! CMake build options and command construction.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::CMakeConfig;
use crate::paths::ProjectPaths;
use crate::process::CommandSpec;

/// Build configuration, also the directory name under the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum BuildConfig {
    #[default]
    #[value(name = "Debug")]
    Debug,
    #[value(name = "Release")]
    Release,
}

impl BuildConfig {
    pub fn as_str(self) -> &'static str {
        match self {
            BuildConfig::Debug => "Debug",
            BuildConfig::Release => "Release",
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform passed to CMake with `-A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Arch {
    #[default]
    #[value(name = "x64")]
    X64,
    #[value(name = "Win32")]
    Win32,
    #[value(name = "ARM64")]
    Arm64,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Win32 => "Win32",
            Arch::Arm64 => "ARM64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual Studio release to generate a solution for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum GeneratorTarget {
    #[default]
    #[value(name = "vs2026")]
    Vs2026,
    #[value(name = "vs2022")]
    Vs2022,
}

impl GeneratorTarget {
    /// CMake generator name for `-G`.
    pub fn generator(self) -> &'static str {
        match self {
            GeneratorTarget::Vs2026 => "Visual Studio 18 2026",
            GeneratorTarget::Vs2022 => "Visual Studio 17 2022",
        }
    }
}

/// Builds the CMake command lines for one project.
#[derive(Debug, Clone)]
pub struct CMake<'a> {
    config: &'a CMakeConfig,
    paths: &'a ProjectPaths,
}

impl<'a> CMake<'a> {
    pub fn new(config: &'a CMakeConfig, paths: &'a ProjectPaths) -> Self {
        Self { config, paths }
    }

    /// `cmake -S <root> -B <build> -G <generator> -A <arch> -D<option>=ON|OFF`
    pub fn configure(&self, target: GeneratorTarget, arch: Arch, build_tests: bool) -> CommandSpec {
        let switch = if build_tests { "ON" } else { "OFF" };
        CommandSpec::new(&self.config.program)
            .arg("-S")
            .arg(self.paths.root())
            .arg("-B")
            .arg(self.paths.build_dir())
            .arg("-G")
            .arg(target.generator())
            .arg("-A")
            .arg(arch.as_str())
            .arg(format!("-D{}={}", self.config.tests_option, switch))
    }

    /// `cmake --build <build> --config <cfg>`
    pub fn build(&self, config: BuildConfig) -> CommandSpec {
        CommandSpec::new(&self.config.program)
            .arg("--build")
            .arg(self.paths.build_dir())
            .arg("--config")
            .arg(config.as_str())
    }

    /// `cmake --build <build> --target clean --config <cfg>`
    pub fn clean(&self, config: BuildConfig) -> CommandSpec {
        CommandSpec::new(&self.config.program)
            .arg("--build")
            .arg(self.paths.build_dir())
            .arg("--target")
            .arg("clean")
            .arg("--config")
            .arg(config.as_str())
    }
}

/// `<exe> --reporter <reporter>`
pub fn test_command(executable: &Path, reporter: &str) -> CommandSpec {
    CommandSpec::new(executable).arg("--reporter").arg(reporter)
}
