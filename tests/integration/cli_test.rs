//! CLI surface tests: help, argument validation, completions, error exits.

use predicates::prelude::*;

use super::helpers::Project;

#[test]
fn help_lists_subcommands() {
    let project = Project::new();
    project
        .mlt(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn build_help_shows_config_choices() {
    let project = Project::new();
    project
        .mlt(&["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Debug"))
        .stdout(predicate::str::contains("Release"))
        .stdout(predicate::str::contains("--no-tests"));
}

#[test]
fn invalid_config_value_is_a_usage_error() {
    let project = Project::new();
    project
        .mlt(&["test", "--config", "Profile"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Profile"));
}

#[test]
fn completions_print_script() {
    let project = Project::new();
    project
        .mlt(&["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mlt"));
}

#[test]
fn missing_test_executable_exits_one_with_red_message() {
    let project = Project::new();
    project
        .mlt(&["test"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Running MathLib Tests (Debug)"))
        .stdout(predicate::str::contains(
            "\x1b[1;31;49m❌ Test executable not found: ",
        ))
        .stdout(predicate::str::contains(
            "Build first with: mlt build --config Debug --no-tests",
        ));
}

#[test]
fn broken_config_is_an_unexpected_error() {
    let project = Project::new();
    project.write_config("[cmake\n");
    project
        .mlt(&["test"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\n❌ Unexpected error:"))
        .stdout(predicate::str::contains("Failed to parse config file"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn missing_cmake_program_is_an_unexpected_error() {
    let project = Project::new();
    project.write_config("[cmake]\nprogram = 'mlt-no-such-cmake'\n");
    project
        .mlt(&["build", "--no-tests"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Unexpected error: Failed to run mlt-no-such-cmake"));
}

#[test]
fn separator_width_comes_from_config() {
    let project = Project::new();
    project.write_config("[output]\nseparator_width = 12\n");
    let output = project.mlt(&["test"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!("{}\n", "=".repeat(12))));
    assert!(!stdout.contains(&"=".repeat(13)));
}
