//! End-to-end runs of generate/build/test against stub tools.
#![cfg(unix)]

use predicates::prelude::*;

use super::helpers::Project;

#[test]
fn generate_invokes_cmake_configure() {
    let project = Project::new();
    project.stub_cmake(0);

    project
        .mlt(&["generate", "--arch", "Win32", "--target", "vs2022"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CMake Solution Generation"))
        .stdout(predicate::str::contains("Generator:         Visual Studio 17 2022"))
        .stdout(predicate::str::contains(
            "\x1b[1;32;49m✅ Solution generated successfully!\x1b[0m",
        ));

    let calls = project.cmake_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].ends_with("-G Visual Studio 17 2022 -A Win32 -DBUILD_TESTS=ON"));
    assert!(project.root().join("build").is_dir());
}

#[test]
fn generate_failure_propagates_cmake_exit_code() {
    let project = Project::new();
    project.stub_cmake(9);

    project
        .mlt(&["generate", "--no-tests"])
        .assert()
        .code(9)
        .stdout(predicate::str::contains("❌ CMake generation failed."));
}

#[test]
fn build_runs_tests_with_console_reporter() {
    let project = Project::new();
    project.stub_cmake(0);
    project.stub_tests("Release", 0);

    project
        .mlt(&["build", "--config", "Release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command: "))
        .stdout(predicate::str::contains("--build"))
        .stdout(predicate::str::contains("tests: --reporter console"))
        .stdout(predicate::str::contains("✅ All tests passed!"));

    let calls = project.cmake_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].ends_with("--config Release"));
}

#[test]
fn build_failure_propagates_exit_code() {
    let project = Project::new();
    project.stub_cmake(3);

    project
        .mlt(&["build"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("\x1b[1;31;49m❌ Build failed.\x1b[0m"));
}

#[test]
fn clean_failure_does_not_stop_build() {
    let project = Project::new();
    let script = project.root().join("cmake-stub");
    project.stub_cmake(0);
    // Fail only for the clean target
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\ncase \"$*\" in *clean*) exit 1;; esac\nexit 0\n",
            project.root().join("cmake.log").display()
        ),
    )
    .unwrap();

    project
        .mlt(&["build", "--clean", "--no-tests"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "❌ Clean target failed. Proceeding with build anyway...",
        ))
        .stdout(predicate::str::contains("✅ Build completed successfully!"));

    assert_eq!(project.cmake_calls().len(), 2);
}

#[test]
fn failing_tests_propagate_exit_code() {
    let project = Project::new();
    project.stub_tests("Debug", 6);

    project
        .mlt(&["test"])
        .assert()
        .code(6)
        .stdout(predicate::str::contains("❌ Some tests failed."));
}
