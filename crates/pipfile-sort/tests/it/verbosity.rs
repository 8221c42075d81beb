use crate::common::TestProject;

#[test]
fn quiet_suppresses_messages() {
    let project = TestProject::from_fixture("basic");

    let output = project
        .command()
        .args(["--quiet", "--exit-code"])
        .output()
        .expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr.is_empty(),
        "Expected no output with --quiet, got: {stderr}"
    );
}

#[test]
fn quiet_still_reports_errors() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = crate::common::pipfile_sort_command()
        .current_dir(dir.path())
        .arg("--quiet")
        .output()
        .expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("error"), "Expected an error, got: {stderr}");
}

#[test]
fn verbose_emits_diagnostics() {
    let project = TestProject::from_fixture("basic");

    let output = project
        .command()
        .arg("--verbose")
        .output()
        .expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        stderr.contains("Sorting Pipfile"),
        "Expected debug output with --verbose, got: {stderr}"
    );
    assert!(stderr.contains("Sorted `Pipfile`."));
}

#[test]
fn double_verbose_accepted() {
    let project = TestProject::from_fixture("basic");

    let output = project
        .command()
        .arg("-vv")
        .output()
        .expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("order"), "Expected trace output, got: {stderr}");
}

#[test]
fn default_run_has_no_diagnostics() {
    let project = TestProject::from_fixture("basic");

    let output = project.command().output().expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(!stderr.contains("DEBUG"), "Unexpected diagnostics: {stderr}");
}
