//! Exit status policy: 0 on success, 1 on error, 2 for changes under `--exit-code`.

use crate::common::{INSTA_FILTERS, TestProject, pipfile_sort_command};
use crate::pipfile_sort_snapshot;

#[test]
fn changed_without_flag_exits_zero() {
    let project = TestProject::from_fixture("basic");

    let output = project.command().output().expect("Failed to execute pipfile-sort");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn changed_with_flag_exits_two() {
    let project = TestProject::from_fixture("basic");

    pipfile_sort_snapshot!(INSTA_FILTERS, project.command().arg("--exit-code"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Sorted `Pipfile`.
    ");
}

#[test]
fn unchanged_with_flag_exits_zero() {
    let project = TestProject::from_fixture("basic");
    let output = project.command().output().expect("Failed to execute pipfile-sort");
    assert!(output.status.success());

    let output = project
        .command()
        .arg("--exit-code")
        .output()
        .expect("Failed to execute pipfile-sort");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn check_with_flag_exits_two() {
    let project = TestProject::from_fixture("basic");
    let before = project.read_pipfile();

    let output = project
        .command()
        .args(["--check", "--exit-code"])
        .output()
        .expect("Failed to execute pipfile-sort");

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(project.read_pipfile(), before);
}

#[test]
fn missing_pipfile_exits_one() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = pipfile_sort_command()
        .current_dir(dir.path())
        .arg("--exit-code")
        .output()
        .expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.starts_with("error: Failed to load `Pipfile`"),
        "Expected a load error, got: {stderr}"
    );
    assert!(stderr.contains("Caused by"), "Expected a cause, got: {stderr}");
}

#[test]
fn malformed_pipfile_exits_one() {
    let content = "[packages\nrequests = \"*\"\n";
    let project = TestProject::from_content(content);

    let output = project.command().output().expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("Pipfile is not valid TOML"),
        "Expected a parse error, got: {stderr}"
    );
    // A failed load must not touch the file.
    assert_eq!(project.read_pipfile(), content);
}

#[test]
fn non_table_section_exits_one() {
    let project = TestProject::from_content("packages = \"requests\"\n");

    pipfile_sort_snapshot!(INSTA_FILTERS, project.command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: Failed to load `Pipfile`
      Caused by: `[packages]` must be a table
    ");
}

#[test]
fn unknown_flag_exits_one() {
    let output = pipfile_sort_command()
        .arg("--nonexistent")
        .output()
        .expect("Failed to execute pipfile-sort");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("--nonexistent"),
        "Expected the flag to be named, got: {stderr}"
    );
    assert!(
        stderr.starts_with("error:"),
        "Expected a usage error, got: {stderr}"
    );
    assert!(stderr.contains("--help"), "Expected a help hint, got: {stderr}");
    assert!(output.stdout.is_empty());
}
