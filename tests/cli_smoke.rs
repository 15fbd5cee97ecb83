use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn modforge() -> Command {
    Command::cargo_bin("modforge").unwrap()
}

#[test]
fn silent_run_generates_module_and_session() {
    let tmp = TempDir::new().unwrap();

    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "-n", "Widgets", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module generated at"));

    assert!(tmp.path().join("out/Widgets/CMakeLists.txt").is_file());
    assert!(tmp.path().join("out/Widgets/src/Widgets.cpp").is_file());
    assert!(tmp.path().join("last_session.json").is_file());
}

#[test]
fn silent_run_without_name_fails_with_exit_code_one() {
    let tmp = TempDir::new().unwrap();

    modforge()
        .current_dir(tmp.path())
        .arg("--silent")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required field"));
}

#[test]
fn invalid_name_reports_field_and_fails() {
    let tmp = TempDir::new().unwrap();

    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "-n", "3Bad"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("module_name"));

    assert!(!tmp.path().join("3Bad").exists());
}

#[test]
fn existing_target_without_overwrite_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("out/Widgets")).unwrap();

    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "-n", "Widgets", "-o", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn overwrite_flag_allows_reusing_target() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("out/Widgets")).unwrap();

    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "-n", "Widgets", "-o", "out", "--overwrite"])
        .assert()
        .success();

    assert!(tmp.path().join("out/Widgets/CMakeLists.txt").is_file());
}

#[test]
fn config_file_supplies_fields() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("module.json"),
        r#"{"module_name": "FromFile", "output_dir": "out", "namespace": "FileSpace"}"#,
    )
    .unwrap();

    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "-c", "module.json"])
        .assert()
        .success();

    let cpp = std::fs::read_to_string(tmp.path().join("out/FromFile/src/FromFile.cpp")).unwrap();
    assert!(cpp.contains("namespace FileSpace"));
}

#[test]
fn missing_config_file_is_fatal() {
    let tmp = TempDir::new().unwrap();

    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "-n", "Widgets", "-c", "nope.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn session_seeds_next_silent_run() {
    let tmp = TempDir::new().unwrap();

    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "-n", "Widgets", "-o", "out"])
        .assert()
        .success();

    // Second run reuses the persisted name; only overwrite is added.
    modforge()
        .current_dir(tmp.path())
        .args(["--silent", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Widgets"));
}
