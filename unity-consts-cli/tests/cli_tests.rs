//! Tests for the unity-consts binary

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn unity_consts() -> Command {
    Command::new(env!("CARGO_BIN_EXE_unity-consts"))
}

#[test]
fn test_rejects_missing_arguments() {
    let output = unity_consts().output().unwrap();
    assert!(!output.status.success());

    let dir = TempDir::new().unwrap();
    let output = unity_consts().arg(dir.path()).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_rejects_extra_arguments() {
    let dir = TempDir::new().unwrap();
    let output = unity_consts()
        .args([dir.path(), dir.path(), dir.path()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_generates_into_new_directory() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("ProjectSettings")).unwrap();
    fs::write(
        project.path().join("ProjectSettings/TagManager.asset"),
        "--- !u!78 &1\nTagManager:\n  tags:\n  - Boss\n  layers:\n  - Default\n",
    )
    .unwrap();
    fs::create_dir_all(project.path().join("Assets/Scenes")).unwrap();
    fs::write(project.path().join("Assets/Scenes/Arena.unity"), "").unwrap();

    let output_dir = project.path().join("Assets/Generated");
    let output = unity_consts()
        .arg(project.path())
        .arg(&output_dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let source = fs::read_to_string(output_dir.join("R.cs")).unwrap();
    assert!(source.contains("public enum Tag"));
    assert!(source.contains("public const string Boss = \"Boss\";"));
    assert!(source.contains("public const string Arena = \"Arena\";"));
}

#[test]
fn test_malformed_asset_fails() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("Assets")).unwrap();
    fs::write(
        project.path().join("Assets/Bad.prefab"),
        "--- !u!1 &1\nGameObject:\n  m_Name: [unclosed\n",
    )
    .unwrap();

    let output_dir = project.path().join("out");
    let output = unity_consts()
        .arg(project.path())
        .arg(&output_dir)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!output_dir.join("R.cs").exists());
}
