mod common;

use common::{add_project, goflip_cmd, project_dir};

#[test]
fn test_add_creates_workspace_and_default_config() {
    let td = tempfile::tempdir().expect("tmpdir");
    add_project(td.path(), "demo");

    let dir = project_dir(td.path(), "demo");
    assert!(dir.join("go").join("bin").is_dir(), "workspace tree missing");

    let cfg = goflip::ProjectConfig::read(&dir.join("project.yaml"))
        .expect("default config must be readable");
    assert!(cfg.go111module, "default module mode is on");
    assert_eq!(cfg.goprivate, "");
    assert!(cfg.env.is_empty());
}

#[test]
fn test_add_twice_fails_without_mutating_existing_project() {
    let td = tempfile::tempdir().expect("tmpdir");
    add_project(td.path(), "demo");

    let config_path = project_dir(td.path(), "demo").join("project.yaml");
    let before = std::fs::read_to_string(&config_path).expect("config");

    let out = goflip_cmd(td.path())
        .args(["add", "demo"])
        .output()
        .expect("run goflip add");
    assert!(!out.status.success(), "second add must fail");
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("exists"), "stderr should name the condition: {err}");

    let after = std::fs::read_to_string(&config_path).expect("config");
    assert_eq!(before, after, "existing configuration was mutated");
}

#[test]
fn test_add_seeds_config_from_flag_defaults() {
    let td = tempfile::tempdir().expect("tmpdir");
    let out = goflip_cmd(td.path())
        .args([
            "--goprivate",
            "corp.example/*",
            "--go111module",
            "off",
            "add",
            "tuned",
        ])
        .output()
        .expect("run goflip add");
    assert!(
        out.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let cfg = goflip::ProjectConfig::read(&project_dir(td.path(), "tuned").join("project.yaml"))
        .expect("config");
    assert!(!cfg.go111module);
    assert_eq!(cfg.goprivate, "corp.example/*");
}

#[test]
fn test_add_rejects_empty_and_nested_names() {
    let td = tempfile::tempdir().expect("tmpdir");
    for name in ["", "a/b"] {
        let out = goflip_cmd(td.path())
            .args(["add", name])
            .output()
            .expect("run goflip add");
        assert!(!out.status.success(), "add {name:?} must fail");
    }
}
