mod common;

use common::{add_project, goflip_cmd, project_dir};

fn sep() -> String {
    goflip::PATH_LIST_SEPARATOR.to_string()
}

#[test]
fn test_env_emits_posix_script_with_workspace_first_in_path() {
    let td = tempfile::tempdir().expect("tmpdir");
    add_project(td.path(), "demo");

    let stale_root = td.path().join("old-ws").join("go");
    let stale_bin = stale_root.join("bin").display().to_string();
    let current_path = ["/usr/bin".to_string(), stale_bin, "/usr/local/bin".to_string()];

    let out = goflip_cmd(td.path())
        .env("GOPATH", &stale_root)
        .env("PATH", current_path.join(&sep()))
        .args(["env", "demo"])
        .output()
        .expect("run goflip env");
    assert!(
        out.status.success(),
        "env failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    let gopath = project_dir(td.path(), "demo").join("go");
    assert!(
        stdout.starts_with(&format!("export GOPATH=\"{}\"\n", gopath.display())),
        "unexpected first line:\n{stdout}"
    );
    assert!(stdout.contains("export GO111MODULE=\"on\"\n"));
    assert!(stdout.contains("export GOPRIVATE=\"\"\n"));

    let expected_path = [
        gopath.join("bin").display().to_string(),
        "/usr/bin".to_string(),
        "/usr/local/bin".to_string(),
    ]
    .join(&sep());
    assert!(
        stdout.contains(&format!("export PATH=\"{expected_path}\"\n")),
        "stale workspace segment not dropped:\n{stdout}"
    );

    assert!(stdout.contains("# Run this command to configure your shell: \n"));
    assert!(stdout.contains("eval $("), "posix hint missing:\n{stdout}");
    assert!(stdout.contains("env demo"), "hint lacks command line:\n{stdout}");
}

#[test]
fn test_env_shell_flag_selects_dialect() {
    let td = tempfile::tempdir().expect("tmpdir");
    add_project(td.path(), "demo");

    let out = goflip_cmd(td.path())
        .args(["env", "demo", "--shell", "powershell"])
        .output()
        .expect("run goflip env");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("$Env:GOPATH = \""));
    assert!(stdout.contains("| Invoke-Expression"));

    let out = goflip_cmd(td.path())
        .args(["env", "demo", "--shell", "cmd"])
        .output()
        .expect("run goflip env");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("SET GOPATH="));
    assert!(stdout.contains("@FOR /f \"tokens=*\""));
    assert!(stdout.contains("REM Run this command to configure your shell: \n"));
}

#[test]
fn test_env_without_shell_or_detection_fails_cleanly() {
    let td = tempfile::tempdir().expect("tmpdir");
    add_project(td.path(), "demo");

    let out = goflip_cmd(td.path())
        .env_remove("SHELL")
        .args(["env", "demo"])
        .output()
        .expect("run goflip env");
    assert!(!out.status.success(), "env must fail without a dialect");
    assert!(
        out.stdout.is_empty(),
        "stdout must stay clean on error: {}",
        String::from_utf8_lossy(&out.stdout)
    );
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("--shell"), "stderr should point at --shell: {err}");
}
