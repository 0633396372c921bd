use std::path::Path;
use std::process::Command;

/// Command for the built binary with a hermetic environment: HOME and the
/// projects root pinned to the sandbox, shell detection pinned to bash.
pub fn goflip_cmd(sandbox: &Path) -> Command {
    let bin = env!("CARGO_BIN_EXE_goflip");
    let mut cmd = Command::new(bin);
    cmd.env("HOME", sandbox)
        .env("GOFLIP_ROOT", sandbox.join("projects"))
        .env("SHELL", "/bin/bash")
        .env_remove("GOFLIP_GOPRIVATE")
        .env_remove("GOFLIP_GO111MODULE")
        .env_remove("GOFLIP_COLOR")
        .env("NO_COLOR", "1");
    cmd
}

#[allow(dead_code)]
pub fn add_project(sandbox: &Path, name: &str) {
    let out = goflip_cmd(sandbox)
        .args(["add", name])
        .output()
        .expect("run goflip add");
    assert!(
        out.status.success(),
        "goflip add {} failed\nstdout:\n{}\nstderr:\n{}",
        name,
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[allow(dead_code)]
pub fn project_dir(sandbox: &Path, name: &str) -> std::path::PathBuf {
    sandbox.join("projects").join(name)
}
