//! Workspace layout under the projects root.
//!
//! One directory per project, with a fixed `go` subtree used as the isolated
//! GOPATH and a `project.yaml` holding the persisted configuration:
//!
//! ```text
//! <root>/<name>/go/bin    workspace bin dir, prepended to PATH
//! <root>/<name>/project.yaml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::EnvError;
use crate::settings::Settings;

pub const PROJECT_CONFIG_FILE: &str = "project.yaml";
pub const WORKSPACE_SUBDIR: &str = "go";

/// Resolved filesystem locations for one project.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub project_dir: PathBuf,
    pub gopath: PathBuf,
    pub bin_dir: PathBuf,
    pub config_file: PathBuf,
}

impl WorkspacePaths {
    /// Resolve the workspace locations for `name` under the settings root.
    /// The name must be a single non-empty path component.
    pub fn for_project(settings: &Settings, name: &str) -> Result<WorkspacePaths, EnvError> {
        if name.is_empty() {
            return Err(EnvError::InvalidProjectName("name is empty".to_string()));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(EnvError::InvalidProjectName(format!(
                "'{name}' is not a plain directory name"
            )));
        }
        let project_dir = settings.projects_root.join(name);
        let gopath = project_dir.join(WORKSPACE_SUBDIR);
        Ok(WorkspacePaths {
            bin_dir: gopath.join("bin"),
            config_file: project_dir.join(PROJECT_CONFIG_FILE),
            project_dir,
            gopath,
        })
    }
}

/// Enumerate known projects: immediate subdirectories of the root that carry
/// the fixed workspace subtree. Read-only scan; a missing root reads as "no
/// projects". Sorted for stable output.
pub fn project_names(root: &Path) -> Vec<String> {
    let mut names = Vec::new();
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() && path.join(WORKSPACE_SUBDIR).is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names.sort();
    names
}

pub fn project_exists(root: &Path, name: &str) -> bool {
    project_names(root).iter().any(|n| n == name)
}

/// Create the workspace tree for a new project (gopath with its bin dir).
/// The caller has already checked the project directory does not exist.
pub fn create_workspace(paths: &WorkspacePaths) -> Result<(), EnvError> {
    fs::create_dir_all(&paths.bin_dir).map_err(|e| EnvError::PersistFailure {
        path: paths.bin_dir.clone(),
        cause: e,
    })
}
