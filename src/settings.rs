//! Process-wide settings: projects root and per-project defaults.
//!
//! Layering, lowest to highest: built-in defaults, optional `~/.goflip.yaml`
//! settings file, `GOFLIP_*` environment variables, CLI flags (applied by the
//! front-end). Loaded once at startup and passed by reference into the
//! builders; there are no mutable globals.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::EnvError;

pub const SETTINGS_FILE_NAME: &str = ".goflip.yaml";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding one subdirectory per project.
    pub projects_root: PathBuf,
    /// Default GOPRIVATE pattern for new projects; may be empty.
    pub goprivate: String,
    /// Default module-mode flag for new projects.
    pub go111module: bool,
}

/// On-disk shape of `~/.goflip.yaml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    root: Option<String>,
    goprivate: Option<String>,
    go111module: Option<bool>,
}

impl Settings {
    /// Load settings with full layering. `explicit_file` comes from the
    /// `--config` flag and must exist when given; the default settings file
    /// is optional.
    pub fn load(explicit_file: Option<&Path>) -> Result<Settings, EnvError> {
        let home = home::home_dir().ok_or_else(|| EnvError::PersistFailure {
            path: PathBuf::from("~"),
            cause: io::Error::other("home directory not found"),
        })?;
        let mut settings = Settings::defaults(&home);

        match explicit_file {
            Some(path) => {
                if !path.exists() {
                    return Err(EnvError::NotFound(path.to_path_buf()));
                }
                settings.apply_file(&read_settings_file(path)?);
            }
            None => {
                let default_path = home.join(SETTINGS_FILE_NAME);
                if default_path.exists() {
                    settings.apply_file(&read_settings_file(&default_path)?);
                }
            }
        }

        settings.apply_env();
        Ok(settings)
    }

    fn defaults(home: &Path) -> Settings {
        Settings {
            projects_root: home.join(".goflip"),
            goprivate: String::new(),
            go111module: true,
        }
    }

    fn apply_file(&mut self, file: &SettingsFile) {
        if let Some(root) = &file.root {
            if !root.trim().is_empty() {
                self.projects_root = PathBuf::from(root);
            }
        }
        if let Some(goprivate) = &file.goprivate {
            self.goprivate = goprivate.clone();
        }
        if let Some(on) = file.go111module {
            self.go111module = on;
        }
    }

    fn apply_env(&mut self) {
        if let Ok(root) = env::var("GOFLIP_ROOT") {
            if !root.trim().is_empty() {
                self.projects_root = PathBuf::from(root);
            }
        }
        if let Ok(goprivate) = env::var("GOFLIP_GOPRIVATE") {
            self.goprivate = goprivate;
        }
        if let Ok(mode) = env::var("GOFLIP_GO111MODULE") {
            if let Some(on) = parse_module_mode(&mode) {
                self.go111module = on;
            }
        }
    }
}

/// Parse a module-mode flag value ("on"/"off" and boolean-like spellings).
pub fn parse_module_mode(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, EnvError> {
    let data = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            EnvError::NotFound(path.to_path_buf())
        } else {
            EnvError::PersistFailure {
                path: path.to_path_buf(),
                cause: e,
            }
        }
    })?;
    serde_yaml::from_str(&data).map_err(|e| EnvError::MalformedConfig {
        path: path.to_path_buf(),
        cause: e.to_string(),
    })
}
