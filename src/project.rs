//! Per-project configuration: canonical shape, durable read/write, merge.
//!
//! One `project.yaml` per project. The record is written in full on create
//! (including an explicit empty `env` mapping) and read on every `env`
//! invocation; a missing file means "use defaults" and is reported as
//! NotFound for the caller to tolerate.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::{module_mode_value, EnvDescriptor};
use crate::errors::EnvError;
use crate::settings::Settings;

/// Persisted per-project configuration.
///
/// The file must deserialize into exactly this shape; unknown or missing
/// keys are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub go111module: bool,
    pub goprivate: String,
    pub env: BTreeMap<String, String>,
}

impl ProjectConfig {
    /// Initial configuration for a newly added project, seeded from the
    /// process-wide defaults.
    pub fn defaults(settings: &Settings) -> ProjectConfig {
        ProjectConfig {
            go111module: settings.go111module,
            goprivate: settings.goprivate.clone(),
            env: BTreeMap::new(),
        }
    }

    /// Read the stored record. NotFound when the file is absent,
    /// MalformedConfig when it exists but does not parse into this shape.
    pub fn read(path: &Path) -> Result<ProjectConfig, EnvError> {
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

    /// Serialize all fields and atomically replace `path`: the record is
    /// written to a temporary file in the same directory and renamed over
    /// the destination, so readers never observe a half-written file. The
    /// containing directory must already exist.
    pub fn write(&self, path: &Path) -> Result<(), EnvError> {
        let persist = |p: &Path| -> io::Result<()> {
            let out = serde_yaml::to_string(self)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let dir = p.parent().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "config path has no parent")
            })?;
            let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
            tmp.write_all(out.as_bytes())?;
            tmp.persist(p).map_err(|e| e.error)?;
            Ok(())
        };
        persist(path).map_err(|e| EnvError::PersistFailure {
            path: path.to_path_buf(),
            cause: e,
        })
    }

    /// Merge the stored record into a descriptor. Module mode and the
    /// private-module pattern are independently overridden (stored config
    /// always wins); extra variables are unioned with config entries
    /// replacing descriptor entries of the same key.
    pub fn apply(&self, descriptor: &mut EnvDescriptor) {
        descriptor.go111module = module_mode_value(self.go111module).to_string();
        descriptor.goprivate = self.goprivate.clone();
        for (key, value) in &self.env {
            descriptor.extra.insert(key.clone(), value.clone());
        }
    }
}
