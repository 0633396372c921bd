//! Environment descriptor assembly.
//!
//! The descriptor is transient: rebuilt on every invocation from settings,
//! workspace paths and the caller's environment, merged with the stored
//! project configuration by the caller, consumed once by the renderer and
//! discarded.

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::dialect::Dialect;
use crate::settings::Settings;
use crate::workspace::WorkspacePaths;

/// Host list separator for PATH-like variables.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Full set of variables to export for a project, before rendering.
#[derive(Debug, Clone)]
pub struct EnvDescriptor {
    /// Workspace path exported as GOPATH (`<root>/<name>/go`).
    pub gopath: String,
    /// Composed search path, project bin directory first.
    pub search_path: String,
    /// Rendered module-mode flag value, "on" or "off".
    pub go111module: String,
    /// Private-module pattern; may be empty.
    pub goprivate: String,
    /// Free-form extra variables, unique keys in stable order.
    pub extra: BTreeMap<String, String>,
    pub dialect: Dialect,
    pub usage_hint: String,
}

impl EnvDescriptor {
    /// Compose the descriptor with defaults in place. Pure over the supplied
    /// inputs; persisted overrides are merged in afterwards by the caller.
    pub fn for_project(
        settings: &Settings,
        paths: &WorkspacePaths,
        dialect: Dialect,
        argv: &[String],
        current_search_path: &str,
        previous_gopath: &str,
    ) -> EnvDescriptor {
        EnvDescriptor {
            gopath: paths.gopath.display().to_string(),
            search_path: compose_search_path(&paths.bin_dir, current_search_path, previous_gopath),
            go111module: module_mode_value(settings.go111module).to_string(),
            goprivate: settings.goprivate.clone(),
            extra: BTreeMap::new(),
            dialect,
            usage_hint: dialect.usage_hint(argv),
        }
    }
}

/// Canonical rendering of the module-mode flag.
pub fn module_mode_value(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

/// Build the search path for the project's shell session: the workspace bin
/// directory first, then every segment of the caller's current search path
/// that does not reference the previously active workspace root. Relative
/// order of retained segments is preserved; no other de-duplication happens.
///
/// An empty `previous_root` retains every segment (substring matching against
/// "" would drop them all).
pub fn compose_search_path(project_bin: &Path, current: &str, previous_root: &str) -> String {
    let mut segments = vec![project_bin.display().to_string()];
    if !current.is_empty() {
        for seg in current.split(PATH_LIST_SEPARATOR) {
            if previous_root.is_empty() || !seg.contains(previous_root) {
                segments.push(seg.to_string());
            }
        }
    }
    segments.join(&PATH_LIST_SEPARATOR.to_string())
}

/// Search path the caller currently exports, or empty when unset.
pub fn current_search_path() -> String {
    env::var("PATH").unwrap_or_default()
}

/// Workspace root that was active before this invocation: $GOPATH if set,
/// else the build-default `~/go`, else empty (composer keeps everything).
pub fn previous_gopath() -> String {
    match env::var("GOPATH") {
        Ok(v) if !v.is_empty() => v,
        _ => home::home_dir()
            .map(|h| h.join("go").display().to_string())
            .unwrap_or_default(),
    }
}
