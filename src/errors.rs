//! Error mapping guide:
//! - Every failure kind maps to exit code 1; this is a single-shot CLI and nothing is retried.
//! - Prefer EnvError for internal clarity while keeping user-visible strings in display_for_env_error.
//! - Validate before emitting: no partial shell output may reach stdout once an error is detected.
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum EnvError {
    /// Empty name, or the name fails the existence/non-existence precondition
    /// for the requested operation.
    InvalidProjectName(String),
    /// Shell dialect could not be determined and none was supplied explicitly.
    UnknownShell,
    /// Expected configuration file is absent; callers that tolerate it fall
    /// back to defaults.
    NotFound(PathBuf),
    /// Configuration file exists but does not parse into the expected shape.
    MalformedConfig { path: PathBuf, cause: String },
    /// I/O error during directory creation or configuration write.
    PersistFailure { path: PathBuf, cause: io::Error },
    /// Rendering could not produce output; unreachable for well-formed
    /// descriptors and surfaced as a programming-error signal.
    TemplateFailure(String),
}

/// Render a user-facing string for EnvError without changing existing texts.
pub fn display_for_env_error(e: &EnvError) -> String {
    match e {
        EnvError::InvalidProjectName(msg) => format!("invalid project name: {msg}"),
        EnvError::UnknownShell => {
            "unknown shell: SHELL is not set; pass --shell to pick a dialect".to_string()
        }
        EnvError::NotFound(path) => format!("not found: {}", path.display()),
        EnvError::MalformedConfig { path, cause } => {
            format!("malformed config {}: {}", path.display(), cause)
        }
        EnvError::PersistFailure { path, cause } => {
            format!("cannot write {}: {}", path.display(), cause)
        }
        EnvError::TemplateFailure(msg) => format!("render failure: {msg}"),
    }
}

/// Convert EnvError to a process exit code. All kinds terminate with 1.
pub fn exit_code_for_env_error(_e: &EnvError) -> u8 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_path_for_config_errors() {
        let e = EnvError::MalformedConfig {
            path: PathBuf::from("/p/project.yaml"),
            cause: "bad".to_string(),
        };
        assert!(display_for_env_error(&e).contains("/p/project.yaml"));
    }

    #[test]
    fn test_unknown_shell_suggests_flag() {
        assert!(display_for_env_error(&EnvError::UnknownShell).contains("--shell"));
    }

    #[test]
    fn test_exit_code_is_one_for_all_kinds() {
        assert_eq!(
            exit_code_for_env_error(&EnvError::InvalidProjectName("x".into())),
            1
        );
        assert_eq!(exit_code_for_env_error(&EnvError::UnknownShell), 1);
    }
}
