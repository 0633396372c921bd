//! Shell detection from the operating environment.

use std::env;
use std::path::Path;

use crate::dialect::Dialect;
use crate::errors::EnvError;

/// Resolve the dialect for this invocation: an explicit `--shell` override
/// wins, otherwise the basename of $SHELL is probed. Fails with UnknownShell
/// only when neither source yields a name.
pub fn resolve(explicit: Option<&str>) -> Result<Dialect, EnvError> {
    if let Some(name) = explicit {
        if !name.trim().is_empty() {
            return Ok(Dialect::from_name(name));
        }
    }
    detect()
}

#[cfg(not(windows))]
fn detect() -> Result<Dialect, EnvError> {
    let shell = env::var("SHELL").unwrap_or_default();
    if shell.is_empty() {
        return Err(EnvError::UnknownShell);
    }
    let base = Path::new(&shell)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if base.is_empty() {
        return Err(EnvError::UnknownShell);
    }
    Ok(Dialect::from_name(base))
}

#[cfg(windows)]
fn detect() -> Result<Dialect, EnvError> {
    // No SHELL convention on Windows; cmd is the safe default.
    match env::var("SHELL") {
        Ok(shell) if !shell.is_empty() => {
            let base = Path::new(&shell)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            Ok(Dialect::from_name(base))
        }
        _ => Ok(Dialect::Cmd),
    }
}
