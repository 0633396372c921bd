//! Render an environment descriptor into shell-specific script text.
//!
//! Output layout is fixed: GOPATH, GO111MODULE, GOPRIVATE, PATH, then one
//! line per extra variable in key order, a bare comment-marker line, and the
//! usage hint. Every assignment is exactly `prefix+NAME+delimiter+value+
//! suffix` for the dialect in effect. Validation happens before anything is
//! produced so a caller never prints a partially rendered script.

use crate::descriptor::EnvDescriptor;
use crate::errors::EnvError;

/// Reject strings that would break the single-assignment-per-line shape.
///
/// Keep error text stable (tests depend on it).
fn reject_control(s: &str, what: &str) -> Result<(), EnvError> {
    if s.contains('\n') || s.contains('\r') || s.contains('\0') {
        return Err(EnvError::TemplateFailure(format!(
            "{what} contains a newline or NUL"
        )));
    }
    Ok(())
}

fn reject_bad_name(name: &str) -> Result<(), EnvError> {
    if name.is_empty() {
        return Err(EnvError::TemplateFailure(
            "extra variable with empty name".to_string(),
        ));
    }
    if name.contains('=') || name.contains(char::is_whitespace) {
        return Err(EnvError::TemplateFailure(format!(
            "extra variable name '{name}' contains '=' or whitespace"
        )));
    }
    reject_control(name, "extra variable name")
}

/// Produce the final multi-line script for the descriptor's dialect.
/// Fails only with TemplateFailure, for descriptors no builder produces.
pub fn render(descriptor: &EnvDescriptor) -> Result<String, EnvError> {
    for (name, value) in &descriptor.extra {
        reject_bad_name(name)?;
        reject_control(value, &format!("value of extra variable '{name}'"))?;
    }
    for (what, value) in [
        ("GOPATH value", &descriptor.gopath),
        ("GOPRIVATE value", &descriptor.goprivate),
        ("PATH value", &descriptor.search_path),
    ] {
        reject_control(value, what)?;
    }

    let rules = descriptor.dialect.rules();
    let mut out = String::new();
    let mut line = |name: &str, value: &str| {
        out.push_str(rules.prefix);
        out.push_str(name);
        out.push_str(rules.delimiter);
        out.push_str(value);
        out.push_str(rules.suffix);
    };

    line("GOPATH", &descriptor.gopath);
    line("GO111MODULE", &descriptor.go111module);
    line("GOPRIVATE", &descriptor.goprivate);
    line("PATH", &descriptor.search_path);
    for (name, value) in &descriptor.extra {
        line(name, value);
    }

    out.push_str(rules.comment);
    out.push('\n');
    out.push_str(&descriptor.usage_hint);
    Ok(out)
}
