//! Shell dialect table and usage-hint generation.
//!
//! Each supported shell is one enum case carrying literal formatting rules;
//! adding a dialect means adding one case to `rules` and one wrapping arm to
//! `usage_hint`. Unrecognized names fall back to the posix rules so output is
//! always produced.

/// Formatting rules for one shell dialect.
///
/// Invariant: `prefix + NAME + delimiter + value + suffix` concatenates into a
/// syntactically valid assignment for the target shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectRules {
    pub prefix: &'static str,
    pub delimiter: &'static str,
    pub suffix: &'static str,
    pub comment: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Posix,
    Fish,
    PowerShell,
    Cmd,
    Emacs,
    Tcsh,
}

impl Dialect {
    /// Map a shell name (typically the basename of $SHELL) to a dialect.
    /// Unknown names select the posix rules.
    pub fn from_name(name: &str) -> Dialect {
        match name.trim().to_ascii_lowercase().as_str() {
            "fish" => Dialect::Fish,
            "powershell" | "pwsh" => Dialect::PowerShell,
            "cmd" => Dialect::Cmd,
            "emacs" => Dialect::Emacs,
            "tcsh" | "csh" => Dialect::Tcsh,
            _ => Dialect::Posix,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Posix => "sh",
            Dialect::Fish => "fish",
            Dialect::PowerShell => "powershell",
            Dialect::Cmd => "cmd",
            Dialect::Emacs => "emacs",
            Dialect::Tcsh => "tcsh",
        }
    }

    /// Literal formatting rule tuple for this dialect. Pure lookup.
    pub fn rules(&self) -> DialectRules {
        match self {
            Dialect::Posix => DialectRules {
                prefix: "export ",
                delimiter: "=\"",
                suffix: "\"\n",
                comment: "#",
            },
            Dialect::Fish => DialectRules {
                prefix: "set -gx ",
                delimiter: " \"",
                suffix: "\";\n",
                comment: "#",
            },
            Dialect::PowerShell => DialectRules {
                prefix: "$Env:",
                delimiter: " = \"",
                suffix: "\"\n",
                comment: "#",
            },
            Dialect::Cmd => DialectRules {
                prefix: "SET ",
                delimiter: "=",
                suffix: "\n",
                comment: "REM",
            },
            Dialect::Emacs => DialectRules {
                prefix: "(setenv \"",
                delimiter: "\" \"",
                suffix: "\")\n",
                comment: ";;",
            },
            Dialect::Tcsh => DialectRules {
                prefix: "setenv ",
                delimiter: " \"",
                suffix: "\";\n",
                comment: ":",
            },
        }
    }

    /// Produce the comment block reminding the user how to apply the emitted
    /// output to the active shell. `argv` is the literal argument vector used
    /// to invoke the tool; tokens containing whitespace or backslashes are
    /// quoted before joining.
    pub fn usage_hint(&self, argv: &[String]) -> String {
        let command_line = argv
            .iter()
            .map(|a| quote_token(a))
            .collect::<Vec<_>>()
            .join(" ");

        let cmd = match self {
            Dialect::Fish => format!("eval ({command_line})"),
            Dialect::PowerShell => format!("& {command_line} | Invoke-Expression"),
            Dialect::Cmd => {
                format!("\t@FOR /f \"tokens=*\" %i IN ('{command_line}') DO @%i")
            }
            Dialect::Emacs => format!(
                "(with-temp-buffer (shell-command \"{command_line}\" (current-buffer)) (eval-buffer))"
            ),
            Dialect::Tcsh => format!("eval `{command_line}`"),
            Dialect::Posix => format!("eval $({command_line})"),
        };

        let comment = self.rules().comment;
        format!("{comment} Run this command to configure your shell: \n{comment} {cmd}\n")
    }
}

fn quote_token(t: &str) -> String {
    if t.contains(char::is_whitespace) || t.contains('\\') {
        format!("\"{t}\"")
    } else {
        t.to_string()
    }
}
