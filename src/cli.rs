use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Validate the --go111module flag value
fn validate_module_mode(s: &str) -> Result<String, String> {
    match goflip::parse_module_mode(s) {
        Some(_) => Ok(s.to_string()),
        None => Err("must be one of on, off".to_string()),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "goflip",
    version,
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GOFLIP_BUILD_DATE"),
        ", ", env!("GOFLIP_BUILD_TARGET"),
        ", ", env!("GOFLIP_BUILD_RUSTC"), ")"
    ),
    about = "Manage per-project Go toolchain environments with isolated GOPATH workspaces.",
    after_long_help = "Examples:\n  goflip add myproj\n  eval $(goflip env myproj)\n  goflip env myproj --shell fish\n  goflip list\n"
)]
pub(crate) struct Cli {
    /// Settings file (default: $HOME/.goflip.yaml)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Projects root directory (default: $HOME/.goflip)
    #[arg(long)]
    pub(crate) root: Option<PathBuf>,

    /// Default GOPRIVATE pattern for new projects
    #[arg(long)]
    pub(crate) goprivate: Option<String>,

    /// Default GO111MODULE value for new projects: on|off
    #[arg(long, value_parser = validate_module_mode)]
    pub(crate) go111module: Option<String>,

    /// Colorize stderr output: auto|always|never
    #[arg(long = "color", value_enum)]
    pub(crate) color: Option<goflip::ColorMode>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Create a go project environment
    Add {
        /// Project name (single directory component)
        name: String,
    },

    /// Display commands to set up the environment for a project
    Env {
        /// Project name
        name: String,
        /// Target shell dialect: sh|fish|powershell|cmd|emacs|tcsh (default: detect from $SHELL)
        #[arg(long)]
        shell: Option<String>,
    },

    /// List known projects
    List,
}
