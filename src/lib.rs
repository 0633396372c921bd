//! goflip: per-project Go toolchain environments.
//!
//! Creates an isolated GOPATH workspace per named project, persists a small
//! per-project configuration (module mode, private-module pattern, extra
//! environment variables), and renders shell-specific commands that export
//! the project's environment into the calling shell. The tool only produces
//! text; applying it to the live shell is the caller's job (see the emitted
//! usage hint).

pub mod color;
pub mod descriptor;
pub mod dialect;
pub mod errors;
pub mod project;
pub mod render;
pub mod settings;
pub mod shell;
pub mod workspace;

pub use color::{
    color_enabled_stderr, log_error_stderr, log_info_stderr, log_warn_stderr, paint, set_color_mode,
    ColorMode,
};
pub use descriptor::{
    compose_search_path, current_search_path, previous_gopath, EnvDescriptor, PATH_LIST_SEPARATOR,
};
pub use dialect::{Dialect, DialectRules};
pub use errors::{display_for_env_error, exit_code_for_env_error, EnvError};
pub use project::ProjectConfig;
pub use render::render;
pub use settings::{parse_module_mode, Settings};
pub use workspace::{
    create_workspace, project_exists, project_names, WorkspacePaths, PROJECT_CONFIG_FILE,
    WORKSPACE_SUBDIR,
};
