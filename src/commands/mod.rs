//! Subcommand handlers. Each returns the typed error for main to print and
//! map to an exit code; `run_env` returns the rendered script so nothing
//! reaches stdout before the whole render succeeded.

use goflip::{
    color_enabled_stderr, create_workspace, current_search_path, log_info_stderr, previous_gopath,
    project_exists, project_names, render, EnvDescriptor, EnvError, ProjectConfig, Settings,
    WorkspacePaths,
};

/// Create the workspace for a new project and persist its default
/// configuration. Fails when the project path already exists; a workspace
/// created before a failing config write is intentionally left in place.
pub(crate) fn run_add(settings: &Settings, name: &str) -> Result<(), EnvError> {
    let paths = WorkspacePaths::for_project(settings, name)?;
    if paths.project_dir.exists() {
        return Err(EnvError::InvalidProjectName(format!(
            "project path '{}' exists",
            paths.project_dir.display()
        )));
    }

    let use_err = color_enabled_stderr();
    log_info_stderr(use_err, &format!("Creating {}", paths.gopath.display()));
    create_workspace(&paths)?;

    ProjectConfig::defaults(settings).write(&paths.config_file)
}

/// Assemble, merge and render the environment script for an existing
/// project. Returned text is printed to stdout verbatim by the caller.
pub(crate) fn run_env(
    settings: &Settings,
    name: &str,
    shell: Option<&str>,
    argv: &[String],
) -> Result<String, EnvError> {
    let paths = WorkspacePaths::for_project(settings, name)?;
    if !project_exists(&settings.projects_root, name) {
        return Err(EnvError::InvalidProjectName(format!(
            "project '{name}' not in list"
        )));
    }

    let dialect = goflip::shell::resolve(shell)?;
    let mut descriptor = EnvDescriptor::for_project(
        settings,
        &paths,
        dialect,
        argv,
        &current_search_path(),
        &previous_gopath(),
    );

    // Stored project configuration wins over defaults; a missing file just
    // means the defaults stand.
    match ProjectConfig::read(&paths.config_file) {
        Ok(config) => config.apply(&mut descriptor),
        Err(EnvError::NotFound(_)) => {}
        Err(e) => return Err(e),
    }

    render(&descriptor)
}

/// Print known project names, one per line.
pub(crate) fn run_list(settings: &Settings) -> Result<(), EnvError> {
    for name in project_names(&settings.projects_root) {
        println!("{name}");
    }
    Ok(())
}
