use std::process::ExitCode;

use clap::Parser;

use goflip::{
    color_enabled_stderr, display_for_env_error, exit_code_for_env_error, log_error_stderr,
    parse_module_mode, EnvError, Settings,
};

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        goflip::set_color_mode(mode);
    }

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => return fail("cannot load settings", &e),
    };
    // CLI flags are the top of the settings layering
    if let Some(root) = &cli.root {
        settings.projects_root = root.clone();
    }
    if let Some(goprivate) = &cli.goprivate {
        settings.goprivate = goprivate.clone();
    }
    if let Some(mode) = cli.go111module.as_deref().and_then(parse_module_mode) {
        settings.go111module = mode;
    }

    match &cli.command {
        Command::Add { name } => match commands::run_add(&settings, name) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fail("cannot add project", &e),
        },
        Command::Env { name, shell } => {
            let argv: Vec<String> = std::env::args().collect();
            match commands::run_env(&settings, name, shell.as_deref(), &argv) {
                Ok(script) => {
                    print!("{script}");
                    ExitCode::SUCCESS
                }
                Err(e) => fail("cannot emit environment", &e),
            }
        }
        Command::List => match commands::run_list(&settings) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => fail("cannot list projects", &e),
        },
    }
}

fn fail(context: &str, e: &EnvError) -> ExitCode {
    let use_err = color_enabled_stderr();
    log_error_stderr(
        use_err,
        &format!("goflip: {context}: {}", display_for_env_error(e)),
    );
    ExitCode::from(exit_code_for_env_error(e))
}
