//! Gator entry point - runs one account command and exits.

use std::{env, error::Error, process};

use gator::{
    cli::{
        CliError, Command, CommandRegistry, State,
        formatting::{format_error, format_help},
    },
    config::{Config, OsFileAccess},
    tracing_config,
    users::PgUserStore,
};
use tracing::{Level, error, span};

fn main() {
    if let Err(e) = tracing_config::init_cli_mode() {
        eprintln!("{}: failed to initialize logging: {e}", format_error("Warning"));
    }

    let args: Vec<String> = env::args().collect();
    let registry = CommandRegistry::with_default_commands();

    let Some(command) = Command::from_args(&args) else {
        let program = args.first().map(String::as_str).unwrap_or("gator");
        eprintln!("{}", format_help(program, &registry.list_commands()));
        process::exit(1);
    };

    match run_command(&registry, &command) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            if e.downcast_ref::<CliError>().is_some_and(CliError::is_fatal) {
                error!(command = command.name(), "Command failed with a fatal error");
            }
            eprintln!("{}: {e}", format_error("Error"));
            process::exit(1);
        }
    }
}

/// Loads the config, connects to the user database, and runs `command`.
///
/// # Errors
/// Returns error if the config cannot be loaded, the database is unreachable,
/// or the command itself fails.
fn run_command(registry: &CommandRegistry, command: &Command) -> Result<String, Box<dyn Error>> {
    let _span = span!(Level::INFO, "gator", command = command.name()).entered();

    let fs = OsFileAccess;
    let config = Config::load(&fs)?;
    let users = PgUserStore::connect(&config.db_url)?;
    let mut state = State::new(config, users);

    Ok(registry.run(&fs, &mut state, command)?)
}
