use tracing::info;

use crate::{
    cli::{CliError, Command, CommandResult, FatalError, State},
    config::{ConfigError, FileAccess},
    users::UserStoreError,
};

/// Sets the current user after checking that they are registered.
///
/// # Example Usage
///
/// ```bash
/// gator login kahya
/// ```
///
/// # Errors
///
/// * `CliError::Config(ConfigError::NoUsernameSupplied)` - If no username is given
/// * `CliError::InvalidArguments` - If more than one argument is given
/// * `CliError::Fatal(FatalError::UserNotFound)` - If the user is not registered
/// * `CliError::Config` - If the config cannot be saved
pub fn login(fs: &dyn FileAccess, state: &mut State, command: &Command) -> CommandResult {
    let username = match command.args() {
        [] => return Err(ConfigError::NoUsernameSupplied.into()),
        [username] => username,
        args => {
            return Err(CliError::InvalidArguments(format!(
                "'login' expects exactly one <username>, got {}",
                args.len()
            )));
        }
    };

    state
        .users
        .find_by_name(username)
        .map_err(|err| match err {
            UserStoreError::NotFound { .. } => CliError::Fatal(FatalError::UserNotFound {
                name: username.clone(),
                source: err,
            }),
            other => CliError::UserStore(other),
        })?;

    state.config.set_user(fs, username)?;
    info!(user = %username, "Logged in");

    Ok(format!("Current user set to '{username}'"))
}
