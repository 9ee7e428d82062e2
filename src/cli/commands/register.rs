use tracing::info;

use crate::{
    cli::{CliError, Command, CommandResult, FatalError, State},
    config::{ConfigError, FileAccess},
    users::{NewUser, User, UserStoreError},
};

/// Creates a user and makes them the current user.
///
/// # Example Usage
///
/// ```bash
/// gator register kahya
/// ```
///
/// # Errors
///
/// * `CliError::InvalidArguments` - Unless exactly one username is given
/// * `CliError::Config(ConfigError::NoUsernameSupplied)` - If the username is empty
/// * `CliError::Fatal(FatalError::UserConflict)` - If the name is already taken
/// * `CliError::Config` - If the config cannot be saved
pub fn register(fs: &dyn FileAccess, state: &mut State, command: &Command) -> CommandResult {
    let [username] = command.args() else {
        return Err(CliError::InvalidArguments(
            "must supply one user to register".to_string(),
        ));
    };

    if username.is_empty() {
        return Err(ConfigError::NoUsernameSupplied.into());
    }

    let user = state
        .users
        .create(NewUser::new(username.as_str()))
        .map_err(|err| match err {
            UserStoreError::Conflict { .. } => CliError::Fatal(FatalError::UserConflict {
                name: username.clone(),
                source: err,
            }),
            other => CliError::UserStore(other),
        })?;

    info!(user = %user.name, id = %user.id, "Registered user");

    state.config.set_user(fs, &user.name)?;

    Ok(describe(&user))
}

fn describe(user: &User) -> String {
    format!(
        "User was created:\nName: {}\nUUID: {}\nCreated At: {}\nUpdated At: {}",
        user.name, user.id, user.created_at, user.updated_at
    )
}
