use tracing::info;

use crate::{
    cli::{Command, CommandResult, State},
    config::FileAccess,
};

/// Deletes every registered user. Arguments are ignored.
///
/// # Errors
///
/// * `CliError::UserStore` - If the store fails
pub fn reset(_fs: &dyn FileAccess, state: &mut State, _command: &Command) -> CommandResult {
    let removed = state.users.delete_all()?;
    info!(removed, "Reset users");

    Ok("Successfully reset all users.".to_string())
}
