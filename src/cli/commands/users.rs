use crate::{
    cli::{Command, CommandResult, State},
    config::FileAccess,
};

/// Lists registered users, oldest first, marking the current one.
///
/// # Example Usage
///
/// ```bash
/// gator users
/// ```
///
/// # Errors
///
/// * `CliError::UserStore` - If the store fails
pub fn users(_fs: &dyn FileAccess, state: &mut State, _command: &Command) -> CommandResult {
    let users = state.users.list_all()?;

    if users.is_empty() {
        return Ok("No users registered.".to_string());
    }

    let current = state.config.current_user_name.as_str();
    let lines: Vec<String> = users
        .iter()
        .map(|user| {
            if user.name == current {
                format!("* {} (current)", user.name)
            } else {
                format!("* {}", user.name)
            }
        })
        .collect();

    Ok(lines.join("\n"))
}
