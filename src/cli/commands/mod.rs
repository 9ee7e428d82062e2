//! Built-in account commands.
mod login;
mod register;
mod reset;
mod users;

pub use login::login;
pub use register::register;
pub use reset::reset;
pub use users::users;

use crate::cli::CommandRegistry;

/// Registers all built-in commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
pub fn register_commands(registry: &mut CommandRegistry) {
    registry.register("login", login);
    registry.register("register", register);
    registry.register("reset", reset);
    registry.register("users", users);
}
