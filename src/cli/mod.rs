//! Command dispatch for the gator binary.
//!
//! A [`CommandRegistry`] maps command names to handlers. The binary turns
//! argv into a [`Command`] and runs it against the process [`State`] with a
//! [`FileAccess`](crate::config::FileAccess) for config persistence.

pub mod commands;
pub mod formatting;
mod registry;
mod state;
mod types;

pub use registry::CommandRegistry;
pub use state::State;
pub use types::{CliError, Command, CommandResult, FatalError, Handler};
