use thiserror::Error;

use crate::{
    config::{ConfigError, FileAccess},
    users::UserStoreError,
};

use super::State;

/// Business-rule failures that should end the program.
///
/// Handlers return these instead of exiting; the binary decides what to do.
#[derive(Error, Debug)]
pub enum FatalError {
    /// Login was attempted for a user that is not registered.
    #[error("user '{name}' is not registered: {source}")]
    UserNotFound {
        /// Name that was looked up
        name: String,
        /// Store error behind the failure
        #[source]
        source: UserStoreError,
    },

    /// Registration was attempted for a name that is already taken.
    #[error("could not register user '{name}': {source}")]
    UserConflict {
        /// Name that was being registered
        name: String,
        /// Store error behind the failure
        #[source]
        source: UserStoreError,
    },
}

/// Errors that can occur during CLI command execution.
///
/// Lower-layer errors are kept as the variant payload so callers can match
/// on the original kind.
#[derive(Error, Debug)]
pub enum CliError {
    /// No handler is registered under the requested name.
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// The command was given the wrong number or kind of arguments.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Loading or saving the config failed, or the config rejected a value.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The user store failed for a non-business reason.
    #[error("user store error: {0}")]
    UserStore(#[from] UserStoreError),

    /// A business rule was violated; the program should exit.
    #[error("{0}")]
    Fatal(#[from] FatalError),
}

impl CliError {
    /// Returns `true` for errors that handlers flagged as fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Fatal(_))
    }
}

/// Result of running a handler: the report to print, or the failure.
pub type CommandResult = Result<String, CliError>;

/// A handler bound to a command name.
pub type Handler = Box<dyn Fn(&dyn FileAccess, &mut State, &Command) -> CommandResult>;

/// A command name plus its arguments, as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<String>,
}

impl Command {
    /// Creates a command from a name and its arguments.
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Builds a command from process arguments, skipping the program name.
    ///
    /// Returns `None` if no command name was given.
    pub fn from_args(args: &[String]) -> Option<Self> {
        let (name, rest) = args.get(1..)?.split_first()?;
        Some(Self::new(name.clone(), rest.to_vec()))
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The arguments following the command name.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
