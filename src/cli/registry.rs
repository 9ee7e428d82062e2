use std::collections::HashMap;

use crate::config::FileAccess;

use super::{CliError, Command, CommandResult, State, commands, types::Handler};

/// Registry mapping command names to handlers.
///
/// Commands are looked up by exact name. Running a command is a plain lookup
/// and call: the handler's result is returned as-is, and nothing else happens.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in command registered.
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();
        commands::register_commands(&mut registry);
        registry
    }

    /// Registers `handler` under `name`.
    ///
    /// If a handler with the same name already exists, it will be replaced.
    pub fn register<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&dyn FileAccess, &mut State, &Command) -> CommandResult + 'static,
    {
        self.handlers.insert(name.to_string(), Box::new(handler));
    }

    /// Runs the handler registered under the command's name.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if no handler has that name, in
    /// which case nothing is invoked. Otherwise returns whatever the handler
    /// returns.
    pub fn run(&self, fs: &dyn FileAccess, state: &mut State, command: &Command) -> CommandResult {
        let handler = self
            .handlers
            .get(command.name())
            .ok_or_else(|| CliError::CommandNotFound(command.name().to_string()))?;

        handler(fs, state, command)
    }

    /// Lists all registered command names, sorted alphabetically.
    pub fn list_commands(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }
}
