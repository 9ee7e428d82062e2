use crate::{config::Config, users::UserStore};

/// Everything a handler can mutate or query.
///
/// One `State` is built at startup and lives for the whole process.
pub struct State {
    /// The live configuration. Handlers update it in place.
    pub config: Config,

    /// Handle to the user records.
    pub users: Box<dyn UserStore>,
}

impl State {
    /// Creates the state from a loaded config and a user store.
    pub fn new(config: Config, users: impl UserStore + 'static) -> Self {
        Self {
            config,
            users: Box::new(users),
        }
    }
}
