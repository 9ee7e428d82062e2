use std::cell::RefCell;

use super::{NewUser, User, UserStore, UserStoreError};

/// In-process [`UserStore`] that keeps users in insertion order.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RefCell<Vec<User>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with users named `names`.
    pub fn with_users<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let users = names
            .into_iter()
            .map(|name| User::from(NewUser::new(name)))
            .collect();

        Self {
            users: RefCell::new(users),
        }
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.borrow().len()
    }

    /// Returns `true` if no users are stored.
    pub fn is_empty(&self) -> bool {
        self.users.borrow().is_empty()
    }
}

impl UserStore for MemoryUserStore {
    fn find_by_name(&self, name: &str) -> Result<User, UserStoreError> {
        self.users
            .borrow()
            .iter()
            .find(|user| user.name == name)
            .cloned()
            .ok_or_else(|| UserStoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn create(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.borrow_mut();

        if users.iter().any(|existing| existing.name == user.name) {
            return Err(UserStoreError::Conflict { name: user.name });
        }

        let stored = User::from(user);
        users.push(stored.clone());

        Ok(stored)
    }

    fn delete_all(&self) -> Result<u64, UserStoreError> {
        let removed = self.users.borrow_mut().drain(..).count();
        Ok(removed as u64)
    }

    fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.users.borrow().clone())
    }
}
