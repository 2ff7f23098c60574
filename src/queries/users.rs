//! Investor accounts.

use crate::error::{ReitError, Result};
use crate::models::{NewUser, User};
use crate::storage::Storage;

/// Query interface for users.
pub struct UserQuery<'a> {
    storage: &'a dyn Storage,
}

impl<'a> UserQuery<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self, id: i64) -> Result<Option<User>> {
        self.storage.user(id)
    }

    pub fn by_username(&self, username: &str) -> Result<Option<User>> {
        self.storage.user_by_username(username)
    }

    pub fn by_email(&self, email: &str) -> Result<Option<User>> {
        self.storage.user_by_email(email)
    }

    /// Register a user. Usernames and emails must be unique.
    pub fn create(&self, user: NewUser) -> Result<User> {
        user.validate()?;
        if self.by_username(&user.username)?.is_some() {
            return Err(ReitError::InvalidArgument(format!(
                "username '{}' is already taken",
                user.username
            )));
        }
        if self.by_email(&user.email)?.is_some() {
            return Err(ReitError::InvalidArgument(format!(
                "email '{}' is already registered",
                user.email
            )));
        }
        self.storage.create_user(user)
    }
}
