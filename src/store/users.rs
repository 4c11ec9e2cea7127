//! In-memory user table for the admin-actions demo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DemoError, Result};

/// A row in the pretend users table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Flatten the row into a single document text for indexing.
    ///
    /// Field values must stay whitespace-separated from the labels: the
    /// retriever's tokenizer gives no credit to punctuation-glued tokens.
    pub fn as_document_text(&self) -> String {
        format!(
            "username: {} | email: {} | created: {}",
            self.username,
            self.email,
            self.created_at.to_rfc2822()
        )
    }
}

/// Insertion-ordered user store with auto-incremented ids and unique
/// usernames. Single-session, single-thread use only.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u32,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with the demo sample accounts
    pub fn seed() -> Self {
        let mut store = Self::new();
        // Cannot collide in an empty store
        let _ = store.insert("alice", "alice@example.com");
        let _ = store.insert("bob", "bob@example.com");
        store
    }

    /// Insert a user, assigning the next id. Usernames are unique.
    pub fn insert(&mut self, username: &str, email: &str) -> Result<u32> {
        if username.trim().is_empty() {
            return Err(DemoError::InvalidArgument(
                "username must not be blank".to_string(),
            ));
        }

        if self.users.iter().any(|u| u.username == username) {
            return Err(DemoError::DuplicateUser {
                username: username.to_string(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;

        self.users.push(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            is_admin: false,
            created_at: Utc::now(),
        });

        Ok(id)
    }

    /// All users in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by username
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Flip the admin flag for one user. The typed stand-in for the
    /// parameterized `UPDATE users SET is_admin = ? WHERE username = ?`.
    pub fn grant_admin(&mut self, username: &str) -> Result<()> {
        match self.users.iter_mut().find(|u| u.username == username) {
            Some(user) => {
                user.is_admin = true;
                Ok(())
            }
            None => Err(DemoError::UnknownUser {
                username: username.to_string(),
            }),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
