//! # Session store
//!
//! The session is the pair (bearer token, user profile). It is persisted to
//! durable client storage under [`TOKEN_KEY`] and [`USER_KEY`] (the user as
//! JSON) and mirrored in memory for rendering.
//!
//! Lifecycle:
//!
//! 1. [`SessionStore::load_from_storage`] runs once when the shell mounts.
//! 2. [`SessionStore::set_auth`] runs after a successful login.
//! 3. [`SessionStore::logout`] runs on explicit logout. On a 401 the HTTP
//!    client removes the keys itself and the shell calls
//!    [`SessionStore::clear_memory`].
//!
//! Writers agree on "last write wins"; there is no locking beyond what the
//! backend does internally.

use crate::models::User;
use crate::storage::{KeyValueStore, SharedStorage};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "akram_token";

/// Storage key holding the user profile as JSON.
pub const USER_KEY: &str = "akram_user";

/// In-memory view of the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// A request is authenticated if and only if a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Read a session from storage. Both keys must be present and the user
    /// must parse; anything else is "no session".
    pub fn read_from(storage: &dyn KeyValueStore) -> Self {
        let (Some(token), Some(user_json)) = (storage.get(TOKEN_KEY), storage.get(USER_KEY)) else {
            return Self::default();
        };
        match serde_json::from_str::<User>(&user_json) {
            Ok(user) => Self {
                token: Some(token),
                user: Some(user),
            },
            Err(_) => Self::default(),
        }
    }
}

/// Session state container backed by a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    storage: SharedStorage,
    session: Session,
}

impl SessionStore {
    /// Create an empty store. Nothing is read until
    /// [`load_from_storage`](Self::load_from_storage) is called.
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            session: Session::default(),
        }
    }

    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Persist a fresh login and make it current.
    pub fn set_auth(&mut self, token: String, user: User) {
        let user_json = serde_json::to_string(&user).unwrap_or_default();
        self.storage.set(TOKEN_KEY, &token);
        self.storage.set(USER_KEY, &user_json);
        self.session = Session {
            token: Some(token),
            user: Some(user),
        };
    }

    /// Remove the persisted session and clear memory.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.session = Session::default();
    }

    /// Hydrate memory from storage. Malformed user JSON is treated as no
    /// session.
    pub fn load_from_storage(&mut self) -> &Session {
        self.session = Session::read_from(self.storage.as_ref());
        &self.session
    }

    /// Drop the in-memory session without touching storage.
    pub fn clear_memory(&mut self) {
        self.session = Session::default();
    }
}
