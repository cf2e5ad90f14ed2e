//! Admin session persistence behind an injectable store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page reads the token once at mount to skip the form and writes token +
//! user once after a successful login. The browser store maps onto
//! `window.sessionStorage` and is inert outside the browser; tests use the
//! in-memory store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;

use crate::config::LoginConfig;
use crate::error::LoginError;
use crate::net::types::LoginResponse;

/// An authenticated admin session as persisted after login.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: serde_json::Value,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.token, user: resp.user }
    }
}

/// Read/write access to the tab-scoped session.
pub trait SessionStore {
    /// Stored token, or `None` when absent or empty.
    fn read_token(&self) -> Option<String>;

    /// Persist token (raw) and user (JSON) together.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Storage` if the backend refuses the write.
    fn write_session(&self, session: &Session) -> Result<(), LoginError>;
}

/// Storage key pair shared by both stores.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct SessionKeys {
    token: String,
    user: String,
}

impl SessionKeys {
    fn from_config(config: &LoginConfig) -> Self {
        Self { token: config.token_key.clone(), user: config.user_key.clone() }
    }
}

fn encode_user(user: &serde_json::Value) -> Result<String, LoginError> {
    serde_json::to_string(user).map_err(|e| LoginError::Storage(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn non_empty(token: String) -> Option<String> {
    if token.is_empty() { None } else { Some(token) }
}

/// `SessionStore` over `window.sessionStorage`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserSessionStore {
    keys: SessionKeys,
}

impl BrowserSessionStore {
    pub fn new(config: &LoginConfig) -> Self {
        Self { keys: SessionKeys::from_config(config) }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

impl SessionStore for BrowserSessionStore {
    fn read_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = Self::storage()?.get_item(&self.keys.token).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write_session(&self, session: &Session) -> Result<(), LoginError> {
        let user = encode_user(&session.user)?;
        #[cfg(feature = "hydrate")]
        {
            let storage =
                Self::storage().ok_or_else(|| LoginError::Storage("sessionStorage unavailable".to_owned()))?;
            storage
                .set_item(&self.keys.token, &session.token)
                .map_err(|e| LoginError::Storage(format!("{e:?}")))?;
            storage
                .set_item(&self.keys.user, &user)
                .map_err(|e| LoginError::Storage(format!("{e:?}")))?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(LoginError::Storage("sessionStorage unavailable".to_owned()))
        }
    }
}

/// In-memory `SessionStore`; clones share the same entries.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MemorySessionStore {
    keys: SessionKeys,
    entries: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn new(config: &LoginConfig) -> Self {
        Self { keys: SessionKeys::from_config(config), entries: Rc::default() }
    }

    /// Store pre-seeded with a token, as if a previous login happened in this tab.
    pub fn with_token(config: &LoginConfig, token: &str) -> Self {
        let store = Self::new(config);
        store.entries.borrow_mut().insert(store.keys.token.clone(), token.to_owned());
        store
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn read_token(&self) -> Option<String> {
        self.get(&self.keys.token).and_then(non_empty)
    }

    fn write_session(&self, session: &Session) -> Result<(), LoginError> {
        let user = encode_user(&session.user)?;
        let mut entries = self.entries.borrow_mut();
        entries.insert(self.keys.token.clone(), session.token.clone());
        entries.insert(self.keys.user.clone(), user);
        Ok(())
    }
}
