//! Durable mirror of the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two string entries survive page reloads: the opaque access token and the
//! JSON-encoded profile. The store itself never validates what it holds; the
//! only interpretation happens in [`CredentialRecord::load`].

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::net::types::Profile;

pub const TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

/// String key/value persistence with get/set/remove semantics.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage rejected removal of {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Process-local store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CredentialStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Token and profile, always persisted and cleared as a pair.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialRecord {
    pub token: String,
    pub user: Profile,
}

impl CredentialRecord {
    /// Read the record back.
    ///
    /// Either entry missing, or a profile that no longer decodes (for example
    /// an unknown role), reads as "logged out".
    pub fn load<S: CredentialStore + ?Sized>(store: &S) -> Option<Self> {
        let token = store.get(TOKEN_KEY)?;
        let raw_user = store.get(USER_KEY)?;
        match serde_json::from_str::<Profile>(&raw_user) {
            Ok(user) => Some(Self { token, user }),
            Err(err) => {
                log::warn!("stored profile ignored: {err}");
                None
            }
        }
    }

    pub fn save<S: CredentialStore + ?Sized>(&self, store: &S) {
        match serde_json::to_string(&self.user) {
            Ok(raw_user) => {
                store.set(TOKEN_KEY, &self.token);
                store.set(USER_KEY, &raw_user);
            }
            Err(err) => log::error!("profile not persisted: {err}"),
        }
    }

    pub fn clear<S: CredentialStore + ?Sized>(store: &S) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }
}
