//! Backend Connection
//!
//! Picks the document store for this page: Firebase when the build carries
//! a configuration, the in-memory store (local mode) otherwise.

mod bridge;
mod client;
mod documents;

use std::rc::Rc;
use wishlink_core::{DocumentStore, FirebaseConfig, IdentityProvider, MemoryStore};

pub use client::FirebaseClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    Firebase,
    /// Nothing leaves the page; lists vanish on reload
    Local,
}

pub struct Backend {
    pub store: Rc<dyn DocumentStore>,
    pub identity: Rc<dyn IdentityProvider>,
    pub mode: BackendMode,
}

impl Backend {
    pub fn connect() -> Self {
        let config = match FirebaseConfig::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Firebase is not configured ({}); running in local mode", e);
                return Self::local();
            }
        };

        match FirebaseClient::get_or_init(&config) {
            Ok(client) => Self {
                store: client.clone(),
                identity: client,
                mode: BackendMode::Firebase,
            },
            Err(e) => {
                log::error!("Firebase initialization failed: {}; running in local mode", e);
                Self::local()
            }
        }
    }

    pub fn local() -> Self {
        let store = MemoryStore::new();
        Self {
            store: Rc::new(store.clone()),
            identity: Rc::new(store),
            mode: BackendMode::Local,
        }
    }
}
