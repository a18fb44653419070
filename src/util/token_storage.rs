//! Token persistence across page reloads.
//!
//! The session store writes here on every token acquisition and clears on
//! logout, so a reload can silently resume the session. This is at-rest
//! storage of bearer credentials: nothing else may share the key.

use serde::{Deserialize, Serialize};

use crate::util::storage;

const STORAGE_KEY: &str = "investai_session";

/// Persisted token pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Persist the current token pair.
pub fn save(access_token: &str, refresh_token: &str) {
    let tokens = StoredTokens {
        access_token: access_token.to_owned(),
        refresh_token: refresh_token.to_owned(),
    };
    if let Ok(raw) = serde_json::to_string(&tokens) {
        storage::write(STORAGE_KEY, &raw);
    }
}

/// Load the persisted token pair, if any.
pub fn load() -> Option<StoredTokens> {
    let raw = storage::read(STORAGE_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Drop the persisted token pair.
pub fn clear() {
    storage::remove(STORAGE_KEY);
}
