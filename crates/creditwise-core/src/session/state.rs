//! Application state owned by the composition root, and the persistence
//! seam it saves through. The core never touches storage itself; shells
//! inject a [`SessionStore`] implementation.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::types::{UserProfile, UserStats};
use crate::CreditWiseResult;

/// The canonical profile + stats pair. All session transitions consume a
/// reference and return a new value; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub profile: UserProfile,
    pub stats: UserStats,
}

/// Load/save seam for session persistence.
pub trait SessionStore {
    fn load(&self) -> CreditWiseResult<Option<SessionState>>;
    fn save(&self, state: &SessionState) -> CreditWiseResult<()>;
}

/// In-memory store for tests and ephemeral shells.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<SessionState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> CreditWiseResult<Option<SessionState>> {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, state: &SessionState) -> CreditWiseResult<()> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(state.clone());
        Ok(())
    }
}
