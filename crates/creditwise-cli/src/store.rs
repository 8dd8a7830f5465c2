//! File-backed session persistence for the stateful commands.

use std::fs;
use std::path::PathBuf;

use creditwise_core::session::{SessionState, SessionStore};
use creditwise_core::{CreditWiseError, CreditWiseResult};

/// Stores the session as pretty-printed JSON at a fixed path. Absent file
/// means no session yet.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> CreditWiseResult<Option<SessionState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            CreditWiseError::StorageError(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))
        })?;
        let state = serde_json::from_str(&contents)?;
        Ok(Some(state))
    }

    fn save(&self, state: &SessionState) -> CreditWiseResult<()> {
        let contents = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, contents).map_err(|e| {
            CreditWiseError::StorageError(format!(
                "Failed to write {}: {e}",
                self.path.display()
            ))
        })
    }
}
