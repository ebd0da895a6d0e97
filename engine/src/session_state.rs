//! Session state persisted between runs.
//!
//! Captures the subset of engine state that survives a restart: the memory
//! register, the calculation history, and the keypad mode. The in-flight
//! entry state (display, pending operation, fresh-operand flag) is
//! intentionally excluded; an in-progress calculation does not survive a
//! restart.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tally_types::{CalcHistory, CalcMode};
use tally_utils::{atomic_write, recover_bak_file};

/// Session state container for persistence.
///
/// Persisted as pretty-printed JSON to `session.json` in the data
/// directory.
///
/// # Version Compatibility
///
/// The `version` field enables forward compatibility. If a newer version of
/// Tally writes session state with a different version number, this version
/// ignores the persisted state and starts fresh.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub memory: f64,
    pub history: CalcHistory,
    pub mode: CalcMode,
    /// Schema version for forward compatibility.
    pub version: u32,
}

impl SessionState {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Filename for the session state file.
    pub const FILENAME: &'static str = "session.json";

    #[must_use]
    pub fn new(memory: f64, history: CalcHistory, mode: CalcMode) -> Self {
        Self {
            memory,
            history,
            mode,
            version: Self::CURRENT_VERSION,
        }
    }

    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }

    /// Load the session file if one exists.
    ///
    /// Returns `Ok(None)` when the file is missing or carries an
    /// incompatible schema version; both cases start a fresh session.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        recover_bak_file(path);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        let state: Self = serde_json::from_str(&raw)?;
        if !state.is_compatible() {
            tracing::warn!(
                version = state.version,
                "Ignoring session state with incompatible schema version"
            );
            return Ok(None);
        }
        Ok(Some(state))
    }

    /// Persist atomically; the previous session file is never left partial.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        atomic_write(path, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use tally_types::{CalcHistory, CalcMode};

    use super::SessionState;

    #[test]
    fn new_has_current_version() {
        let state = SessionState::new(0.0, CalcHistory::default(), CalcMode::Standard);
        assert_eq!(state.version, SessionState::CURRENT_VERSION);
        assert!(state.is_compatible());
    }

    #[test]
    fn default_is_not_compatible() {
        // Default is version 0, which predates the first persisted schema.
        assert!(!SessionState::default().is_compatible());
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SessionState::FILENAME);
        assert!(SessionState::load(&path).expect("load").is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SessionState::FILENAME);

        let mut history = CalcHistory::default();
        history.record("5 + 3".to_owned(), "8".to_owned(), SystemTime::UNIX_EPOCH);
        let state = SessionState::new(42.5, history, CalcMode::Scientific);

        state.save(&path).expect("save");
        let restored = SessionState::load(&path).expect("load").expect("some");

        assert_eq!(restored.memory, 42.5);
        assert_eq!(restored.mode, CalcMode::Scientific);
        assert_eq!(restored.history.len(), 1);
        assert_eq!(restored.history.entries()[0].result(), "8");
    }

    #[test]
    fn incompatible_version_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SessionState::FILENAME);

        let state = SessionState {
            version: SessionState::CURRENT_VERSION + 1,
            ..SessionState::default()
        };
        state.save(&path).expect("save");

        assert!(SessionState::load(&path).expect("load").is_none());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(SessionState::FILENAME);

        SessionState::new(0.0, CalcHistory::default(), CalcMode::Standard)
            .save(&path)
            .expect("save");

        assert!(path.exists());
    }
}
