use std::fs;
use std::io;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::constants::{AUTH_TOKEN_KEY, TUTORIAL_COMPLETED_KEY};

/// String-keyed persistent client storage, one JSON file on disk. Holds the
/// session token and the one-time tutorial flag; neither ever expires.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    pub fn token(&self) -> Option<String> {
        self.read()
            .get(AUTH_TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub fn set_token(&self, token: &str) -> io::Result<()> {
        let mut state = self.read();
        state.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write(&state)
    }

    pub fn clear_token(&self) -> io::Result<()> {
        let mut state = self.read();
        state.remove(AUTH_TOKEN_KEY);
        self.write(&state)
    }

    /// Purely "a token is present": the token is never re-validated against
    /// the server.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn tutorial_completed(&self) -> bool {
        self.read()
            .get(TUTORIAL_COMPLETED_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn complete_tutorial(&self) -> io::Result<()> {
        let mut state = self.read();
        state.insert(TUTORIAL_COMPLETED_KEY.to_string(), Value::Bool(true));
        self.write(&state)
    }

    /// A missing or corrupt file reads as empty storage.
    fn read(&self) -> Map<String, Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write(&self, state: &Map<String, Value>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SessionStore {
        let path = std::env::temp_dir()
            .join(format!("tt-session-{}-{}", std::process::id(), name))
            .join("session.json");
        let _ = fs::remove_file(&path);
        SessionStore::new(path)
    }

    #[test]
    fn token_round_trips_through_the_file() {
        let store = temp_store("token");
        assert!(!store.is_authenticated());

        store.set_token("simulated-jwt-token-2026").unwrap();
        assert_eq!(store.token().as_deref(), Some("simulated-jwt-token-2026"));
        assert!(store.is_authenticated());

        store.clear_token().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn logout_keeps_the_tutorial_flag() {
        let store = temp_store("tutorial");
        store.complete_tutorial().unwrap();
        store.set_token("t").unwrap();
        store.clear_token().unwrap();
        assert!(store.tutorial_completed());
    }

    #[test]
    fn corrupt_state_file_reads_as_empty() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.path.parent().unwrap()).unwrap();
        fs::write(&store.path, "{not json").unwrap();
        assert!(store.token().is_none());
        assert!(!store.tutorial_completed());
    }
}
