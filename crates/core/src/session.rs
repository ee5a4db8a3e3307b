//! In-memory conversation history, keyed by an opaque session id.
//!
//! Histories are bounded to the most recent [`MAX_TURNS`] turns so prompt
//! size stays bounded. Sessions are never destroyed; the map grows for the
//! process lifetime (accepted limitation).

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Retention bound applied to every session history.
pub const MAX_TURNS: usize = 10;

/// Session id used when the caller supplies none.
pub const DEFAULT_SESSION_ID: &str = "default";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One role-tagged message in a session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, text: text.into() }
    }
}

/// Maps session ids to bounded, ordered histories. Sessions are created
/// lazily on first append and are independent of each other.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Vec<Turn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn, evicting from the front once the history exceeds
    /// [`MAX_TURNS`].
    pub fn append(&self, session_id: &str, turn: Turn) {
        let mut sessions = self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(turn);
        if history.len() > MAX_TURNS {
            let excess = history.len() - MAX_TURNS;
            history.drain(..excess);
        }
    }

    /// Returns the ordered history for a session, or empty when unknown.
    pub fn get(&self, session_id: &str) -> Vec<Turn> {
        let sessions = self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        sessions.get(session_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, SessionStore, Turn, MAX_TURNS};

    #[test]
    fn unknown_session_yields_empty_history() {
        let store = SessionStore::new();
        assert!(store.get("missing").is_empty());
    }

    #[test]
    fn appends_preserve_order_and_roles() {
        let store = SessionStore::new();
        store.append("s1", Turn::user("Olá"));
        store.append("s1", Turn::assistant("Olá! Como posso ajudar?"));

        let history = store.get("s1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[1].role, Role::Assistant);
    }

    #[test]
    fn history_is_capped_at_most_recent_turns() {
        let store = SessionStore::new();
        for index in 0..15 {
            store.append("s1", Turn::user(format!("mensagem {index}")));
        }

        let history = store.get("s1");
        assert_eq!(history.len(), MAX_TURNS);
        assert_eq!(history[0].text, "mensagem 5");
        assert_eq!(history.last().map(|turn| turn.text.as_str()), Some("mensagem 14"));
    }

    #[test]
    fn sessions_are_independent() {
        let store = SessionStore::new();
        store.append("a", Turn::user("primeira"));
        store.append("b", Turn::user("segunda"));

        assert_eq!(store.get("a").len(), 1);
        assert_eq!(store.get("b").len(), 1);
        assert_eq!(store.get("a")[0].text, "primeira");
    }
}
