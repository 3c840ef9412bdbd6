use serde::{Deserialize, Serialize};

/// Maximum accepted length of a client-chosen session identifier.
pub const SESSION_ID_MAX_LEN: usize = 128;

/// Identifies one client session.
/// Scopes the scan history and the scan state machine; it is not a credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Validates a raw identifier coming from a client.
    ///
    /// Surrounding whitespace is ignored; blank or oversized ids are rejected.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("session.id_empty".to_string());
        }
        if trimmed.chars().count() > SESSION_ID_MAX_LEN {
            return Err("session.id_too_long".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
