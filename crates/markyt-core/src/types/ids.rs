//! Unique identifier types for leads and sequences.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a lead.
///
/// Lead IDs come from external CRM exports, which emit them either as
/// JSON numbers or as strings. Internally they are always strings so
/// that slug derivation and display never have to care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LeadId(String);

impl LeadId {
    /// Creates a new lead ID from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use markyt_core::LeadId;
    ///
    /// let id = LeadId::new("42");
    /// assert_eq!(id.as_str(), "42");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the lead ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for LeadId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for LeadId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for LeadId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Accept both `"id": 42` and `"id": "42"` from upstream exports.
impl<'de> Deserialize<'de> for LeadId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Uint(u64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Int(n) => Self(n.to_string()),
            Repr::Uint(n) => Self(n.to_string()),
            Repr::Text(s) => Self(s),
        })
    }
}

/// Unique identifier for a message sequence.
///
/// Internally represented as a UUID v4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceId(Uuid);

impl SequenceId {
    /// Creates a new random sequence ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use markyt_core::SequenceId;
    ///
    /// let id = SequenceId::new();
    /// println!("Sequence ID: {}", id);
    /// ```
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a sequence ID from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Converts to the inner UUID.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for SequenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SequenceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SequenceId> for Uuid {
    fn from(id: SequenceId) -> Self {
        id.0
    }
}

impl std::str::FromStr for SequenceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
