//! Client (tenant) records.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a client account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ClientStatus {
    /// Client is live; its landing pages are served.
    #[default]
    Active,

    /// Client is temporarily on hold.
    Paused,

    /// Client has been retired.
    Archived,
}

impl ClientStatus {
    /// Returns `true` if the client is live.
    pub fn is_active(&self) -> bool {
        matches!(self, ClientStatus::Active)
    }
}

impl std::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientStatus::Active => write!(f, "active"),
            ClientStatus::Paused => write!(f, "paused"),
            ClientStatus::Archived => write!(f, "archived"),
        }
    }
}

/// A client account that owns leads and landing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Stable identifier for the client.
    pub id: String,

    /// Human-readable client name.
    pub name: String,

    /// Subdomain the client's landing pages are served from.
    #[serde(default)]
    pub subdomain: Option<String>,

    /// Lifecycle status.
    #[serde(default)]
    pub status: ClientStatus,
}

impl Client {
    /// Creates an active client without a subdomain.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subdomain: None,
            status: ClientStatus::Active,
        }
    }

    /// Sets the landing-page subdomain.
    pub fn with_subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: ClientStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the subdomain landing URLs may be built on.
    ///
    /// `None` when the client has no subdomain, the subdomain is blank,
    /// or the client is not active. Callers use this as the single gate
    /// for whether a landing URL exists at all.
    pub fn live_subdomain(&self) -> Option<&str> {
        if !self.status.is_active() {
            return None;
        }
        self.subdomain
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
