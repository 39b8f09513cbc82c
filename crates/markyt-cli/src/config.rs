//! CLI configuration.
//!
//! Configuration lives in a small TOML file with a `[client]` table
//! naming the client the CLI acts for and a `[personalize]` table with
//! engine options:
//!
//! ```toml
//! project_name = "markyt"
//!
//! [client]
//! id = "client-1"
//! name = "Acme Demand Gen"
//! subdomain = "go.acme.example"
//! status = "active"
//!
//! [personalize]
//! landing_token = "cpdlanding"
//! ```
//!
//! The file location is resolved from the `--config` flag, then the
//! `MARKYT_CONFIG` environment variable, then the platform config
//! directory. A missing file is not an error; defaults apply.

use std::path::PathBuf;

use markyt_core::{Client, ClientStatus, Error, Result};
use markyt_sequence::SequenceRenderer;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "MARKYT_CONFIG";

/// The `[client]` section: which client the CLI acts for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSection {
    /// Stable client identifier
    pub id: String,

    /// Human-readable client name
    pub name: String,

    /// Subdomain landing URLs are composed on, e.g. `go.acme.example`
    #[serde(default)]
    pub subdomain: Option<String>,

    /// Client lifecycle status
    #[serde(default)]
    pub status: ClientStatus,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default Client".to_string(),
            subdomain: None,
            status: ClientStatus::default(),
        }
    }
}

/// The `[personalize]` section: personalization engine options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalizeSection {
    /// Extra token name treated as an alias of `{landingpage}`
    #[serde(default)]
    pub landing_token: Option<String>,
}

/// Root configuration for the markyt CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkytConfig {
    /// Project name used in generated files and messages
    pub project_name: String,

    /// Active client
    pub client: ClientSection,

    /// Personalization options
    pub personalize: PersonalizeSection,
}

impl Default for MarkytConfig {
    fn default() -> Self {
        Self {
            project_name: "markyt".to_string(),
            client: ClientSection::default(),
            personalize: PersonalizeSection::default(),
        }
    }
}

impl MarkytConfig {
    /// Returns the default config path under the platform config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("markyt").join("config.toml"))
    }

    /// Resolves the config path from an explicit flag, the
    /// [`CONFIG_ENV_VAR`] environment variable, or the platform default,
    /// in that order.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
            && !path.trim().is_empty()
        {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Loads configuration from the resolved path, falling back to
    /// defaults when no file exists there.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| Error::io_with_path(e, &path))?;
                toml::from_str(&raw).map_err(|e| {
                    Error::config(format!("invalid config file {}: {e}", path.display()))
                })
            }
            _ => Ok(Self::default()),
        }
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("cannot serialize config: {e}")))
    }

    /// Builds the [`Client`] record this invocation acts for.
    pub fn client(&self) -> Client {
        let mut client =
            Client::new(&self.client.id, &self.client.name).with_status(self.client.status);
        if let Some(subdomain) = &self.client.subdomain {
            client = client.with_subdomain(subdomain);
        }
        client
    }

    /// Returns the configured landing-token alias, if any.
    pub fn landing_alias(&self) -> Option<&str> {
        self.personalize.landing_token.as_deref()
    }

    /// Builds a [`SequenceRenderer`] honoring the configured alias.
    pub fn renderer(&self) -> SequenceRenderer {
        match self.landing_alias() {
            Some(alias) => SequenceRenderer::new().with_landing_alias(alias),
            None => SequenceRenderer::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let path = MarkytConfig::resolve_config_path(Some("/tmp/markyt.toml"));
        assert_eq!(path, Some(PathBuf::from("/tmp/markyt.toml")));
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let config = MarkytConfig::load(Some(missing.to_str().unwrap())).unwrap();
        assert_eq!(config, MarkytConfig::default());
        assert_eq!(config.client.id, "default");
    }

    #[test]
    fn test_load_reads_client_and_personalize_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[client]
id = "client-9"
name = "Nimbus"
subdomain = "go.nimbus.example"
status = "paused"

[personalize]
landing_token = "cpdlanding"
"#
        )
        .unwrap();

        let config = MarkytConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.client.id, "client-9");
        assert_eq!(config.client.status, ClientStatus::Paused);
        assert_eq!(config.landing_alias(), Some("cpdlanding"));

        // Paused clients resolve no live subdomain.
        assert_eq!(config.client().live_subdomain(), None);
    }

    #[test]
    fn test_load_partial_file_uses_section_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\nid = \"c1\"\nname = \"Acme\"\n").unwrap();

        let config = MarkytConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.project_name, "markyt");
        assert_eq!(config.client.status, ClientStatus::Active);
        assert_eq!(config.landing_alias(), None);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client]\nid = 12\n").unwrap();

        let err = MarkytConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = MarkytConfig::default();
        config.client.subdomain = Some("go.example.com".to_string());
        config.personalize.landing_token = Some("cpdlanding".to_string());

        let rendered = config.to_toml_string().unwrap();
        let parsed: MarkytConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
