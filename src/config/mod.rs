//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};
use crate::generator::UnitScope;
use crate::network;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".mantleforge.json";

fn default_network() -> String {
    "sepolia".to_string()
}

/// @acp:summary "Main MantleForge configuration structure"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Parameter extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Template loading settings
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Mantle network shown to users by default
    #[serde(default = "default_network")]
    pub network: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            extraction: ExtractionConfig::default(),
            templates: TemplatesConfig::default(),
            network: default_network(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config from a file, or defaults if the file does not exist"
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values that would only fail later
    pub fn validate(&self) -> Result<()> {
        if network::lookup(&self.network).is_none() {
            return Err(ForgeError::InvalidConfig(format!(
                "unknown network '{}' (expected one of: {})",
                self.network,
                network::names().join(", ")
            )));
        }
        if self.server.port == 0 {
            return Err(ForgeError::InvalidConfig("server port must be non-zero".to_string()));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served at `/` alongside the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionConfig {
    /// Where magnitude words ("million", "k") are looked for around a supply
    #[serde(default)]
    pub unit_scope: UnitScope,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesConfig {
    /// Directory of `<archetype>.sol` files overriding the built-in templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.extraction.unit_scope, UnitScope::Adjacent);
        assert_eq!(config.network, "sepolia");
    }

    #[test]
    fn test_partial_config() {
        let config: Config = serde_json::from_str(
            r#"{"server": {"port": 8080}, "extraction": {"unitScope": "prompt"}}"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.extraction.unit_scope, UnitScope::Prompt);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.templates.override_dir = Some(PathBuf::from("contracts/templates"));
        config.network = "mainnet".to_string();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_unknown_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"network": "goerli"}"#).unwrap();

        assert!(matches!(Config::load(&path), Err(ForgeError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        std::fs::write(&path, r#"{"server": {"port": 0}}"#).unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }
}
