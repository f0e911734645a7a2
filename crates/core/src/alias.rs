//! Alias management
//!
//! An alias is a named set of OSS credentials plus the endpoint they
//! belong to. Credentials are opaque immutable strings; nothing in oc
//! interprets them beyond handing the secret to the signer.

use serde::{Deserialize, Serialize};

use crate::config::ConfigManager;
use crate::error::{Error, Result};

/// A named OSS endpoint with its credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alias {
    /// Unique name for this alias
    pub name: String,

    /// OSS endpoint host, e.g. oss-cn-hangzhou.aliyuncs.com
    pub endpoint: String,

    /// Access key identifier
    pub access_key_id: String,

    /// Access key secret
    pub access_key_secret: String,

    /// Service region
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "cn-hangzhou".to_string()
}

impl Alias {
    /// Create a new alias with the default region
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            access_key_id: access_key_id.into(),
            access_key_secret: access_key_secret.into(),
            region: default_region(),
        }
    }
}

/// Manager for alias operations backed by the config file
pub struct AliasManager {
    config_manager: ConfigManager,
}

impl AliasManager {
    /// Create an AliasManager using the default config location
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_manager: ConfigManager::new()?,
        })
    }

    /// Create an AliasManager around a specific ConfigManager
    pub fn with_config_manager(config_manager: ConfigManager) -> Self {
        Self { config_manager }
    }

    /// List all configured aliases
    pub fn list(&self) -> Result<Vec<Alias>> {
        Ok(self.config_manager.load()?.aliases)
    }

    /// Get an alias by name
    pub fn get(&self, name: &str) -> Result<Alias> {
        self.config_manager
            .load()?
            .aliases
            .into_iter()
            .find(|a| a.name == name)
            .ok_or_else(|| Error::AliasNotFound(name.to_string()))
    }

    /// Add or replace an alias
    pub fn set(&self, alias: Alias) -> Result<()> {
        let mut config = self.config_manager.load()?;
        config.aliases.retain(|a| a.name != alias.name);
        config.aliases.push(alias);
        self.config_manager.save(&config)
    }

    /// Remove an alias by name
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut config = self.config_manager.load()?;
        let before = config.aliases.len();
        config.aliases.retain(|a| a.name != name);
        if config.aliases.len() == before {
            return Err(Error::AliasNotFound(name.to_string()));
        }
        self.config_manager.save(&config)
    }
}
