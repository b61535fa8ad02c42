//! Configuration management for workrest

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::Credentials;
use crate::client::http::DEFAULT_TIMEOUT;
use crate::error::{ConfigError, Result};

/// How the configured token is presented to the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// Personal access token (Basic auth)
    #[default]
    Pat,
    /// Bearer token
    Bearer,
}

impl AuthScheme {
    fn is_default(&self) -> bool {
        *self == AuthScheme::default()
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Organization or collection URL, e.g. `https://dev.azure.com/fabrikam`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Personal access token or bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "AuthScheme::is_default")]
    pub auth: AuthScheme,

    /// Default project name or ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Default team name or ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// API version sent instead of the pinned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".workrest").join("config.yaml"))
    }

    /// Resolve an explicit path, falling back to the default location.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Like [`Config::load_at`], but a missing file yields an empty config.
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location.
    pub fn save_at(&self, path: Option<&str>) -> Result<PathBuf> {
        let path = Self::resolve_path(path)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file holds a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Service URL, or an error telling the user how to set it.
    pub fn require_url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingUrl.into())
    }

    /// Credentials built from the token and auth scheme.
    pub fn credentials(&self) -> Result<Credentials> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?
            .to_string();

        Ok(match self.auth {
            AuthScheme::Pat => Credentials::Pat(token),
            AuthScheme::Bearer => Credentials::Bearer(token),
        })
    }

    /// Request timeout; unset or `0` means the default.
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Copy of this config with the token masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if let Some(token) = &config.token {
            let len = token.chars().count();
            // Tokens of 8 chars or fewer are masked whole.
            config.token = if len <= 8 {
                Some("********".to_string())
            } else {
                let tail: String = token.chars().skip(len - 4).collect();
                Some(format!("****{}", tail))
            };
        }
        config
    }
}
