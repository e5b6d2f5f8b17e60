//! Configuration for git-rebase-chain.
//!
//! Supports layered configuration from multiple sources (highest priority first):
//! 1. Local override: `<git-dir>/rebase-chain/config.toml` (per-repo, per-user)
//! 2. User global: `~/.config/git-rebase-chain/config.toml` (personal defaults)
//!
//! Configuration uses TOML format for readability. Command-line flags always
//! win over anything configured here.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default remote name for a bare `--push`
fn default_remote() -> String {
    "origin".to_string()
}

/// Push settings of a single config file; unset keys fall through
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushLayer {
    pub remote: Option<String>,
    pub force: Option<bool>,
}

/// Contents of a single config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub push: PushLayer,
}

/// Effective push settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushConfig {
    /// Remote used when `--push` is given without a value (default: "origin")
    pub remote: String,
    /// Push local-only branches too, as if `--force` was given (default: false)
    pub force: bool,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            force: false,
        }
    }
}

/// Merged configuration from all layers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub push: PushConfig,
}

impl Config {
    /// Load configuration for the repository at `git_dir`, merging with
    /// priority: local > user > defaults
    pub fn load(git_dir: &Path) -> Result<Self> {
        let user = Self::user_config_path().ok();
        Self::load_from(user.as_deref(), &Self::local_config_path(git_dir))
    }

    /// Load and merge the given user and local config files
    pub fn load_from(user: Option<&Path>, local: &Path) -> Result<Self> {
        let user_layer = match user {
            Some(path) => Self::load_toml_file(path)?,
            None => ConfigLayer::default(),
        };
        let local_layer = Self::load_toml_file(local)?;

        Ok(Self::merge(&[user_layer, local_layer]))
    }

    /// Apply layers in order over the defaults; later layers win
    fn merge(layers: &[ConfigLayer]) -> Self {
        let mut config = Config::default();
        for layer in layers {
            if let Some(remote) = &layer.push.remote {
                config.push.remote = remote.clone();
            }
            if let Some(force) = layer.push.force {
                config.push.force = force;
            }
        }
        config
    }

    /// Load and parse a TOML config file
    fn load_toml_file<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Config file {:?} is invalid ({}), using defaults", path, e);
                Ok(T::default())
            }
        }
    }

    /// Get path to user config: ~/.config/git-rebase-chain/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine user config directory")?;
        Ok(config_dir.join("git-rebase-chain").join("config.toml"))
    }

    /// Get path to local config: <git-dir>/rebase-chain/config.toml
    pub fn local_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("rebase-chain").join("config.toml")
    }

    /// Resolve the remote to push to from the `--push` flag.
    ///
    /// `None` means no push; an empty value is a bare `--push` and falls back
    /// to the configured remote.
    pub fn push_remote(&self, requested: Option<&str>) -> Option<String> {
        match requested {
            None => None,
            Some("") => Some(self.push.remote.clone()),
            Some(remote) => Some(remote.to_string()),
        }
    }
}
