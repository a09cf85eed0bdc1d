use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_BASE: &str = "TRUSTSTACK_API_BASE";
pub const ENV_USER: &str = "TRUSTSTACK_USER";
pub const ENV_TIMEOUT_SECS: &str = "TRUSTSTACK_TIMEOUT_SECS";
pub const ENV_CONFIG: &str = "TRUSTSTACK_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Origin of the compliance API, without a trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Actor name sent as `x-user`; the server records it in the audit log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Values supplied on the command line; each one wins over every other source.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub user: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConsoleConfig {
    pub fn with_base(api_base: impl Into<String>) -> Self {
        let mut cfg = Self {
            api_base: api_base.into(),
            ..Self::default()
        };
        cfg.normalize();
        cfg
    }

    pub fn read_file(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let mut cfg: ConsoleConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        cfg.normalize();
        Ok(cfg)
    }

    /// Resolves the effective configuration: flags, then environment, then file, then defaults.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let env_file = std::env::var(ENV_CONFIG).ok().filter(|s| !s.trim().is_empty());
        let mut cfg = match (file, env_file) {
            (Some(path), _) => Self::read_file(path)?,
            (None, Some(path)) => Self::read_file(Path::new(&path))?,
            (None, None) => Self::default(),
        };

        cfg.apply_env(|key| std::env::var(key).ok())?;

        if let Some(base) = overrides.api_base {
            cfg.api_base = base;
        }
        if let Some(user) = overrides.user {
            cfg.user = Some(user);
        }
        if let Some(secs) = overrides.timeout_secs {
            cfg.timeout_secs = secs;
        }

        cfg.normalize();
        Ok(cfg)
    }

    pub(crate) fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(base) = lookup(ENV_API_BASE).filter(|s| !s.trim().is_empty()) {
            self.api_base = base;
        }
        if let Some(user) = lookup(ENV_USER).filter(|s| !s.trim().is_empty()) {
            self.user = Some(user);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).filter(|s| !s.trim().is_empty()) {
            self.timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("parse {}={:?}", ENV_TIMEOUT_SECS, secs))?;
        }
        Ok(())
    }

    fn normalize(&mut self) {
        let trimmed = self.api_base.trim().trim_end_matches('/');
        self.api_base = if trimmed.is_empty() {
            default_api_base()
        } else {
            trimmed.to_string()
        };
        if let Some(user) = &self.user {
            let user = user.trim();
            self.user = (!user.is_empty()).then(|| user.to_string());
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
