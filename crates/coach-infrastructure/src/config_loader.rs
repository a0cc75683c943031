//! Loads [`CoachConfig`] from `config.toml` and the environment.
//!
//! Precedence, highest first:
//! 1. Environment variables (`COACH_LATENCY_MS`, `COACH_TIER`, `COACH_API_URL`)
//! 2. `~/.config/coach/config.toml`
//! 3. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use coach_core::config::{AgentConfig, CoachConfig};
use coach_core::credit::Tier;
use coach_core::error::{CoachError, Result};

use crate::paths::CoachPaths;

pub const ENV_LATENCY_MS: &str = "COACH_LATENCY_MS";
pub const ENV_TIER: &str = "COACH_TIER";
pub const ENV_API_URL: &str = "COACH_API_URL";

pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for the given config file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a loader for the default config file location.
    pub fn default_location() -> Result<Self> {
        let path = CoachPaths::config_file().map_err(|e| CoachError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file only.
    ///
    /// A missing or blank file yields the defaults.
    pub fn load_file(&self) -> Result<CoachConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "config file not found, using defaults");
            return Ok(CoachConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(CoachConfig::default());
        }

        let config: CoachConfig = toml::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), "loaded config file");
        Ok(config)
    }

    /// Reads the config file and applies process environment overrides.
    pub fn load(&self) -> Result<CoachConfig> {
        let config = self.load_file()?;
        apply_overrides(config, |key| std::env::var(key).ok())
    }
}

/// Applies environment overrides read through `lookup`.
///
/// Blank values are ignored. A malformed value is a configuration error
/// rather than silently falling back.
pub fn apply_overrides<F>(mut config: CoachConfig, lookup: F) -> Result<CoachConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(raw) = read(ENV_LATENCY_MS) {
        config.latency_ms = raw.trim().parse().map_err(|_| {
            CoachError::config(format!("{ENV_LATENCY_MS} must be a whole number, got '{raw}'"))
        })?;
    }

    if let Some(raw) = read(ENV_TIER) {
        config.tier = raw.parse::<Tier>()?;
    }

    if let Some(base_url) = read(ENV_API_URL) {
        config.agent = AgentConfig::Http {
            base_url: base_url.trim().to_string(),
        };
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(dir.path().join("config.toml"));
        assert_eq!(loader.load_file().unwrap(), CoachConfig::default());
    }

    #[test]
    fn test_blank_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "\n  \n").unwrap();
        assert_eq!(
            ConfigLoader::new(path).load_file().unwrap(),
            CoachConfig::default()
        );
    }

    #[test]
    fn test_file_values_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "latency_ms = 250\ntier = \"builder\"\ngreeting = false\n").unwrap();

        let config = ConfigLoader::new(path).load_file().unwrap();
        assert_eq!(config.latency_ms, 250);
        assert_eq!(config.tier, Tier::Builder);
        assert!(!config.greeting);
        assert_eq!(config.agent, AgentConfig::Simulated);
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "latency_ms = \"soon\"").unwrap();

        let err = ConfigLoader::new(path).load_file().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let config = apply_overrides(
            CoachConfig::default(),
            env(&[
                (ENV_LATENCY_MS, "20"),
                (ENV_TIER, "ceo"),
                (ENV_API_URL, " http://localhost:8000/api/v1 "),
            ]),
        )
        .unwrap();

        assert_eq!(config.latency_ms, 20);
        assert_eq!(config.tier, Tier::Ceo);
        assert_eq!(
            config.agent,
            AgentConfig::Http {
                base_url: "http://localhost:8000/api/v1".into()
            }
        );
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config =
            apply_overrides(CoachConfig::default(), env(&[(ENV_TIER, "  ")])).unwrap();
        assert_eq!(config, CoachConfig::default());
    }

    #[test]
    fn test_bad_latency_override_is_config_error() {
        let err = apply_overrides(CoachConfig::default(), env(&[(ENV_LATENCY_MS, "fast")]))
            .unwrap_err();
        assert!(err.is_config());
    }
}
