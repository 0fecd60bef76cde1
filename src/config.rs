//! Assistant configuration
//!
//! Optional `assistant.toml` in the project root. Every section and field
//! has a default, so a missing file behaves like the stock boilerplate.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::dialect;
use crate::paths;
use crate::readiness;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub readiness: ReadinessSection,
    #[serde(default)]
    pub compose: ComposeSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantSection {
    /// Abort when an external command exits non-zero
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessSection {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_max_attempts() -> u32 {
    readiness::DEFAULT_MAX_ATTEMPTS
}
fn default_interval_secs() -> u64 {
    readiness::DEFAULT_INTERVAL.as_secs()
}

impl Default for ReadinessSection {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl ReadinessSection {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeSection {
    /// Env file declaring the compose command, relative to the project root
    #[serde(default = "default_env_file")]
    pub env_file: String,
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_env_file() -> String {
    paths::ENV_EXAMPLE_FILE.to_string()
}
fn default_key() -> String {
    dialect::DEFAULT_KEY.to_string()
}

impl Default for ComposeSection {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            key: default_key(),
        }
    }
}

impl AssistantConfig {
    /// Load from `path`, falling back to defaults when it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        let config = AssistantConfig::load(&temp.path().join("assistant.toml"))?;

        assert!(!config.assistant.strict);
        assert_eq!(config.readiness.max_attempts, 10);
        assert_eq!(config.readiness.interval(), Duration::from_secs(1));
        assert_eq!(config.compose.env_file, ".env.example");
        assert_eq!(config.compose.key, "DOCKER_COMPOSE_CMD");
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("assistant.toml");
        fs::write(
            &path,
            "[assistant]\nstrict = true\n\n[readiness]\nmax_attempts = 30\n",
        )?;

        let config = AssistantConfig::load(&path)?;

        assert!(config.assistant.strict);
        assert_eq!(config.readiness.max_attempts, 30);
        assert_eq!(config.readiness.interval_secs, 1);
        assert_eq!(config.compose, ComposeSection::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_names_path() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("assistant.toml");
        fs::write(&path, "[readiness]\nmax_attempts = \"many\"\n")?;

        let err = AssistantConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("assistant.toml"));
        Ok(())
    }
}
