//! Docker Compose dialect detection
//!
//! Compose v1 ships as `docker-compose`, v2 as the `docker compose` plugin.
//! The boilerplate declares which one it expects in `.env.example`:
//!
//! ```text
//! DOCKER_COMPOSE_CMD=docker compose
//! ```
//!
//! The value is taken verbatim and never validated here. An empty or bogus
//! prefix only surfaces when the first compose command fails to run.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_KEY: &str = "DOCKER_COMPOSE_CMD";

/// Prefixes the boilerplate is known to work with
pub const KNOWN_PREFIXES: &[&str] = &["docker compose", "docker-compose"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialectPrefix(String);

impl DialectPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is one of [`KNOWN_PREFIXES`]
    pub fn is_known(&self) -> bool {
        KNOWN_PREFIXES.contains(&self.0.as_str())
    }

    /// Whether the executable the prefix starts with is on PATH
    pub fn is_available(&self) -> bool {
        self.0
            .split_whitespace()
            .next()
            .is_some_and(|bin| which::which(bin).is_ok())
    }

    /// `<prefix> <args>`
    pub fn command(&self, args: &str) -> String {
        format!("{} {}", self.0, args)
    }
}

impl fmt::Display for DialectPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the value of `key` from env file content.
///
/// Only the first `KEY=` line counts. The value is the second
/// `=`-delimited field, trimmed. A missing key gives an empty prefix.
pub fn parse(content: &str, key: &str) -> DialectPrefix {
    let needle = format!("{key}=");
    content
        .lines()
        .find_map(|line| line.strip_prefix(needle.as_str()))
        .map(|value| DialectPrefix::new(value.split('=').next().unwrap_or_default()))
        .unwrap_or_default()
}

/// Read `env_file` and extract the compose prefix declared under `key`
pub fn resolve(env_file: &Path, key: &str) -> Result<DialectPrefix> {
    let content = fs::read_to_string(env_file)
        .with_context(|| format!("Failed to read {}", env_file.display()))?;
    Ok(parse(&content, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ENV: &str = "\
COMPOSE_PROJECT_NAME=example
PROJECT_BASE_URL=example.docker.localhost
DOCKER_COMPOSE_CMD=  docker compose
DB_NAME=drupal
";

    #[test]
    fn test_parse_trims_value() {
        assert_eq!(parse(ENV, DEFAULT_KEY).as_str(), "docker compose");
    }

    #[test]
    fn test_parse_requires_line_start() {
        let content = "# OLD_DOCKER_COMPOSE_CMD=docker-compose\nDOCKER_COMPOSE_CMD=docker-compose\n";
        assert_eq!(parse(content, DEFAULT_KEY).as_str(), "docker-compose");
    }

    #[test]
    fn test_parse_missing_key_is_empty() {
        let prefix = parse("DB_NAME=drupal\n", DEFAULT_KEY);
        assert!(prefix.is_empty());
        assert!(!prefix.is_known());
    }

    #[test]
    fn test_parse_accepts_unknown_values() {
        let prefix = parse("DOCKER_COMPOSE_CMD=podman-compose\n", DEFAULT_KEY);
        assert_eq!(prefix.as_str(), "podman-compose");
        assert!(!prefix.is_known());
    }

    #[test]
    fn test_parse_stops_at_second_equals() {
        let prefix = parse("DOCKER_COMPOSE_CMD=docker compose --env-file=.env\n", DEFAULT_KEY);
        assert_eq!(prefix.as_str(), "docker compose --env-file");
    }

    #[test]
    fn test_command_concatenates() {
        assert_eq!(
            DialectPrefix::new("docker-compose").command("up -d php"),
            "docker-compose up -d php"
        );
    }

    #[test]
    fn test_resolve_reads_file() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join(".env.example");
        fs::write(&path, ENV)?;

        let prefix = resolve(&path, DEFAULT_KEY)?;
        assert_eq!(prefix, DialectPrefix::new("docker compose"));
        assert!(prefix.is_known());
        Ok(())
    }

    #[test]
    fn test_resolve_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        assert!(resolve(&temp.path().join(".env.example"), DEFAULT_KEY).is_err());
    }
}
