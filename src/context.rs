//! Run-scoped state owned by the assistant for one run

use anyhow::{bail, Result};

use crate::dialect::DialectPrefix;

/// Suffix of the generated Radix sub-theme
pub const THEME_SUFFIX: &str = "_radix";

/// Derive the sub-theme machine name from a project name.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, then
/// [`THEME_SUFFIX`] is appended: `acme-shop` -> `acme_shop_radix`.
pub fn theme_name(project_name: &str) -> String {
    let mut name: String = project_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    name.push_str(THEME_SUFFIX);
    name
}

#[derive(Debug, Clone)]
pub struct RunContext {
    project_name: String,
    theme_name: String,
    dialect: Option<DialectPrefix>,
    git_initialized: bool,
}

impl RunContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        let theme_name = theme_name(&project_name);
        Self {
            project_name,
            theme_name,
            dialect: None,
            git_initialized: false,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn git_initialized(&self) -> bool {
        self.git_initialized
    }

    pub fn mark_git_initialized(&mut self) {
        self.git_initialized = true;
    }

    /// Store the compose prefix. Resolving twice in a run is an error.
    pub fn set_dialect(&mut self, dialect: DialectPrefix) -> Result<()> {
        if let Some(existing) = &self.dialect {
            bail!(
                "Docker Compose command already resolved to '{}'",
                existing.as_str()
            );
        }
        self.dialect = Some(dialect);
        Ok(())
    }

    pub fn dialect(&self) -> Result<&DialectPrefix> {
        match &self.dialect {
            Some(dialect) => Ok(dialect),
            None => bail!("Docker Compose command used before it was resolved"),
        }
    }

    /// `<prefix> <args>` for the resolved dialect
    pub fn compose(&self, args: &str) -> Result<String> {
        Ok(self.dialect()?.command(args))
    }

    /// Local URL served by the reverse proxy
    pub fn site_url(&self, port: &str) -> String {
        format!("http://{}.docker.localhost:{}", self.project_name, port)
    }
}
