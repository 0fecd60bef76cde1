//! Config file materialization
//!
//! The boilerplate ships its configuration as example files. Each one is
//! copied into its operational path and a literal placeholder is replaced
//! with a run-specific value. No templating language: one exact-text
//! placeholder per edit, single pass.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Literal replacement applied to a materialized file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replace {
    pub placeholder: String,
    pub replacement: String,
}

/// One "materialize a config file from its example" action.
///
/// `source == target` means the file is edited in place.
/// `edit == None` means a plain copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSubstitution {
    pub source: PathBuf,
    pub target: PathBuf,
    pub edit: Option<Replace>,
}

impl TemplateSubstitution {
    /// Copy `source` to `target`, then replace `placeholder` in the copy
    pub fn from_example(
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        placeholder: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edit: Some(Replace {
                placeholder: placeholder.into(),
                replacement: replacement.into(),
            }),
        }
    }

    /// Replace `placeholder` in an existing file
    pub fn in_place(
        path: impl Into<PathBuf>,
        placeholder: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        let path = path.into();
        Self::from_example(path.clone(), path, placeholder, replacement)
    }

    /// Copy `source` to `target` verbatim
    pub fn copy(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edit: None,
        }
    }

    /// Same action with both paths resolved against `root`
    pub fn rooted(&self, root: &Path) -> Self {
        Self {
            source: root.join(&self.source),
            target: root.join(&self.target),
            edit: self.edit.clone(),
        }
    }
}

/// Copy `source` to `target` byte for byte.
///
/// A missing source fails before the target is touched.
pub fn materialize(source: &Path, target: &Path) -> Result<()> {
    if source == target {
        return Ok(());
    }
    fs::copy(source, target).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            target.display()
        )
    })?;
    Ok(())
}

/// Replace every literal occurrence of `placeholder` in the file at `path`
pub fn substitute(path: &Path, placeholder: &str, replacement: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let replaced = content.replace(placeholder, replacement);
    fs::write(path, replaced).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Materialize then substitute
pub fn process_example_file(action: &TemplateSubstitution) -> Result<()> {
    materialize(&action.source, &action.target)?;
    if let Some(edit) = &action.edit {
        substitute(&action.target, &edit.placeholder, &edit.replacement)?;
    }
    Ok(())
}

/// Apply `actions` relative to `root`, stopping at the first failure
pub fn apply_all(root: &Path, actions: &[TemplateSubstitution]) -> Result<()> {
    for action in actions {
        process_example_file(&action.rooted(root))?;
    }
    Ok(())
}

/// The fixed set of config files personalized on every run
pub fn configuration_files(project_name: &str, theme_name: &str) -> Vec<TemplateSubstitution> {
    let mut actions = vec![
        TemplateSubstitution::from_example(
            paths::ENV_EXAMPLE_FILE,
            paths::ENV_FILE,
            "example",
            project_name,
        ),
        TemplateSubstitution::in_place(
            paths::MAKEFILE,
            r#"frontend_target ?= "example""#,
            format!(r#"frontend_target ?= "{theme_name}""#),
        ),
        TemplateSubstitution::from_example(
            paths::DRUSH_SITE_ALIASES_EXAMPLE,
            paths::DRUSH_SITE_ALIASES_FILE,
            "sitename",
            project_name,
        ),
        TemplateSubstitution::in_place(paths::DRUSH_LOCAL_ALIAS_FILE, "example", project_name),
        TemplateSubstitution::in_place(paths::BEHAT_FILE, "example", project_name),
        TemplateSubstitution::in_place(paths::BACKSTOP_COOKIES_FILE, "example", project_name),
    ];

    actions.extend(
        paths::DIST_FILES
            .iter()
            .map(|name| TemplateSubstitution::copy(format!("{name}{}", paths::DIST_SUFFIX), *name)),
    );

    actions
}

/// Local settings written when Drupal gets installed
pub fn install_files(project_name: &str) -> Vec<TemplateSubstitution> {
    vec![
        TemplateSubstitution::copy(paths::SETTINGS_LOCAL_EXAMPLE, paths::SETTINGS_LOCAL_FILE),
        TemplateSubstitution::from_example(
            paths::LOCAL_DRUSH_EXAMPLE,
            paths::LOCAL_DRUSH_FILE,
            "example",
            project_name,
        ),
    ]
}
