//! Helper-script symlinks
//!
//! The scripthor package installs its shell helpers under `vendor/`. The
//! boilerplate expects them in `./scripts`, so we link them there.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::paths;

/// Ensure `./scripts` exists and links every scripthor helper into it.
///
/// Returns the names of the links created on this call. Entries that
/// already exist, dangling links included, are left untouched.
pub fn create_symlinks(project_root: &Path) -> Result<Vec<String>> {
    let scripts_dir = project_root.join(paths::SCRIPTS_DIR);
    ensure_scripts_dir(&scripts_dir)?;

    let mut created = Vec::new();
    for file in paths::SCRIPTHOR_SCRIPTS {
        let link = scripts_dir.join(file);
        if fs::symlink_metadata(&link).is_ok() {
            continue;
        }

        let target = Path::new(paths::SCRIPTHOR_BIN).join(file);
        match symlink(&target, &link) {
            Ok(()) => {
                println!("Script created: {file}");
                created.push(file.to_string());
            }
            Err(e) => {
                tracing::warn!(script = *file, error = %e, "could not create symlink");
                eprintln!("⚠️  Could not link {}: {e}", link.display());
            }
        }
    }

    Ok(created)
}

fn ensure_scripts_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        println!("./scripts directory created with 755 permissions.");
        if let Err(e) = create_dir_755(dir) {
            tracing::debug!(error = %e, "mkdir scripts failed");
        }
    }

    if !dir.is_dir() {
        eprintln!("./scripts directory not created.");
        bail!("./scripts directory not created.");
    }
    Ok(())
}

#[cfg(unix)]
fn create_dir_755(dir: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .mode(0o755)
        .create(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))
}

#[cfg(not(unix))]
fn create_dir_755(dir: &Path) -> Result<()> {
    fs::create_dir(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
