//! `create-symlinks`: link the scripthor helpers into ./scripts
//!
//! Usually not needed by hand; composer runs the same operation after
//! `install` and `update`.

use anyhow::Result;
use std::path::Path;

use boilerplate_assistant::symlinks;

pub fn execute(project_dir: &Path) -> Result<()> {
    let created = symlinks::create_symlinks(project_dir)?;
    if created.is_empty() {
        println!("✓ All scripts already linked");
    }
    Ok(())
}
