//! Single source of truth for the boilerplate's filesystem layout.
//!
//! This module defines WHERE things live. It has no I/O and no business
//! logic; every path is relative to the project root unless noted.
//!
//! ```text
//! project/
//! ├── .env.example / .env           # Compose settings (dialect lives here)
//! ├── Makefile                      # frontend_target points at the sub-theme
//! ├── behat.yml
//! ├── compose.override.yml(.dist)
//! ├── phpunit.xml / phpcs.xml / phpmd.xml (.dist)
//! ├── drush/sites/                  # Drush aliases
//! ├── scripts/                      # Symlinks into scripthor
//! ├── tests/functional/backstopjs/  # Visual regression config
//! └── web/sites/default/            # Drupal local settings
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Configuration templates
// =============================================================================

pub const ENV_FILE: &str = ".env";
pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const MAKEFILE: &str = "Makefile";
pub const BEHAT_FILE: &str = "behat.yml";
pub const BACKSTOP_COOKIES_FILE: &str =
    "tests/functional/backstopjs/backstop_data/engine_scripts/cookies.json";

pub const DRUSH_SITE_ALIASES_FILE: &str = "drush/sites/sitename.site.yml";
pub const DRUSH_SITE_ALIASES_EXAMPLE: &str = "drush/sites/sitename.site.yml.example";
pub const DRUSH_LOCAL_ALIAS_FILE: &str = "drush/sites/default.site.yml";

/// Files shipped as `<name>.dist` that are copied verbatim to `<name>`.
pub const DIST_FILES: &[&str] = &[
    "compose.override.yml",
    "phpunit.xml",
    "phpcs.xml",
    "phpmd.xml",
];

/// Suffix carried by files that are copied verbatim into place.
pub const DIST_SUFFIX: &str = ".dist";

// =============================================================================
// Drupal site
// =============================================================================

pub const SETTINGS_LOCAL_EXAMPLE: &str = "web/sites/default/example.settings.local.php";
pub const SETTINGS_LOCAL_FILE: &str = "web/sites/default/settings.local.php";
pub const LOCAL_DRUSH_EXAMPLE: &str = "web/sites/default/example.local.drush.yml";
pub const LOCAL_DRUSH_FILE: &str = "web/sites/default/local.drush.yml";

/// Behat screenshot and error capture directory.
pub const BEHAT_ARTIFACTS_DIR: &str = "web/sites/default/files/behat";

/// Directory for Behat failure dumps, nested under [`BEHAT_ARTIFACTS_DIR`].
pub fn behat_errors_dir() -> PathBuf {
    Path::new(BEHAT_ARTIFACTS_DIR).join("errors")
}

// =============================================================================
// Helper scripts
// =============================================================================

pub const SCRIPTS_DIR: &str = "scripts";

/// Link target prefix, relative to [`SCRIPTS_DIR`].
pub const SCRIPTHOR_BIN: &str = "../vendor/metadrop/scripthor/bin";

pub const SCRIPTHOR_SCRIPTS: &[&str] = &[
    "frontend-build.sh",
    "copy-content-config-entity-to-module.sh",
    "reload-local.sh",
    "setup-traefik-port.sh",
    "backup.sh",
];

/// Script that publishes the reverse proxy on a free local port.
pub const TRAEFIK_PORT_SCRIPT: &str = "./scripts/setup-traefik-port.sh";

// =============================================================================
// Inside the php container
// =============================================================================

/// Custom theme directory as seen from inside the php container.
pub fn container_theme_dir(theme_name: &str) -> String {
    format!("/var/www/html/web/themes/custom/{theme_name}")
}

/// Default location of the assistant's own configuration file.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join("assistant.toml")
}
