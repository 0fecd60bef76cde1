//! Setup assistant for a freshly created boilerplate
//!
//! Public interface here, the step implementations live in `internal`.
//!
//! # Example
//!
//! ```no_run
//! use boilerplate_assistant::assistant::Assistant;
//! use boilerplate_assistant::config::AssistantConfig;
//! use boilerplate_assistant::prompt::TerminalPrompter;
//! use boilerplate_assistant::runner::ShellRunner;
//!
//! let root = std::env::current_dir()?;
//! let assistant = Assistant::new(
//!     &root,
//!     ShellRunner::new(&root),
//!     TerminalPrompter,
//!     AssistantConfig::default(),
//! );
//! let report = assistant.run()?;
//! println!("{}", report.url);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::AssistantConfig;
use crate::context::RunContext;
use crate::prompt::Prompter;
use crate::readiness::Readiness;
use crate::runner::CommandRunner;

/// Drupal install profile offered by the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallProfile {
    pub label: &'static str,
    pub machine_name: &'static str,
}

/// Profiles in the order they are offered; the first one is the default
pub const INSTALL_PROFILES: &[InstallProfile] = &[
    InstallProfile {
        label: "Minimal",
        machine_name: "minimal",
    },
    InstallProfile {
        label: "Standard",
        machine_name: "standard",
    },
    InstallProfile {
        label: "Umami (demo site)",
        machine_name: "demo_umami",
    },
];

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub context: RunContext,
    pub url: String,
    pub readiness: Readiness,
}

pub struct Assistant<R, P> {
    root: PathBuf,
    runner: R,
    prompter: P,
    config: AssistantConfig,
}

impl<R: CommandRunner, P: Prompter> Assistant<R, P> {
    pub fn new(root: impl Into<PathBuf>, runner: R, prompter: P, config: AssistantConfig) -> Self {
        Self {
            root: root.into(),
            runner,
            prompter,
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run every step in order.
    ///
    /// # Process
    ///
    /// 1. Personalize config files from their examples
    /// 2. Resolve the Docker Compose command
    /// 3. Initialize git (asks)
    /// 4. Start the containers
    /// 5. Wait for the database
    /// 6. Install the GrumPHP git hooks
    /// 7. Install Drupal (asks)
    /// 8. Create the Behat artifact directories
    /// 9. Create a Radix sub-theme (asks)
    /// 10. Commit and print the summary
    ///
    /// # Errors
    ///
    /// Only file I/O while writing config files fails the run. Commands that
    /// exit non-zero are ignored unless strict mode is on, in which case the
    /// first one aborts the run.
    pub fn run(&self) -> Result<RunReport> {
        self.run_steps()
    }
}
