//! Step implementations for the setup assistant

use anyhow::{bail, Result};
use colored::Colorize;
use std::fs;

use super::{Assistant, RunReport, INSTALL_PROFILES};
use crate::context::RunContext;
use crate::dialect::{self, DialectPrefix};
use crate::paths;
use crate::prompt::Prompter;
use crate::readiness::{self, Readiness, ReadinessCheck};
use crate::runner::CommandRunner;
use crate::template;

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

impl<R: CommandRunner, P: Prompter> Assistant<R, P> {
    pub(super) fn run_steps(&self) -> Result<RunReport> {
        println!("Launching assistant to configure the Drupal Boilerplate");

        // === STEP 1: CONFIG FILES (I/O errors abort the run) ===
        let mut ctx = self.configure_files()?;

        // === STEP 2: DOCKER COMPOSE DIALECT ===
        self.resolve_dialect(&mut ctx)?;

        // === STEP 3..6: GIT, CONTAINERS, DATABASE, HOOKS ===
        self.init_git(&mut ctx)?;
        self.start_services(&ctx)?;
        let readiness = self.wait_for_database(&ctx)?;
        self.init_grumphp(&ctx)?;

        // === STEP 7..9: OPTIONAL SITE SETUP ===
        self.install_drupal(&ctx)?;
        self.create_directories();
        self.create_sub_theme(&ctx)?;

        // === STEP 10: SUMMARY ===
        let url = self.report_success(&ctx)?;

        Ok(RunReport {
            context: ctx,
            url,
            readiness,
        })
    }

    fn default_project_name(&self) -> String {
        let from_path = |p: &std::path::Path| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|s| s.to_string())
        };
        from_path(self.root.as_path())
            .or_else(|| fs::canonicalize(&self.root).ok().and_then(|p| from_path(&p)))
            .unwrap_or_else(|| "project".to_string())
    }

    fn configure_files(&self) -> Result<RunContext> {
        let current_dir = self.default_project_name();
        let project_name = self.prompter.ask(
            &format!("Please enter the project name (default to {current_dir}): "),
            &current_dir,
        )?;
        let ctx = RunContext::new(project_name.trim());

        println!("Setting up configuration files");
        for action in template::configuration_files(ctx.project_name(), ctx.theme_name()) {
            template::process_example_file(&action.rooted(&self.root))?;
            println!("  ✓ {}", action.target.display());
        }

        Ok(ctx)
    }

    fn resolve_dialect(&self, ctx: &mut RunContext) -> Result<()> {
        let compose = &self.config.compose;
        let prefix = match dialect::resolve(&self.root.join(&compose.env_file), &compose.key) {
            Ok(prefix) => prefix,
            Err(e) => {
                tracing::warn!(error = %e, "could not read the compose command");
                DialectPrefix::default()
            }
        };

        println!("Using {prefix} to run Docker Compose commands");
        if !prefix.is_known() {
            println!(
                "{}",
                format!(
                    "⚠️  '{}' is not a known Docker Compose command ({})",
                    prefix,
                    dialect::KNOWN_PREFIXES.join(", ")
                )
                .yellow()
            );
        } else if !prefix.is_available() {
            tracing::warn!(prefix = %prefix, "compose executable not found on PATH");
        }

        ctx.set_dialect(prefix)
    }

    fn init_git(&self, ctx: &mut RunContext) -> Result<()> {
        if !self
            .prompter
            .confirm("Do you want to initialize a git repository for your new project?")?
        {
            return Ok(());
        }

        self.run_command("git init")?;
        self.run_command("git checkout -b dev")?;
        ctx.mark_git_initialized();
        Ok(())
    }

    fn start_services(&self, ctx: &RunContext) -> Result<()> {
        self.run_command(paths::TRAEFIK_PORT_SCRIPT)?;
        self.run_command(&ctx.compose("up -d php")?)?;
        self.run_command(&ctx.compose(&format!(
            "exec php mkdir -p {}",
            paths::container_theme_dir(ctx.theme_name())
        ))?)?;
        self.run_command(&ctx.compose("up -d")?)?;
        Ok(())
    }

    fn wait_for_database(&self, ctx: &RunContext) -> Result<Readiness> {
        let policy = &self.config.readiness;
        let check = ReadinessCheck::database(ctx.dialect()?)
            .with_policy(policy.max_attempts, policy.interval());
        Ok(readiness::wait_for(&self.runner, &check))
    }

    fn init_grumphp(&self, ctx: &RunContext) -> Result<()> {
        self.run_command(&ctx.compose("exec php ./vendor/bin/grumphp git:init")?)?;
        Ok(())
    }

    fn install_drupal(&self, ctx: &RunContext) -> Result<()> {
        if !self.prompter.confirm("Do you want to install Drupal?")? {
            return Ok(());
        }

        let labels: Vec<&str> = INSTALL_PROFILES.iter().map(|p| p.label).collect();
        let index = self
            .prompter
            .select("What install profile you want to install?", &labels, 0)?;
        let Some(profile) = INSTALL_PROFILES.get(index) else {
            bail!("Invalid install profile selection: {index}");
        };
        println!("Installing profile {}", profile.label);

        template::apply_all(&self.root, &template::install_files(ctx.project_name()))?;

        self.run_command(&ctx.compose(&format!("exec php drush -y si {}", profile.machine_name))?)?;
        self.run_command(&ctx.compose("exec php drush cr")?)?;
        Ok(())
    }

    fn create_directories(&self) {
        for dir in [
            self.root.join(paths::BEHAT_ARTIFACTS_DIR),
            self.root.join(paths::behat_errors_dir()),
        ] {
            if let Err(e) = fs::create_dir_all(&dir) {
                tracing::warn!(dir = %dir.display(), error = %e, "could not create directory");
                println!("⚠️  Could not create {}: {e}", dir.display());
            }
        }
    }

    fn create_sub_theme(&self, ctx: &RunContext) -> Result<()> {
        if !self
            .prompter
            .confirm("Do you want to create a Radix sub-theme?")?
        {
            return Ok(());
        }

        let theme = ctx.theme_name();
        self.run_command(&ctx.compose("exec php drush en components")?)?;
        self.run_command(&ctx.compose("exec php drush theme:enable radix -y")?)?;
        self.run_command(&ctx.compose(&format!(
            "exec php drush --include=\"web/themes/contrib/radix\" radix:create {theme}"
        ))?)?;
        self.run_command(&ctx.compose(&format!("exec php drush theme:enable {theme} -y"))?)?;
        self.run_command(&ctx.compose(&format!(
            "exec php drush config-set system.theme default {theme} -y"
        ))?)?;
        self.run_command("make frontend dev")?;
        Ok(())
    }

    fn report_success(&self, ctx: &RunContext) -> Result<String> {
        let port = match self.runner.run_captured(&ctx.compose("port traefik 80")?) {
            Ok(output) => parse_port(&output),
            Err(e) => {
                tracing::warn!(error = %e, "could not look up the traefik port");
                String::new()
            }
        };

        if ctx.git_initialized() {
            self.run_command("git add .")?;
            self.run_command(&format!("git commit -m \"{INITIAL_COMMIT_MESSAGE}\" -n"))?;
        }

        let url = ctx.site_url(&port);
        println!();
        println!();
        println!("{}", "***********************".green());
        println!("{}", "    CONGRATULATIONS!".green().bold());
        println!("{}", "***********************".green());
        println!(
            "Your new project is up and running on the following url: {}",
            url.bold()
        );
        println!("Run `make info` for more URLs to other provided tools");
        println!();
        println!("Click on the following link to start building your site:");
        self.run_command(&ctx.compose("exec php drush uli")?)?;
        println!();

        Ok(url)
    }

    /// Run an interactive command. A failure only matters in strict mode.
    fn run_command(&self, line: &str) -> Result<()> {
        let outcome = match self.runner.run_interactive(line) {
            Ok(outcome) => outcome,
            Err(e) if self.config.assistant.strict => return Err(e),
            Err(e) => {
                tracing::debug!(command = line, error = %e, "command could not start");
                return Ok(());
            }
        };

        if !outcome.success && self.config.assistant.strict {
            match outcome.code {
                Some(code) => bail!("Command failed with exit code {code}: {line}"),
                None => bail!("Command terminated by signal: {line}"),
            }
        }
        Ok(())
    }
}

/// `0.0.0.0:8080` -> `8080`
fn parse_port(output: &str) -> String {
    output
        .lines()
        .next()
        .and_then(|line| line.rsplit(':').next())
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("0.0.0.0:49153"), "49153");
        assert_eq!(parse_port("0.0.0.0:8080\n[::]:8080"), "8080");
        assert_eq!(parse_port(""), "");
    }
}
