#![allow(dead_code)]

use anyhow::{bail, Result};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use boilerplate_assistant::prompt::Prompter;
use boilerplate_assistant::runner::{CommandOutcome, CommandRunner};

/// Freshly created boilerplate with every template the assistant touches
pub struct Fixture {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl Fixture {
    pub fn new(compose_cmd: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("acme-shop");
        fs::create_dir_all(&root).expect("create project root");

        let files: &[(&str, String)] = &[
            (
                ".env.example",
                format!(
                    "COMPOSE_PROJECT_NAME=example\nPROJECT_BASE_URL=example.docker.localhost\nDOCKER_COMPOSE_CMD={compose_cmd}\nDB_NAME=drupal\n"
                ),
            ),
            (
                "Makefile",
                "include .env\nfrontend_target ?= \"example\"\n\nfrontend:\n\t./scripts/frontend-build.sh $(frontend_target)\n".to_string(),
            ),
            (
                "drush/sites/sitename.site.yml.example",
                "local:\n  uri: http://sitename.docker.localhost\n".to_string(),
            ),
            (
                "drush/sites/default.site.yml",
                "local:\n  uri: http://example.docker.localhost\n".to_string(),
            ),
            (
                "behat.yml",
                "default:\n  extensions:\n    Drupal\\MinkExtension:\n      base_url: http://example.docker.localhost\n".to_string(),
            ),
            (
                "tests/functional/backstopjs/backstop_data/engine_scripts/cookies.json",
                "[{\"domain\": \"example.docker.localhost\", \"name\": \"example\"}]\n".to_string(),
            ),
            ("compose.override.yml.dist", "services: {}\n".to_string()),
            ("phpunit.xml.dist", "<phpunit/>\n".to_string()),
            ("phpcs.xml.dist", "<ruleset name=\"example\"/>\n".to_string()),
            ("phpmd.xml.dist", "<ruleset/>\n".to_string()),
            (
                "web/sites/default/example.settings.local.php",
                "<?php\n$settings['cache'] = FALSE;\n".to_string(),
            ),
            (
                "web/sites/default/example.local.drush.yml",
                "options:\n  uri: http://example.docker.localhost\n".to_string(),
            ),
        ];

        for (path, content) in files {
            let path = root.join(path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create fixture dir");
            }
            fs::write(&path, content).expect("write fixture file");
        }

        Self { _tmp: tmp, root }
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root.join(path)).expect("read project file")
    }

    pub fn path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Records every command line and answers captured ones from a script
pub struct RecordingRunner {
    pub commands: RefCell<Vec<String>>,
    probe_calls: Cell<u32>,
    /// Probe reports the sentinel from this attempt on
    pub db_ready_on: Option<u32>,
    /// Interactive commands containing this text exit with status 1
    pub fail_matching: Option<String>,
}

impl RecordingRunner {
    pub fn new(db_ready_on: Option<u32>) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            probe_calls: Cell::new(0),
            db_ready_on,
            fail_matching: None,
        }
    }

    pub fn failing(mut self, needle: &str) -> Self {
        self.fail_matching = Some(needle.to_string());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    pub fn probe_calls(&self) -> u32 {
        self.probe_calls.get()
    }

    pub fn count_matching(&self, needle: &str) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.contains(needle))
            .count()
    }

    pub fn git_commands(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.starts_with("git "))
            .cloned()
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_captured(&self, line: &str) -> Result<String> {
        self.commands.borrow_mut().push(line.to_string());

        if line.contains("mysql") {
            let n = self.probe_calls.get() + 1;
            self.probe_calls.set(n);
            return Ok(match self.db_ready_on {
                Some(k) if n >= k => "result\n1234567890".to_string(),
                _ => "ERROR 2002 (HY000): Can't connect to local server".to_string(),
            });
        }
        if line.ends_with("port traefik 80") {
            return Ok("0.0.0.0:49153".to_string());
        }
        Ok(String::new())
    }

    fn run_interactive(&self, line: &str) -> Result<CommandOutcome> {
        self.commands.borrow_mut().push(line.to_string());
        match &self.fail_matching {
            Some(needle) if line.contains(needle.as_str()) => Ok(CommandOutcome::failed(1)),
            _ => Ok(CommandOutcome::ok()),
        }
    }
}

/// Prompter answering from fixed queues
pub struct ScriptedPrompter {
    pub project_name: Option<String>,
    confirms: RefCell<VecDeque<bool>>,
    pub profile: usize,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    /// `confirms` answers git, install and theme questions in that order
    pub fn new(project_name: Option<&str>, confirms: &[bool]) -> Self {
        Self {
            project_name: project_name.map(str::to_string),
            confirms: RefCell::new(confirms.iter().copied().collect()),
            profile: 0,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn with_profile(mut self, index: usize) -> Self {
        self.profile = index;
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, prompt: &str, default: &str) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self
            .project_name
            .clone()
            .unwrap_or_else(|| default.to_string()))
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        match self.confirms.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("unexpected confirmation: {prompt}"),
        }
    }

    fn select(&self, prompt: &str, _options: &[&str], _default: usize) -> Result<usize> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.profile)
    }
}
