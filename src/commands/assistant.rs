//! `assistant`: configure and start a freshly created boilerplate

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use boilerplate_assistant::assistant::Assistant;
use boilerplate_assistant::config::AssistantConfig;
use boilerplate_assistant::paths;
use boilerplate_assistant::prompt::{DefaultsPrompter, Prompter, TerminalPrompter};
use boilerplate_assistant::runner::ShellRunner;

pub fn execute(project_dir: &Path, yes: bool, strict: bool, config: Option<PathBuf>) -> Result<()> {
    let project_dir = project_dir
        .canonicalize()
        .with_context(|| format!("Project directory not found: {}", project_dir.display()))?;

    let config_path = config.unwrap_or_else(|| paths::config_path(&project_dir));
    let mut config = AssistantConfig::load(&config_path)?;
    if strict {
        config.assistant.strict = true;
    }

    let prompter: Box<dyn Prompter> = if yes {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(TerminalPrompter)
    };

    let runner = ShellRunner::new(&project_dir);
    let assistant = Assistant::new(&project_dir, runner, prompter.as_ref(), config);
    assistant.run()?;
    Ok(())
}
