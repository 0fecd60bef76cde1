use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Setup assistant for the Drupal Boilerplate", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    /// Log every command the assistant runs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create symlinks in ./scripts to the scripts provided by Scripthor
    #[command(alias = "boilerplate-symlinks")]
    CreateSymlinks,

    /// Run the setup assistant that configures the Drupal Boilerplate.
    ///
    /// Overrides any change made to the configuration files it handles,
    /// like behat.yml.
    #[command(alias = "boilerplate-assistant")]
    Assistant {
        /// Accept every default without prompting
        #[arg(short, long)]
        yes: bool,

        /// Abort as soon as a command exits with a non-zero status
        #[arg(long)]
        strict: bool,

        /// Assistant config file (defaults to <project-dir>/assistant.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::CreateSymlinks => {
            commands::create_symlinks::execute(&project_dir)?;
        }
        Commands::Assistant {
            yes,
            strict,
            config,
        } => {
            commands::assistant::execute(&project_dir, yes, strict, config)?;
        }
    }

    Ok(())
}
