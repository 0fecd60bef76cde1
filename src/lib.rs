pub mod assistant;
pub mod config;
pub mod context;
pub mod dialect;
pub mod paths;
pub mod prompt;
pub mod readiness;
pub mod runner;
pub mod symlinks;
pub mod template;

// Re-export commonly used types
pub use assistant::{Assistant, RunReport};
pub use config::AssistantConfig;
pub use context::RunContext;
pub use runner::{CommandRunner, ShellRunner};
