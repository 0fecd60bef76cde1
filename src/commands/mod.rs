pub mod assistant;
pub mod create_symlinks;
