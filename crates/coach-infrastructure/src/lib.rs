pub mod config_loader;
pub mod paths;

pub use config_loader::ConfigLoader;
pub use paths::{CoachPaths, PathError};
