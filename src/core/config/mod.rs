use std::{fmt, io::Write, path::Path};

mod loader;
mod paths;

use super::commands::{CommandDispatcher, Flow};
use super::state::ShellState;
use crate::flags::Flags;
use crate::report::Reporter;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

/// Where the shell finds its startup file and history.
pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    pub fn new(flags: &Flags) -> Self {
        Self::from_paths(ConfigPaths::new(flags))
    }

    pub fn from_paths(paths: ConfigPaths) -> Self {
        Config { paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn history_path(&self) -> Option<&Path> {
        self.paths.history_path.as_deref()
    }

    /// Executes the startup file against `state`.
    pub fn load(
        &self,
        dispatcher: &CommandDispatcher,
        state: &mut ShellState,
        out: &mut dyn Write,
        reporter: &Reporter,
    ) -> Result<Flow, ConfigError> {
        loader::load_into(&self.paths, dispatcher, state, out, reporter)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
