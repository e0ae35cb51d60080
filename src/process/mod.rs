use std::fmt;
use std::io;

pub mod executor;

pub use executor::{ExitReport, ProcessExecutor};

#[derive(Debug)]
pub enum ProcessError {
    SpawnFailed(String, io::Error),
    Wait(io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SpawnFailed(cmd, e) => write!(f, "can't execute {}: {}", cmd, e),
            ProcessError::Wait(e) => write!(f, "can't wait for child: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::SpawnFailed(_, e) | ProcessError::Wait(e) => Some(e),
        }
    }
}
