mod paths;

pub use paths::EnvPaths;

use std::env;
use std::fs::File;
use std::io;

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    IoError(io::Error),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "Home directory not found"),
            EnvError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for EnvError {}

impl From<io::Error> for EnvError {
    fn from(e: io::Error) -> Self {
        EnvError::IoError(e)
    }
}

/// The process working directory as seen by the directory stack and `cd`.
pub trait WorkingDir {
    fn current(&self) -> io::Result<String>;
    fn change(&mut self, dir: &str) -> io::Result<()>;
}

/// Decides whether a candidate command file exists.
///
/// "Exists" means it can be opened for reading, which is looser than being
/// executable.
pub trait FileProbe {
    fn is_readable(&self, path: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessDir;

impl WorkingDir for ProcessDir {
    fn current(&self) -> io::Result<String> {
        Ok(env::current_dir()?.to_string_lossy().into_owned())
    }

    fn change(&mut self, dir: &str) -> io::Result<()> {
        env::set_current_dir(dir)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn is_readable(&self, path: &str) -> bool {
        !path.is_empty() && File::open(path).is_ok()
    }
}

/// Serializes tests that touch the real process working directory.
#[cfg(test)]
pub(crate) fn cwd_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
