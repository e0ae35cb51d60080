use super::EnvError;
use std::path::{Path, PathBuf};

const RC_FILE: &str = ".burrowrc";
const HISTORY_FILE: &str = ".burrow_history";

#[derive(Debug, Clone)]
pub struct EnvPaths {
    home: PathBuf,
}

impl EnvPaths {
    pub fn new() -> Result<Self, EnvError> {
        let home = dirs::home_dir().ok_or(EnvError::HomeDirNotFound)?;
        Ok(Self::with_home(home))
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn rc_file(&self) -> PathBuf {
        self.home.join(RC_FILE)
    }

    pub fn history_file(&self) -> PathBuf {
        self.home.join(HISTORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_in_home() {
        let paths = EnvPaths::with_home("/home/testuser");
        assert_eq!(paths.home(), Path::new("/home/testuser"));
        assert_eq!(paths.rc_file(), PathBuf::from("/home/testuser/.burrowrc"));
        assert_eq!(
            paths.history_file(),
            PathBuf::from("/home/testuser/.burrow_history")
        );
    }
}
