use super::dirstack::DirectoryStack;
use super::env::{FileProbe, FsProbe, ProcessDir, WorkingDir};
use super::search_path::SearchPath;

/// Everything that outlives a single input line.
pub struct ShellState {
    pub stack: DirectoryStack,
    pub path: SearchPath,
    pub cwd: Box<dyn WorkingDir>,
    pub probe: Box<dyn FileProbe>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::with_host(Box::new(ProcessDir), Box::new(FsProbe))
    }

    pub fn with_host(cwd: Box<dyn WorkingDir>, probe: Box<dyn FileProbe>) -> Self {
        let mut state = Self {
            stack: DirectoryStack::new(),
            path: SearchPath::new(),
            cwd,
            probe,
        };
        state.sync();
        state
    }

    /// Brings the base of the directory stack in line with the working
    /// directory. Runs before every prompt.
    pub fn sync(&mut self) {
        self.stack.sync_base(self.cwd.as_ref());
    }

    pub fn prompt(&self) -> String {
        format!("[{}]: ", self.stack.top().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::fake::{FakeDir, FakeProbe};

    #[test]
    fn test_prompt_shows_top() {
        let mut state = ShellState::with_host(
            Box::new(FakeDir::new("/home/user", &["/tmp"])),
            Box::new(FakeProbe::default()),
        );
        assert_eq!(state.prompt(), "[/home/user]: ");

        state.stack.push("/tmp", state.cwd.as_mut()).unwrap();
        assert_eq!(state.prompt(), "[/tmp]: ");
    }

    #[test]
    fn test_prompt_with_empty_stack() {
        let mut state = ShellState::with_host(
            Box::new(FakeDir::new("/", &[])),
            Box::new(FakeProbe::default()),
        );
        state.stack = DirectoryStack::new();
        assert_eq!(state.prompt(), "[]: ");
    }
}
