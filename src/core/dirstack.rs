//! The `pushd`/`popd`/`dirs` directory stack.
//!
//! Index 0 is the base entry; the last entry is the top and mirrors the
//! working directory. Every operation that moves the working directory goes
//! through a [`WorkingDir`] so the stack only changes once the move succeeded.

use std::fmt;

use super::env::WorkingDir;

/// Most entries the stack holds, base included.
pub const STACK_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    StackFull,
    ChangeDirectoryFailed(String),
    NoOtherDirectory,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::StackFull => write!(f, "directory stack is full"),
            StackError::ChangeDirectoryFailed(_) => write!(f, "can't change directory"),
            StackError::NoOtherDirectory => write!(f, "no other directory"),
        }
    }
}

impl std::error::Error for StackError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryStack {
    entries: Vec<String>,
}

impl DirectoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Entries from top to bottom.
    pub fn iter_from_top(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Refreshes the base entry from the live working directory while nothing
    /// has been pushed on top of it.
    pub fn sync_base(&mut self, cwd: &dyn WorkingDir) {
        if self.entries.len() > 1 {
            return;
        }
        match cwd.current() {
            Ok(dir) => {
                self.entries.clear();
                self.entries.push(dir);
            }
            Err(_) => self.entries.clear(),
        }
    }

    pub fn push(&mut self, dir: &str, cwd: &mut dyn WorkingDir) -> Result<(), StackError> {
        if self.entries.len() >= STACK_CAPACITY {
            return Err(StackError::StackFull);
        }
        cwd.change(dir)
            .map_err(|_| StackError::ChangeDirectoryFailed(dir.to_string()))?;
        self.entries.push(live_dir(cwd, dir));
        Ok(())
    }

    /// Moves to the entry below the top and drops the top.
    ///
    /// With only the base entry left the current directory is re-entered and
    /// the stack keeps its single entry.
    pub fn pop(&mut self, cwd: &mut dyn WorkingDir) -> Result<(), StackError> {
        let len = self.entries.len();
        if len <= 1 {
            if let Some(base) = self.entries.first() {
                cwd.change(base)
                    .map_err(|_| StackError::ChangeDirectoryFailed(base.clone()))?;
            }
            return Ok(());
        }

        let below = &self.entries[len - 2];
        cwd.change(below)
            .map_err(|_| StackError::ChangeDirectoryFailed(below.clone()))?;
        self.entries.pop();
        Ok(())
    }

    /// Exchanges the top two entries and enters the new top.
    ///
    /// If the new top cannot be entered the exchange is undone.
    pub fn swap_top_two(&mut self, cwd: &mut dyn WorkingDir) -> Result<(), StackError> {
        let len = self.entries.len();
        if len < 2 {
            return Err(StackError::NoOtherDirectory);
        }

        self.entries.swap(len - 1, len - 2);
        let top = &self.entries[len - 1];
        if cwd.change(top).is_err() {
            let failed = top.clone();
            self.entries.swap(len - 1, len - 2);
            return Err(StackError::ChangeDirectoryFailed(failed));
        }
        Ok(())
    }

    /// Enters `dir` and records it as the current (top) entry.
    pub fn replace_top(&mut self, dir: &str, cwd: &mut dyn WorkingDir) -> Result<(), StackError> {
        cwd.change(dir)
            .map_err(|_| StackError::ChangeDirectoryFailed(dir.to_string()))?;
        let now = live_dir(cwd, dir);
        match self.entries.last_mut() {
            Some(top) => *top = now,
            None => self.entries.push(now),
        }
        Ok(())
    }

    /// Renders the stack top to bottom, one space between entries.
    pub fn list(&self) -> String {
        if self.entries.is_empty() {
            return "directory stack empty".to_string();
        }
        self.iter_from_top().collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for DirectoryStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list())
    }
}

// Falls back to the requested path when the directory was entered but can no
// longer be named (e.g. removed right after the change).
fn live_dir(cwd: &dyn WorkingDir, requested: &str) -> String {
    cwd.current().unwrap_or_else(|_| requested.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::fake::FakeDir;

    fn setup() -> (DirectoryStack, FakeDir) {
        let cwd = FakeDir::new("/home/user", &["/tmp", "/home", "/var/log"]);
        let mut stack = DirectoryStack::new();
        stack.sync_base(&cwd);
        (stack, cwd)
    }

    #[test]
    fn test_sync_base_tracks_cwd() {
        let (mut stack, mut cwd) = setup();
        assert_eq!(stack.list(), "/home/user");

        cwd.change("/tmp").unwrap();
        stack.sync_base(&cwd);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top(), Some("/tmp"));
    }

    #[test]
    fn test_sync_base_leaves_pushed_stack_alone() {
        let (mut stack, mut cwd) = setup();
        stack.push("/tmp", &mut cwd).unwrap();
        cwd.change("/var/log").unwrap();
        stack.sync_base(&cwd);
        assert_eq!(stack.list(), "/tmp /home/user");
    }

    #[test]
    fn test_push_then_pop_restores() {
        let (mut stack, mut cwd) = setup();
        stack.push("/tmp", &mut cwd).unwrap();
        assert_eq!(cwd.cwd(), "/tmp");
        assert_eq!(stack.len(), 2);

        stack.pop(&mut cwd).unwrap();
        assert_eq!(cwd.cwd(), "/home/user");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_push_records_absolute_path() {
        let (mut stack, mut cwd) = setup();
        stack.push("..", &mut cwd).unwrap();
        assert_eq!(stack.top(), Some("/home"));
    }

    #[test]
    fn test_push_failure_leaves_stack() {
        let (mut stack, mut cwd) = setup();
        let before = stack.clone();
        assert_eq!(
            stack.push("/nope", &mut cwd),
            Err(StackError::ChangeDirectoryFailed("/nope".to_string()))
        );
        assert_eq!(stack, before);
        assert_eq!(cwd.cwd(), "/home/user");
    }

    #[test]
    fn test_push_when_full() {
        let (mut stack, mut cwd) = setup();
        for _ in 1..STACK_CAPACITY {
            stack.push("/tmp", &mut cwd).unwrap();
        }
        assert_eq!(stack.len(), STACK_CAPACITY);
        assert_eq!(stack.push("/home", &mut cwd), Err(StackError::StackFull));
        assert_eq!(cwd.cwd(), "/tmp");
    }

    #[test]
    fn test_pop_base_only_is_stable() {
        let (mut stack, mut cwd) = setup();
        stack.pop(&mut cwd).unwrap();
        stack.pop(&mut cwd).unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(cwd.cwd(), "/home/user");
        assert_eq!(stack.list(), "/home/user");
    }

    #[test]
    fn test_pop_into_removed_directory_fails() {
        let (mut stack, mut cwd) = setup();
        stack.push("/tmp", &mut cwd).unwrap();
        cwd.remove("/home/user");

        assert!(matches!(
            stack.pop(&mut cwd),
            Err(StackError::ChangeDirectoryFailed(_))
        ));
        assert_eq!(stack.len(), 2);
        assert_eq!(cwd.cwd(), "/tmp");
    }

    #[test]
    fn test_pushd_pushd_popd_scenario() {
        let (mut stack, mut cwd) = setup();
        stack.push("/tmp", &mut cwd).unwrap();
        stack.push("/", &mut cwd).unwrap();
        assert_eq!(stack.list(), "/ /tmp /home/user");

        stack.pop(&mut cwd).unwrap();
        assert_eq!(cwd.cwd(), "/tmp");
        assert_eq!(stack.list(), "/tmp /home/user");
    }

    #[test]
    fn test_swap_top_two() {
        let (mut stack, mut cwd) = setup();
        stack.push("/tmp", &mut cwd).unwrap();
        stack.swap_top_two(&mut cwd).unwrap();
        assert_eq!(stack.list(), "/home/user /tmp");
        assert_eq!(cwd.cwd(), "/home/user");
    }

    #[test]
    fn test_swap_needs_two_entries() {
        let (mut stack, mut cwd) = setup();
        assert_eq!(stack.swap_top_two(&mut cwd), Err(StackError::NoOtherDirectory));
        assert_eq!(stack.list(), "/home/user");
    }

    #[test]
    fn test_swap_rolls_back_on_failure() {
        let (mut stack, mut cwd) = setup();
        stack.push("/tmp", &mut cwd).unwrap();
        cwd.remove("/home/user");

        assert!(matches!(
            stack.swap_top_two(&mut cwd),
            Err(StackError::ChangeDirectoryFailed(_))
        ));
        assert_eq!(stack.list(), "/tmp /home/user");
        assert_eq!(cwd.cwd(), "/tmp");
    }

    #[test]
    fn test_replace_top() {
        let (mut stack, mut cwd) = setup();
        stack.push("/tmp", &mut cwd).unwrap();
        stack.replace_top("/var/log", &mut cwd).unwrap();
        assert_eq!(stack.list(), "/var/log /home/user");

        assert!(stack.replace_top("/missing", &mut cwd).is_err());
        assert_eq!(stack.list(), "/var/log /home/user");
    }

    #[test]
    fn test_empty_stack_listing() {
        let stack = DirectoryStack::new();
        assert_eq!(stack.list(), "directory stack empty");
        assert_eq!(stack.to_string(), "directory stack empty");
    }
}
