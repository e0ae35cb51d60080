use std::fmt;

use super::env::FileProbe;

/// Most directories the search path holds.
pub const PATH_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    PathListFull,
    CommandNotFound(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::PathListFull => write!(f, "path list is full"),
            PathError::CommandNotFound(_) => write!(f, "command not found"),
        }
    }
}

impl std::error::Error for PathError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Ordered, duplicate-free list of directories searched for commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<String>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, dir: &str) -> Result<AddOutcome, PathError> {
        let dir = normalize(dir);
        if self.entries.iter().any(|entry| entry == dir) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        if self.entries.len() >= PATH_CAPACITY {
            return Err(PathError::PathListFull);
        }
        self.entries.push(dir.to_string());
        Ok(AddOutcome::Added)
    }

    /// Removes `dir`, keeping the order of the rest. Returns whether it was
    /// present.
    pub fn remove(&mut self, dir: &str) -> bool {
        let dir = normalize(dir);
        match self.entries.iter().position(|entry| entry == dir) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> String {
        if self.entries.is_empty() {
            return "INFO: path empty".to_string();
        }
        self.entries.join(":")
    }

    /// Turns a command name into a file to launch.
    ///
    /// The name itself wins if it can be opened as given (absolute, relative,
    /// or a plain file in the working directory). Otherwise each entry is
    /// tried in order as `entry/name`.
    pub fn resolve(&self, name: &str, probe: &dyn FileProbe) -> Result<String, PathError> {
        if probe.is_readable(name) {
            return Ok(name.to_string());
        }
        self.candidates(name)
            .find(|candidate| probe.is_readable(candidate))
            .ok_or_else(|| PathError::CommandNotFound(name.to_string()))
    }

    /// Every `entry/name` path in search order.
    pub fn candidates<'a>(&'a self, name: &'a str) -> impl Iterator<Item = String> + 'a {
        self.entries
            .iter()
            .map(move |entry| format!("{}/{}", entry, name))
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list())
    }
}

fn normalize(dir: &str) -> &str {
    if dir.len() > 1 {
        dir.strip_suffix('/').unwrap_or(dir)
    } else {
        dir
    }
}
