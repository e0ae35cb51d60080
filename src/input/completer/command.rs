use std::{collections::BTreeSet, fs};

use rustyline::completion::Pair;

use crate::core::commands::BUILTINS;

/// Completes command names: built-ins plus files in the search path.
#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
    search_path: Vec<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let mut completer = Self::default();
        completer.refresh_commands();
        completer
    }

    /// Rescans when the search path differs from the one last scanned.
    pub fn update_search_path(&mut self, entries: &[String]) {
        if self.search_path != entries {
            self.search_path = entries.to_vec();
            self.refresh_commands();
        }
    }

    pub fn refresh_commands(&mut self) {
        self.commands.clear();
        self.commands
            .extend(BUILTINS.iter().map(|name| name.to_string()));

        for dir in &self.search_path {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let is_file = entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false);
                if let (true, Some(name)) = (is_file, entry.file_name().to_str()) {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
