use std::{fs, path::Path};

use rustyline::completion::Pair;

/// Completes file and directory names for arguments.
#[derive(Clone, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        // "dir/pre" searches dir for names starting with "pre"
        let (dir, prefix) = match incomplete.rfind('/') {
            Some(slash) => (&incomplete[..=slash], &incomplete[slash + 1..]),
            None => ("", incomplete),
        };
        let search = if dir.is_empty() { "." } else { dir };

        let Ok(entries) = fs::read_dir(search) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) || (name.starts_with('.') && !prefix.starts_with('.')) {
                    return None;
                }
                let full = format!("{}{}", dir, name);
                Some(if Path::new(search).join(&name).is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", full),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", full),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_complete_in_directory() -> std::io::Result<()> {
        let dir = env::temp_dir().join("burrow_path_completion");
        fs::create_dir_all(dir.join("subdir"))?;
        fs::write(dir.join("subfile"), "")?;
        fs::write(dir.join(".subhidden"), "")?;

        let completer = PathCompleter::new();
        let base = format!("{}/", dir.display());
        let matches = completer.complete_path(&format!("{}sub", base));

        let replacements: Vec<String> = matches.into_iter().map(|p| p.replacement).collect();
        assert_eq!(
            replacements,
            vec![format!("{}subdir/", base), format!("{}subfile ", base)]
        );

        fs::remove_dir_all(dir)?;
        Ok(())
    }

    #[test]
    fn test_missing_directory_has_no_matches() {
        let completer = PathCompleter::new();
        assert!(completer.complete_path("/no/such/burrow/dir/x").is_empty());
    }
}
