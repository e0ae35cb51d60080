use std::io;
use std::path::PathBuf;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::{LineSource, ShellCompleter};
use crate::core::state::ShellState;
use crate::error::ShellError;
use crate::report::Reporter;

/// Terminal input through `rustyline`, with completion and saved history.
pub struct EditorLineSource {
    editor: Editor<ShellCompleter, FileHistory>,
    history_file: Option<PathBuf>,
}

impl EditorLineSource {
    pub fn new(history_file: Option<PathBuf>, reporter: &Reporter) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));
        editor.set_auto_add_history(true);

        if let Some(path) = &history_file {
            match editor.load_history(path) {
                Ok(()) => {}
                Err(e) if is_missing_file(&e) => {}
                Err(e) => reporter.warning(format!(
                    "Couldn't load history from {}: {}",
                    path.display(),
                    e
                )),
            }
        }

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineSource for EditorLineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C drops the line being edited
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn refresh(&mut self, state: &ShellState) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.update_search_path(state.path.entries());
        }
    }

    fn save(&mut self) -> Result<(), ShellError> {
        if let Some(path) = &self.history_file {
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}

// A missing history file just means a first session.
fn is_missing_file(err: &ReadlineError) -> bool {
    matches!(err, ReadlineError::Io(e) if e.kind() == io::ErrorKind::NotFound)
}
