mod completer;
mod editor;
pub mod raw;

pub use completer::ShellCompleter;
pub use editor::EditorLineSource;
pub use raw::RawLineReader;

use crate::core::state::ShellState;
use crate::error::ShellError;

/// Where the prompt loop gets its lines from.
pub trait LineSource {
    /// Shows `prompt` and reads one line without its newline. `None` means the
    /// input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;

    /// Called after each line so the source can track shell state.
    fn refresh(&mut self, _state: &ShellState) {}

    /// Flushes anything worth keeping across sessions.
    fn save(&mut self) -> Result<(), ShellError> {
        Ok(())
    }
}
