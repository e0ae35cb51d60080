use std::borrow::Cow;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCompleter {
    pub fn new() -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(),
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn update_search_path(&mut self, entries: &[String]) {
        self.command_completer.update_search_path(entries);
    }

    /// Candidates for the word ending at `pos`, with the byte offset where
    /// that word starts. Words are separated by single spaces only.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];
        let start = before.rfind(' ').map_or(0, |i| i + 1);
        let word = &before[start..];

        if before[..start].trim_matches(' ').is_empty() {
            (start, self.command_completer.complete_command(word))
        } else {
            (start, self.path_completer.complete_path(word))
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighter.is_enabled() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.is_enabled()
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}
