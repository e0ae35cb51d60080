//! Diagnostics written to standard error.
//!
//! Every message carries a level prefix (`ERROR:`, `WARNING:`, `INFO:`,
//! `DEBUG:`). `--quiet` silences `INFO:` only; errors and warnings always go
//! out. `DEBUG:` lines need `--debug`.

use std::fmt::Display;
use std::io::IsTerminal;

use crate::flags::Flags;
use crate::highlight::SyntaxHighlighter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Info,
    Debug,
}

impl Level {
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Error => "ERROR:",
            Level::Warning => "WARNING:",
            Level::Info => "INFO:",
            Level::Debug => "DEBUG:",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Reporter {
    quiet: bool,
    debug: bool,
    highlighter: SyntaxHighlighter,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    pub fn new(quiet: bool, debug: bool) -> Self {
        let highlighter = if std::io::stderr().is_terminal() {
            SyntaxHighlighter::new()
        } else {
            SyntaxHighlighter::plain()
        };
        Self {
            quiet,
            debug,
            highlighter,
        }
    }

    pub fn from_flags(flags: &Flags) -> Self {
        Self::new(flags.is_set("quiet"), flags.is_set("debug"))
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Error | Level::Warning => true,
            Level::Info => !self.quiet,
            Level::Debug => self.debug,
        }
    }

    /// The line that would be written for `message`, without color.
    pub fn format(level: Level, message: impl Display) -> String {
        format!("{} {}", level.prefix(), message)
    }

    pub fn error(&self, message: impl Display) {
        self.report(Level::Error, message);
    }

    pub fn warning(&self, message: impl Display) {
        self.report(Level::Warning, message);
    }

    pub fn info(&self, message: impl Display) {
        self.report(Level::Info, message);
    }

    pub fn debug(&self, message: impl Display) {
        self.report(Level::Debug, message);
    }

    pub fn report(&self, level: Level, message: impl Display) {
        if !self.enabled(level) {
            return;
        }
        let prefix = match level {
            Level::Error => self.highlighter.highlight_error(level.prefix()),
            Level::Warning => self.highlighter.highlight_warning(level.prefix()),
            Level::Info => self.highlighter.highlight_info(level.prefix()),
            Level::Debug => self.highlighter.highlight_hint(level.prefix()),
        };
        eprintln!("{} {}", prefix, message);
    }
}
