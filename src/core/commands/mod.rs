use std::io::Write;

mod cd;
mod exit;
mod path;
mod stack;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;
pub use stack::{DirsCommand, PopdCommand, PushdCommand};

use super::dirstack::StackError;
use super::search_path::PathError;
use super::state::ShellState;
use super::tokenizer::{self, ParseError, TokenList};
use crate::process::{ExitReport, ProcessError, ProcessExecutor};
use crate::report::{Level, Reporter};

/// Built-in names in the order they are matched.
pub const BUILTINS: [&str; 6] = ["exit", "cd", "pushd", "popd", "dirs", "path"];

#[derive(Debug)]
pub enum CommandError {
    TooManyArguments,
    Parse(ParseError),
    Stack(StackError),
    Path(PathError),
    Process(ProcessError),
    PathNotSpecified,
    InvalidArgument,
    OptionsNotSupported,
    IoError(std::io::Error),
}

impl CommandError {
    /// Level the error is reported at. Having no directory to swap with is
    /// only a warning.
    pub fn level(&self) -> Level {
        match self {
            CommandError::Stack(StackError::NoOtherDirectory) => Level::Warning,
            _ => Level::Error,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::TooManyArguments => write!(f, "too many arguments"),
            CommandError::Parse(err) => write!(f, "{}", err),
            CommandError::Stack(err) => write!(f, "{}", err),
            CommandError::Path(err) => write!(f, "{}", err),
            CommandError::Process(err) => write!(f, "{}", err),
            CommandError::PathNotSpecified => write!(f, "path not specified"),
            CommandError::InvalidArgument => write!(f, "invalid argument"),
            CommandError::OptionsNotSupported => write!(f, "options are not supported"),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ParseError> for CommandError {
    fn from(err: ParseError) -> Self {
        CommandError::Parse(err)
    }
}

impl From<StackError> for CommandError {
    fn from(err: StackError) -> Self {
        CommandError::Stack(err)
    }
}

impl From<PathError> for CommandError {
    fn from(err: PathError) -> Self {
        CommandError::Path(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

/// What the prompt loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

/// What a command gets to work with: the long-lived state, the stream for
/// listings, and the diagnostics channel.
pub struct Context<'a> {
    pub state: &'a mut ShellState,
    pub out: &'a mut dyn Write,
    pub reporter: &'a Reporter,
}

impl Context<'_> {
    pub(crate) fn print_stack(&mut self) -> Result<(), CommandError> {
        writeln!(self.out, "{}", self.state.stack.list())?;
        Ok(())
    }

    pub(crate) fn print_path(&mut self) -> Result<(), CommandError> {
        writeln!(self.out, "{}", self.state.path.list())?;
        Ok(())
    }
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Cd(CdCommand),
    Pushd(PushdCommand),
    Popd(PopdCommand),
    Dirs(DirsCommand),
    Path(PathCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Pushd(cmd) => cmd.execute(args, ctx),
            CommandType::Popd(cmd) => cmd.execute(args, ctx),
            CommandType::Dirs(cmd) => cmd.execute(args, ctx),
            CommandType::Path(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Routes a parsed line to a built-in or to an external program.
#[derive(Clone)]
pub struct CommandDispatcher {
    commands: Vec<(&'static str, CommandType)>,
    process_executor: ProcessExecutor,
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::with_home(dirs::home_dir().map(|home| home.to_string_lossy().into_owned()))
    }

    /// `home` is where a bare `cd` goes; `None` makes it a no-op.
    pub fn with_home(home: Option<String>) -> Self {
        let commands = vec![
            ("exit", CommandType::Exit(ExitCommand::new())),
            ("cd", CommandType::Cd(CdCommand::new(home))),
            ("pushd", CommandType::Pushd(PushdCommand)),
            ("popd", CommandType::Popd(PopdCommand)),
            ("dirs", CommandType::Dirs(DirsCommand)),
            ("path", CommandType::Path(PathCommand)),
        ];

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.lookup(command).is_some()
    }

    fn lookup(&self, command: &str) -> Option<&CommandType> {
        self.commands
            .iter()
            .find(|(name, _)| *name == command)
            .map(|(_, cmd)| cmd)
    }

    /// Tokenizes and runs one input line. Blank lines do nothing.
    pub fn execute_line(&self, line: &str, ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let tokens = tokenizer::parse(line)?;
        self.execute(&tokens, ctx)
    }

    pub fn execute(&self, tokens: &TokenList, ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let Some(command) = tokens.command() else {
            return Ok(Flow::Continue);
        };

        match self.lookup(command) {
            Some(cmd) => cmd.execute(tokens.args(), ctx),
            None => self.run_external(tokens.as_slice(), ctx),
        }
    }

    fn run_external(&self, argv: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let name = &argv[0];
        let program = ctx.state.path.resolve(name, ctx.state.probe.as_ref())?;
        ctx.reporter.debug(format!("{} resolved to {}", name, program));

        ctx.out.flush()?;
        match self.process_executor.spawn_and_wait(&program, argv)? {
            ExitReport::Success => {}
            ExitReport::Code(code) => {
                ctx.reporter.info(format!("process exited with status {}", code))
            }
            ExitReport::Signal(signal) => {
                ctx.reporter.info(format!("process terminated by signal {}", signal))
            }
            ExitReport::Unknown => ctx.reporter.info("process ended with unknown status"),
        }
        Ok(Flow::Continue)
    }
}
