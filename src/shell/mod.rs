use std::io::{self, IsTerminal, Write};
use std::path::Path;

mod executor;

use crate::{
    core::{
        commands::{CommandDispatcher, Flow},
        config::Config,
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    input::{EditorLineSource, LineSource, RawLineReader},
    report::Reporter,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) state: ShellState,
    pub(crate) dispatcher: CommandDispatcher,
    pub(crate) config: Config,
    pub(crate) reporter: Reporter,
    pub(crate) source: Box<dyn LineSource>,
    pub(crate) out: Box<dyn Write>,
}

impl Shell {
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let reporter = Reporter::from_flags(flags);
        let config = Config::new(flags);

        let source: Box<dyn LineSource> = if io::stdin().is_terminal() {
            let history = config.history_path().map(Path::to_path_buf);
            Box::new(EditorLineSource::new(history, &reporter)?)
        } else {
            Box::new(RawLineReader::new(io::stdin().lock(), io::stdout()))
        };

        Ok(Self::with_parts(
            ShellState::new(),
            CommandDispatcher::new(),
            config,
            reporter,
            source,
            Box::new(io::stdout()),
        ))
    }

    pub fn with_parts(
        state: ShellState,
        dispatcher: CommandDispatcher,
        config: Config,
        reporter: Reporter,
        source: Box<dyn LineSource>,
        out: Box<dyn Write>,
    ) -> Self {
        Shell {
            state,
            dispatcher,
            config,
            reporter,
            source,
            out,
        }
    }

    /// Runs the startup file and then the prompt loop. Returns the process
    /// exit status.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let flow = self.config.load(
            &self.dispatcher,
            &mut self.state,
            &mut *self.out,
            &self.reporter,
        )?;
        if let Flow::Exit(code) = flow {
            return Ok(self.finish(code));
        }

        loop {
            self.state.sync();
            self.source.refresh(&self.state);

            let prompt = self.state.prompt();
            let Some(line) = self.source.read_line(&prompt)? else {
                self.reporter.debug("end of input");
                return Ok(self.finish(0));
            };

            if let Flow::Exit(code) = self.execute_command(&line) {
                writeln!(self.out, "[Process completed]")?;
                return Ok(self.finish(code));
            }
        }
    }

    fn finish(&mut self, code: i32) -> i32 {
        if let Err(e) = self.source.save() {
            self.reporter.warning(format!("Couldn't save history: {}", e));
        }
        if let Err(e) = self.out.flush() {
            self.reporter.warning(format!("Couldn't flush output: {}", e));
        }
        code
    }
}
