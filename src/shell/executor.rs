use std::io::Write;

use crate::core::commands::{Context, Flow};

pub(crate) trait CommandHandler {
    /// Runs one input line. Failures are reported here and never end the
    /// loop; only `exit` does.
    fn execute_command(&mut self, line: &str) -> Flow;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Flow {
        let mut ctx = Context {
            state: &mut self.state,
            out: &mut *self.out,
            reporter: &self.reporter,
        };

        let result = self.dispatcher.execute_line(line, &mut ctx);
        if let Err(e) = self.out.flush() {
            self.reporter.warning(format!("Couldn't flush output: {}", e));
        }

        match result {
            Ok(flow) => flow,
            Err(e) => {
                self.reporter.report(e.level(), e);
                Flow::Continue
            }
        }
    }
}
