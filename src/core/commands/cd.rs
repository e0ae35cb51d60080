use super::{Command, CommandError, Context, Flow};

#[derive(Clone)]
pub struct CdCommand {
    home: Option<String>,
}

impl CdCommand {
    pub fn new(home: Option<String>) -> Self {
        Self { home }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let target = match (args.first(), &self.home) {
            (Some(dir), _) => dir,
            (None, Some(home)) => home,
            (None, None) => return Ok(Flow::Continue),
        };

        let state = &mut *ctx.state;
        state.stack.replace_top(target, state.cwd.as_mut())?;
        Ok(Flow::Continue)
    }
}
