use super::{Command, CommandError, Context, Flow};
use crate::core::search_path::AddOutcome;

/// `path` lists the search path, `path + dir` appends, `path - dir` removes.
#[derive(Clone)]
pub struct PathCommand;

impl Command for PathCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match args {
            [] => ctx.print_path()?,
            [_] => return Err(CommandError::PathNotSpecified),
            [op, dir, ..] => match op.as_str() {
                "+" => {
                    if ctx.state.path.add(dir)? == AddOutcome::AlreadyPresent {
                        ctx.reporter.info("the path already exists");
                    }
                    ctx.print_path()?;
                }
                "-" => {
                    if ctx.state.path.remove(dir) {
                        ctx.print_path()?;
                    } else {
                        ctx.reporter.warning("the path doesn't exist");
                    }
                }
                other => {
                    ctx.reporter.debug(format!("unknown path operator {}", other));
                    return Err(CommandError::InvalidArgument);
                }
            },
        }
        Ok(Flow::Continue)
    }
}
