use super::{Command, CommandError, Context, Flow};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match args {
            [] => Ok(Flow::Exit(0)),
            [status] => match exit_status(status) {
                Some(code) => Ok(Flow::Exit(code)),
                None => {
                    ctx.reporter.warning("numeric argument required");
                    Ok(Flow::Exit(0))
                }
            },
            _ => Err(CommandError::TooManyArguments),
        }
    }
}

/// Status byte for an all-digit argument, wrapping like a shell does.
fn exit_status(arg: &str) -> Option<i32> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let code = arg
        .bytes()
        .fold(0u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % 256);
    Some(code as i32)
}
