use super::{Command, CommandError, Context, Flow};

/// `pushd dir` enters `dir` and pushes it; bare `pushd` swaps the top two.
#[derive(Clone)]
pub struct PushdCommand;

impl Command for PushdCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let state = &mut *ctx.state;
        match args.first() {
            Some(dir) => state.stack.push(dir, state.cwd.as_mut())?,
            None => state.stack.swap_top_two(state.cwd.as_mut())?,
        }
        ctx.print_stack()?;
        Ok(Flow::Continue)
    }
}

/// `popd` returns to the entry below the top. Given any argument it only
/// lists the stack.
#[derive(Clone)]
pub struct PopdCommand;

impl Command for PopdCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        if args.is_empty() {
            let state = &mut *ctx.state;
            state.stack.pop(state.cwd.as_mut())?;
        }
        ctx.print_stack()?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct DirsCommand;

impl Command for DirsCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::OptionsNotSupported);
        }
        ctx.print_stack()?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::Harness;
    use super::*;
    use crate::core::dirstack::StackError;

    #[test]
    fn test_pushd_pushd_popd() {
        let mut sh = Harness::new();
        sh.run("pushd /tmp").unwrap();
        assert_eq!(sh.output(), "/tmp /home/user\n");

        sh.run("pushd /").unwrap();
        assert_eq!(sh.output(), "/ /tmp /home/user\n");

        sh.run("popd").unwrap();
        assert_eq!(sh.output(), "/tmp /home/user\n");
        assert_eq!(sh.cwd(), "/tmp");
    }

    #[test]
    fn test_pushd_failure_prints_nothing() {
        let mut sh = Harness::new();
        assert!(matches!(
            sh.run("pushd /missing"),
            Err(CommandError::Stack(StackError::ChangeDirectoryFailed(_)))
        ));
        assert!(sh.output().is_empty());
        assert_eq!(sh.state.stack.len(), 1);
    }

    #[test]
    fn test_bare_pushd_swaps() {
        let mut sh = Harness::new();
        sh.run("pushd /tmp").unwrap();
        sh.run("pushd").unwrap();
        assert_eq!(sh.output(), "/home/user /tmp\n");
        assert_eq!(sh.cwd(), "/home/user");

        sh.run("pushd").unwrap();
        assert_eq!(sh.output(), "/tmp /home/user\n");
        assert_eq!(sh.cwd(), "/tmp");
    }

    #[test]
    fn test_bare_pushd_alone_warns() {
        let mut sh = Harness::new();
        let err = sh.run("pushd").unwrap_err();
        assert!(matches!(err, CommandError::Stack(StackError::NoOtherDirectory)));
        assert_eq!(err.level(), crate::report::Level::Warning);
        assert!(sh.output().is_empty());
    }

    #[test]
    fn test_popd_at_base() {
        let mut sh = Harness::new();
        sh.run("popd").unwrap();
        assert_eq!(sh.output(), "/home/user\n");
        assert_eq!(sh.state.stack.len(), 1);
        assert_eq!(sh.cwd(), "/home/user");
    }

    #[test]
    fn test_popd_with_argument_only_lists() {
        let mut sh = Harness::new();
        sh.run("pushd /tmp").unwrap();
        sh.run("popd +1").unwrap();
        assert_eq!(sh.output(), "/tmp /home/user\n");
        assert_eq!(sh.state.stack.len(), 2);
        assert_eq!(sh.cwd(), "/tmp");
    }

    #[test]
    fn test_dirs() {
        let mut sh = Harness::new();
        sh.run("pushd /bin").unwrap();
        sh.run("dirs").unwrap();
        assert_eq!(sh.output(), "/bin /home/user\n");

        assert!(matches!(
            sh.run("dirs -v"),
            Err(CommandError::OptionsNotSupported)
        ));
        assert!(sh.output().is_empty());
    }

    #[test]
    fn test_base_follows_cd_between_prompts() {
        let mut sh = Harness::new();
        sh.run("cd /tmp").unwrap();
        sh.run("dirs").unwrap();
        assert_eq!(sh.output(), "/tmp\n");
    }
}
