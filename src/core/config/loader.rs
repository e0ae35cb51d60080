use std::{fs, io::Write, path::Path};

use super::{ConfigError, ConfigPaths};
use crate::core::commands::{CommandDispatcher, Context, Flow};
use crate::core::state::ShellState;
use crate::report::Reporter;

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Runs the startup file, if any, through `dispatcher`.
    pub fn load_configs(
        &self,
        dispatcher: &CommandDispatcher,
        ctx: &mut Context<'_>,
    ) -> Result<Flow, ConfigError> {
        let Some(path) = &self.paths.rc_path else {
            return Ok(Flow::Continue);
        };

        if !path.exists() {
            if self.paths.rc_explicit {
                return Err(ConfigError::ConfigFileNotFound(path.display().to_string()));
            }
            return Ok(Flow::Continue);
        }

        self.source(path, dispatcher, ctx)
    }

    fn source(
        &self,
        path: &Path,
        dispatcher: &CommandDispatcher,
        ctx: &mut Context<'_>,
    ) -> Result<Flow, ConfigError> {
        let content = fs::read_to_string(path)?;
        ctx.reporter.debug(format!("reading {}", path.display()));

        for (number, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match dispatcher.execute_line(trimmed, ctx) {
                Ok(Flow::Continue) => {}
                Ok(flow @ Flow::Exit(_)) => return Ok(flow),
                Err(e) => ctx.reporter.report(
                    e.level(),
                    format!("{}:{}: {}", path.display(), number + 1, e),
                ),
            }
            ctx.state.sync();
        }

        ctx.out.flush()?;
        Ok(Flow::Continue)
    }
}

/// Convenience for running a startup file against fresh state.
pub fn load_into(
    paths: &ConfigPaths,
    dispatcher: &CommandDispatcher,
    state: &mut ShellState,
    out: &mut dyn Write,
    reporter: &Reporter,
) -> Result<Flow, ConfigError> {
    let mut ctx = Context {
        state,
        out,
        reporter,
    };
    ConfigLoader::new(paths).load_configs(dispatcher, &mut ctx)
}
