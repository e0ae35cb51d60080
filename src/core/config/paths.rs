use std::path::PathBuf;

use crate::core::env::EnvPaths;
use crate::flags::Flags;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Startup file, if one applies.
    pub rc_path: Option<PathBuf>,
    /// Whether `rc_path` was named on the command line and so must exist.
    pub rc_explicit: bool,
    pub history_path: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn new(flags: &Flags) -> Self {
        Self::resolve(flags, EnvPaths::new().ok())
    }

    pub fn resolve(flags: &Flags, env: Option<EnvPaths>) -> Self {
        let history_path = env.as_ref().map(EnvPaths::history_file);
        match flags.get_value("config") {
            Some(path) => ConfigPaths {
                rc_path: Some(PathBuf::from(path)),
                rc_explicit: true,
                history_path,
            },
            None => ConfigPaths {
                rc_path: env.as_ref().map(EnvPaths::rc_file),
                rc_explicit: false,
                history_path,
            },
        }
    }
}
