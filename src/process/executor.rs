use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// How a finished child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReport {
    Success,
    Code(i32),
    Signal(i32),
    Unknown,
}

impl From<ExitStatus> for ExitReport {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            return ExitReport::Success;
        }
        if let Some(code) = status.code() {
            return ExitReport::Code(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitReport::Signal(signal);
            }
        }
        ExitReport::Unknown
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Launches `program` with `argv` (argv[0] included) and blocks until that
    /// child, and only that child, has terminated.
    pub fn spawn_and_wait(&self, program: &str, argv: &[String]) -> Result<ExitReport, ProcessError> {
        let name = argv.first().map(String::as_str).unwrap_or(program);

        let mut command = Command::new(launch_path(program));
        command
            .args(argv.iter().skip(1))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(name);
        }

        let mut child = command
            .spawn()
            .map_err(|e| ProcessError::SpawnFailed(name.to_string(), e))?;

        let status = child.wait().map_err(ProcessError::Wait)?;
        Ok(status.into())
    }
}

// A name without a slash is a file in the working directory, never a lookup
// through the environment's PATH.
fn launch_path(program: &str) -> PathBuf {
    if program.contains('/') {
        PathBuf::from(program)
    } else {
        Path::new(".").join(program)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_waits_for_exit_code() -> Result<(), ProcessError> {
        let executor = ProcessExecutor::new();
        let report = executor.spawn_and_wait("/bin/sh", &argv(&["sh", "-c", "exit 3"]))?;
        assert_eq!(report, ExitReport::Code(3));

        let report = executor.spawn_and_wait("/bin/sh", &argv(&["sh", "-c", "true"]))?;
        assert_eq!(report, ExitReport::Success);
        Ok(())
    }

    #[test]
    fn test_passes_argv_zero_as_typed() -> Result<(), ProcessError> {
        let executor = ProcessExecutor::new();
        let report = executor.spawn_and_wait(
            "/bin/sh",
            &argv(&["renamed", "-c", "test \"$0\" = renamed"]),
        )?;
        assert_eq!(report, ExitReport::Success);
        Ok(())
    }

    #[test]
    fn test_bare_name_runs_file_in_working_directory() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;
        use std::{env, fs};

        let _guard = crate::core::env::cwd_lock();
        let original = env::current_dir()?;
        let dir = env::temp_dir().join("burrow_cwd_exec");
        fs::create_dir_all(&dir)?;
        let tool = dir.join("burrow_cwd_tool");
        fs::write(&tool, "#!/bin/sh\nexit 7\n")?;
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755))?;

        env::set_current_dir(&dir)?;
        let result = ProcessExecutor::new()
            .spawn_and_wait("burrow_cwd_tool", &argv(&["burrow_cwd_tool"]));
        env::set_current_dir(original)?;
        fs::remove_dir_all(&dir)?;

        assert_eq!(result?, ExitReport::Code(7));
        Ok(())
    }

    #[test]
    fn test_launch_path() {
        assert_eq!(launch_path("tool"), PathBuf::from("./tool"));
        assert_eq!(launch_path("/bin/ls"), PathBuf::from("/bin/ls"));
        assert_eq!(launch_path("bin/tool"), PathBuf::from("bin/tool"));
    }

    #[test]
    fn test_spawn_failure() {
        let executor = ProcessExecutor::new();
        let result = executor.spawn_and_wait("/no/such/program", &argv(&["prog"]));
        match result {
            Err(ProcessError::SpawnFailed(name, _)) => assert_eq!(name, "prog"),
            other => panic!("expected spawn failure, got {:?}", other),
        }
    }
}
