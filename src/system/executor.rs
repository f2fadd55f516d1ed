// src/system/executor.rs

//! Runs shell command lines.

use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Why a command line did not succeed.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The shell could not be started.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The command ran and failed.
    #[error("Command '{command}' exited with {status}.")]
    NonZeroExitStatus {
        /// The command line.
        command: String,
        /// Its exit status.
        status: ExitStatus,
    },
}

/// Builds the platform shell invocation for a full command line.
/// Lines may contain pipes, `&&` and a trailing `&`, so they are never split.
fn shell_command(command_line: &str) -> StdCommand {
    if cfg!(target_os = "windows") {
        let mut command = StdCommand::new("cmd");
        command.arg("/C").arg(command_line);
        command
    } else {
        let mut command = StdCommand::new("sh");
        command.arg("-c").arg(command_line);
        command
    }
}

/// Runs one shell command line and waits for the shell to return.
///
/// Background launches end with ` &`, so the shell returns right away and the
/// launched program is left running on its own. There is no timeout: a hung
/// command blocks the caller.
pub fn run_shell_line(command_line: &str) -> Result<(), ExecutionError> {
    let trimmed_command = command_line.trim();
    if trimmed_command.is_empty() {
        return Ok(()); // An empty command is a success, not an error.
    }

    log::trace!("Spawning shell for: {}", trimmed_command);
    let status = shell_command(trimmed_command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ExecutionError::CommandFailed(trimmed_command.to_string(), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(ExecutionError::NonZeroExitStatus {
            command: trimmed_command.to_string(),
            status,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_a_noop() {
        assert!(run_shell_line("   ").is_ok());
    }

    #[test]
    fn test_shell_features_are_available() {
        assert!(run_shell_line("true && echo piped | cat > /dev/null").is_ok());
    }

    #[test]
    fn test_non_zero_exit_is_reported() {
        let result = run_shell_line("exit 3");
        assert!(matches!(
            result,
            Err(ExecutionError::NonZeroExitStatus { ref command, .. }) if command == "exit 3"
        ));
    }
}
