use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandInvocation, CommandRunner};

/// Runs external tools as child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    fn command(invocation: &CommandInvocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }
        command
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<(), AppError> {
        tracing::debug!(command = %invocation, "spawning");
        let status = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| AppError::CommandSpawn { command: invocation.to_string(), source })?;

        if !status.success() {
            return Err(AppError::CommandFailed {
                command: invocation.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn capture(&self, invocation: &CommandInvocation) -> Result<String, AppError> {
        let output = Self::command(invocation)
            .output()
            .map_err(|source| AppError::CommandSpawn { command: invocation.to_string(), source })?;

        if !output.status.success() {
            return Err(AppError::CommandFailed {
                command: invocation.to_string(),
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
