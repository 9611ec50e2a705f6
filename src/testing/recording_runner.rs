use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{CommandInvocation, CommandRunner};

/// Runner recording every command line instead of spawning anything.
pub struct RecordingRunner {
    pub commands: RefCell<Vec<CommandInvocation>>,
    pub node_version: String,
    /// Command line (as displayed) that exits with status 1.
    pub fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self { commands: RefCell::new(Vec::new()), node_version: "v18.12.1".into(), fail_on: None }
    }

    pub fn with_node(version: &str) -> Self {
        Self { node_version: version.to_string(), ..Self::new() }
    }

    pub fn failing_on(command: &str) -> Self {
        Self { fail_on: Some(command.to_string()), ..Self::new() }
    }

    /// Every recorded command line, in order.
    pub fn lines(&self) -> Vec<String> {
        self.commands.borrow().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<(), AppError> {
        self.commands.borrow_mut().push(invocation.clone());
        let line = invocation.to_string();
        if self.fail_on.as_deref() == Some(line.as_str()) {
            return Err(AppError::CommandFailed { command: line, code: Some(1) });
        }
        Ok(())
    }

    fn capture(&self, invocation: &CommandInvocation) -> Result<String, AppError> {
        self.commands.borrow_mut().push(invocation.clone());
        Ok(self.node_version.clone())
    }
}
