use std::fmt;
use std::path::PathBuf;

use crate::domain::AppError;

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir<P: Into<PathBuf>>(mut self, cwd: P) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Command line as the user would type it.
impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Port for spawning external tools.
pub trait CommandRunner {
    /// Run with inherited stdio and wait. Non-zero exit is an error.
    fn run(&self, invocation: &CommandInvocation) -> Result<(), AppError>;

    /// Run and return trimmed stdout.
    fn capture(&self, invocation: &CommandInvocation) -> Result<String, AppError>;
}
