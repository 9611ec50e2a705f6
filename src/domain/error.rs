use std::io;

use thiserror::Error;

/// Library-wide error type for create-ps-app operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// An answer or identifier failed its validation rule.
    #[error("{0}")]
    Validation(String),

    /// Unsupported runtime found on this machine.
    #[error("{0}")]
    Environment(String),

    /// Project directory could not be created (other than "already exists").
    #[error("Could not create {path} directory: {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Template rendering failed.
    #[error("Failed to render {template}: {reason}")]
    Template { template: String, reason: String },

    /// JSON serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Signing on to the PeopleSoft server failed.
    #[error("PeopleSoft sign-on failed: {0}")]
    SignOn(String),

    /// The registration endpoint answered with a non-200 status.
    #[error("Failed to create PeopleSoft app (HTTP {status})")]
    RegistrationFailed { status: u16 },

    /// The registration body was neither a descriptor nor an "already exists" notice.
    #[error("Unexpected registration response: {0}")]
    RegistrationResponse(#[source] serde_json::Error),

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// External command exited unsuccessfully.
    #[error("Command '{command}' failed{}", exit_suffix(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// External command could not be started at all.
    #[error("Could not start '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// `$HOME` could not be resolved.
    #[error("Could not determine home directory")]
    HomeDirectoryMissing,
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}")).unwrap_or_default()
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DirectoryCreation { source, .. } | AppError::CommandSpawn { source, .. } => {
                source.kind()
            }
            AppError::Validation(_)
            | AppError::Json(_)
            | AppError::Template { .. }
            | AppError::RegistrationResponse(_) => io::ErrorKind::InvalidInput,
            AppError::Environment(_) | AppError::HomeDirectoryMissing => io::ErrorKind::NotFound,
            AppError::SignOn(_) => io::ErrorKind::PermissionDenied,
            AppError::Prompt(_)
            | AppError::RegistrationFailed { .. }
            | AppError::Http(_)
            | AppError::CommandFailed { .. } => io::ErrorKind::Other,
        }
    }
}
