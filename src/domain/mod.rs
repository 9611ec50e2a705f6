pub mod defaults;
pub mod env_file;
pub mod error;
pub mod file_set;
pub mod identifiers;
pub mod manifest;
pub mod peoplesoft;
pub mod project;
pub mod questions;
pub mod registration;
pub mod runtime;
pub mod session;
pub mod templates;

pub use defaults::LocalDefaults;
pub use error::AppError;
pub use file_set::{FileSource, GeneratedFile, GeneratedFileSet};
pub use identifiers::{AppName, DerivedIdentifiers, WeblibName};
pub use questions::{Answer, Answers, Question, QuestionKind};
pub use registration::RegistrationResult;
pub use session::{HttpCredentials, ServerCoordinates, SessionInput};
pub use templates::{DevServerMode, HtmlMode};
