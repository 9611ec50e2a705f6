mod browser;
mod command_runner;
mod defaults_store;
mod prompter;
mod registrar;

pub use browser::{BrowserLauncher, NoopBrowser};
pub use command_runner::{CommandInvocation, CommandRunner};
pub use defaults_store::DefaultsStore;
pub use prompter::Prompter;
pub use registrar::{AppRegistrar, RegistrationRequest};
