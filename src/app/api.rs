//! API Facade for the application.
//!
//! Glues real adapters into an [`AppContext`] and runs a command against it.

use std::path::PathBuf;

use crate::adapters::browser_webbrowser::SystemBrowser;
use crate::adapters::command_process::ProcessCommandRunner;
use crate::adapters::defaults_file::JsonFileDefaultsStore;
use crate::adapters::prompter_dialoguer::DialoguerPrompter;
use crate::adapters::registrar_http::HttpAppRegistrar;
use crate::app::{AppContext, commands::create};
use crate::ports::{BrowserLauncher, NoopBrowser};

pub use crate::app::commands::create::{CreateOptions, CreateOutcome};
pub use crate::domain::AppError;

/// Flags accepted by a create run, before directories are resolved.
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    pub project_dir: Option<PathBuf>,
    pub skip_deploy: bool,
    pub no_open: bool,
    pub spa: bool,
}

/// Scaffold, register, and deploy an app under the current directory.
pub fn create(request: CreateRequest) -> Result<CreateOutcome, AppError> {
    create_at(std::env::current_dir()?, request)
}

/// Scaffold, register, and deploy an app under `base_dir`.
pub fn create_at(
    base_dir: impl Into<PathBuf>,
    request: CreateRequest,
) -> Result<CreateOutcome, AppError> {
    let options = CreateOptions {
        project_dir: request.project_dir,
        base_dir: base_dir.into(),
        skip_deploy: request.skip_deploy,
        open_browser: !request.no_open,
        spa: request.spa,
    };

    if request.no_open {
        run_create(NoopBrowser, &options)
    } else {
        run_create(SystemBrowser, &options)
    }
}

fn run_create<B: BrowserLauncher>(
    browser: B,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError> {
    let ctx = AppContext::new(
        DialoguerPrompter,
        JsonFileDefaultsStore::in_home()?,
        HttpAppRegistrar::new()?,
        ProcessCommandRunner,
        browser,
    );
    create::execute(&ctx, options)
}
