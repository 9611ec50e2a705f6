//! The `create-ps-app` run: prompt, scaffold, register, build, deploy, report.

mod collect;
mod deploy;
mod materialize;
mod report;

use std::path::PathBuf;

use crate::adapters::project_filesystem::{DirectoryState, ProjectDirectory};
use crate::app::AppContext;
use crate::domain::questions::create_app_questions;
use crate::domain::{AppError, DerivedIdentifiers, LocalDefaults, RegistrationResult, SessionInput};
use crate::ports::{
    AppRegistrar, BrowserLauncher, CommandRunner, DefaultsStore, Prompter, RegistrationRequest,
};

/// Options for one create run.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Explicit target directory; the derived slug is used when `None`.
    pub project_dir: Option<PathBuf>,
    /// Directory relative targets resolve against.
    pub base_dir: PathBuf,
    pub skip_deploy: bool,
    pub open_browser: bool,
    /// Single-page-app HTML shell and dev server.
    pub spa: bool,
}

/// Result of a successful create run.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub project_root: PathBuf,
    pub directory_state: DirectoryState,
    pub registration: RegistrationResult,
    /// Whether the build and deploy steps ran.
    pub deployed: bool,
}

/// Execute the create command.
pub fn execute<P, D, R, C, B>(
    ctx: &AppContext<P, D, R, C, B>,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    P: Prompter,
    D: DefaultsStore,
    R: AppRegistrar,
    C: CommandRunner,
    B: BrowserLauncher,
{
    let defaults = ctx.defaults().load();

    if !options.skip_deploy {
        deploy::check_runtime(ctx.runner())?;
    }

    let suggested_name = options
        .project_dir
        .as_deref()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str());
    let questions = create_app_questions(&defaults, suggested_name);
    let answers = collect::collect_answers(ctx.prompter(), &questions)?;

    let session = SessionInput::from_answers(&answers)?;
    let identifiers = DerivedIdentifiers::derive(&session.app_name);
    tracing::debug!(?identifiers, "derived identifiers");

    let project_root = match &options.project_dir {
        Some(dir) => options.base_dir.join(dir),
        None => options.base_dir.join(&identifiers.directory),
    };
    let project = ProjectDirectory::new(project_root.clone());
    let directory_state = project.ensure()?;
    println!("✅ Project directory ready: {}", project_root.display());

    let files =
        materialize::scaffold_files(&project, directory_state, &session, &identifiers, options.spa)?;
    project.write_files(&files)?;
    println!("✅ Wrote {} project files", files.len());

    let registration = ctx.registrar().register(&RegistrationRequest {
        coordinates: &session.coordinates,
        identifiers: &identifiers,
        weblib_name: &session.weblib_name,
        http_auth: session.http_auth.as_ref(),
    })?;
    tracing::info!(app_url = %registration.app_url, "registered app");
    println!("✅ Registered {} on {}", session.weblib_name, session.coordinates.hostname);

    ctx.defaults().save(&LocalDefaults::from_session(&session))?;

    project.write_files(&materialize::html_shell(
        &session,
        &identifiers,
        &registration,
        options.spa,
    )?)?;

    let deployed = !options.skip_deploy;
    if deployed {
        deploy::build_and_deploy(ctx.runner(), &project_root, directory_state.is_new())?;
    }

    report::report(ctx.browser(), &project_root, &registration, deployed, options.open_browser);

    Ok(CreateOutcome { project_root, directory_state, registration, deployed })
}
