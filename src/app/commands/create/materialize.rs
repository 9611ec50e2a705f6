//! Project files written before and after registration.

use crate::adapters::assets::add_boilerplate;
use crate::adapters::project_filesystem::{DirectoryState, ProjectDirectory};
use crate::domain::manifest::{self, ManifestParams};
use crate::domain::project::{
    BUILD_FOLDER, BUNDLER_CONFIG_FILE, DEPENDENCY_DIR, ENTRY_SCRIPT, ENV_FILE, IGNORE_FILE,
    MANIFEST_FILE, html_file,
};
use crate::domain::templates::{
    BundlerParams, DevServerMode, HtmlMode, HtmlParams, IgnoreParams, render_bundler_config,
    render_html, render_ignore_file,
};
use crate::domain::{
    AppError, DerivedIdentifiers, FileSource, GeneratedFileSet, RegistrationResult, SessionInput,
    env_file::serialize_env,
};

/// Files that do not depend on the registration outcome.
///
/// One-time scaffolding (boilerplate and ignore file) is only added when the
/// directory was just created. The manifest is merged over whatever is on disk.
pub(super) fn scaffold_files(
    project: &ProjectDirectory,
    state: DirectoryState,
    session: &SessionInput,
    identifiers: &DerivedIdentifiers,
    spa: bool,
) -> Result<GeneratedFileSet, AppError> {
    let asset_name = identifiers.directory.as_str();
    let mut files = GeneratedFileSet::new();

    if state.is_new() {
        add_boilerplate(&mut files, asset_name)?;
        files.add(
            IGNORE_FILE,
            FileSource::Rendered(render_ignore_file(IgnoreParams {
                dependency_dir: DEPENDENCY_DIR,
                build_folder: BUILD_FOLDER,
                env_file: ENV_FILE,
            })),
        )?;
    }

    let generated = manifest::render_manifest(ManifestParams {
        build_folder: BUILD_FOLDER,
        asset_name,
        has_http_auth: session.has_http_auth(),
    });
    let existing = project
        .read_optional(MANIFEST_FILE)
        .map(|content| manifest::parse_existing(&content))
        .unwrap_or_default();
    let merged = manifest::merge_manifest(existing, &generated);
    files.add(MANIFEST_FILE, FileSource::Rendered(manifest::to_pretty_string(&merged)?))?;

    let dev_server = if spa { DevServerMode::HistoryFallback } else { DevServerMode::Https };
    files.add(
        BUNDLER_CONFIG_FILE,
        FileSource::Rendered(render_bundler_config(BundlerParams {
            asset_name,
            build_folder: BUILD_FOLDER,
            entry_script: ENTRY_SCRIPT,
            dependency_dir: DEPENDENCY_DIR,
            dev_server,
        })?),
    )?;

    files.add(ENV_FILE, FileSource::Rendered(serialize_env(&session.env_entries())))?;

    Ok(files)
}

/// The HTML shell, which embeds the registered app URL.
pub(super) fn html_shell(
    session: &SessionInput,
    identifiers: &DerivedIdentifiers,
    registration: &RegistrationResult,
    spa: bool,
) -> Result<GeneratedFileSet, AppError> {
    let url = registration.app_url.as_str();
    let mode = if spa { HtmlMode::DataSource(url) } else { HtmlMode::BaseHref(url) };
    let html = render_html(HtmlParams {
        title: session.app_name.as_str(),
        asset_name: &identifiers.directory,
        mode,
    })?;

    let mut files = GeneratedFileSet::new();
    files.add(html_file(&identifiers.directory), FileSource::Rendered(html))?;
    Ok(files)
}
