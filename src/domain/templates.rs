//! Text renderers for generated project files.
//!
//! Every renderer is a pure function from a small parameter struct to the
//! full file contents. Persisting the output is the caller's job.

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use std::sync::OnceLock;

use super::AppError;

const HTML_TEMPLATE: (&str, &str) = ("app.html", include_str!("../assets/templates/app.html.j2"));
const BUNDLER_TEMPLATE: (&str, &str) =
    ("webpack.config.js", include_str!("../assets/templates/webpack.config.js.j2"));

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn render(template: (&str, &str), ctx: minijinja::Value) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env
    });

    let (name, source) = template;
    env.render_named_str(name, source, ctx)
        .map_err(|e| AppError::Template { template: name.to_string(), reason: e.to_string() })
}

/// How the HTML shell learns the live app URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlMode<'a> {
    /// `<base href>` pointing at the app URL.
    BaseHref(&'a str),
    /// Inline script exposing the URL as `window.dataSourceUri`.
    DataSource(&'a str),
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlParams<'a> {
    pub title: &'a str,
    pub asset_name: &'a str,
    pub mode: HtmlMode<'a>,
}

pub fn render_html(params: HtmlParams<'_>) -> Result<String, AppError> {
    let (base_href, data_source) = match params.mode {
        HtmlMode::BaseHref(url) => (Some(url), None),
        HtmlMode::DataSource(url) => (None, Some(url)),
    };
    render(
        HTML_TEMPLATE,
        context! {
            title => params.title,
            asset_name => params.asset_name,
            base_href => base_href,
            data_source => data_source,
        },
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevServerMode {
    /// HTTPS dev server with host checking disabled.
    #[default]
    Https,
    /// Serve the HTML shell for every unknown route.
    HistoryFallback,
}

#[derive(Debug, Clone, Copy)]
pub struct BundlerParams<'a> {
    pub asset_name: &'a str,
    pub build_folder: &'a str,
    pub entry_script: &'a str,
    pub dependency_dir: &'a str,
    pub dev_server: DevServerMode,
}

pub fn render_bundler_config(params: BundlerParams<'_>) -> Result<String, AppError> {
    render(
        BUNDLER_TEMPLATE,
        context! {
            asset_name => params.asset_name,
            build_folder => params.build_folder,
            entry_script => params.entry_script,
            dependency_dir => params.dependency_dir,
            history_fallback => params.dev_server == DevServerMode::HistoryFallback,
        },
    )
}

#[derive(Debug, Clone, Copy)]
pub struct IgnoreParams<'a> {
    pub dependency_dir: &'a str,
    pub build_folder: &'a str,
    pub env_file: &'a str,
}

pub fn render_ignore_file(params: IgnoreParams<'_>) -> String {
    let mut rendered = [params.dependency_dir, params.env_file, params.build_folder].join("\n");
    rendered.push('\n');
    rendered
}
