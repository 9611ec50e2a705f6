use crate::domain::AppError;

/// Port for opening URLs in the user's browser.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<(), AppError>;
}

/// Launcher that never opens anything (`--no-open`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBrowser;

impl BrowserLauncher for NoopBrowser {
    fn open(&self, _url: &str) -> Result<(), AppError> {
        Ok(())
    }
}
