use crate::domain::AppError;
use crate::ports::BrowserLauncher;

/// Opens URLs in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), AppError> {
        webbrowser::open(url).map_err(AppError::Io)
    }
}
