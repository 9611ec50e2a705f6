use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::BrowserLauncher;

#[derive(Default)]
pub struct RecordingBrowser {
    pub opened: RefCell<Vec<String>>,
    pub should_fail: bool,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self { should_fail: true, ..Self::default() }
    }
}

impl BrowserLauncher for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::Io(std::io::Error::other("no browser available")));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
