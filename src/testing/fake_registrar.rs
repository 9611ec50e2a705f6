use std::cell::RefCell;

use crate::domain::{AppError, HttpCredentials, RegistrationResult};
use crate::ports::{AppRegistrar, RegistrationRequest};

/// What the fake saw for one registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRegistration {
    pub app_name: String,
    pub weblib_name: String,
    pub hostname: String,
    pub http_auth: Option<HttpCredentials>,
}

/// Registrar answering with a fixed result, or failing with a fixed status.
pub struct FakeRegistrar {
    pub requests: RefCell<Vec<RecordedRegistration>>,
    pub fail_with_status: Option<u16>,
}

impl FakeRegistrar {
    pub fn new() -> Self {
        Self { requests: RefCell::new(Vec::new()), fail_with_status: None }
    }

    pub fn failing(status: u16) -> Self {
        Self { fail_with_status: Some(status), ..Self::new() }
    }

    pub fn recorded(&self) -> Vec<RecordedRegistration> {
        self.requests.borrow().clone()
    }
}

impl AppRegistrar for FakeRegistrar {
    fn register(&self, request: &RegistrationRequest<'_>) -> Result<RegistrationResult, AppError> {
        self.requests.borrow_mut().push(RecordedRegistration {
            app_name: request.identifiers.upper_app_name.clone(),
            weblib_name: request.weblib_name.to_string(),
            hostname: request.coordinates.hostname.clone(),
            http_auth: request.http_auth.cloned(),
        });

        if let Some(status) = self.fail_with_status {
            return Err(AppError::RegistrationFailed { status });
        }
        Ok(RegistrationResult::fallback(
            request.coordinates,
            request.identifiers,
            request.weblib_name,
        ))
    }
}
