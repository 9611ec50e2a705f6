//! App registration port definition.

use crate::domain::{
    AppError, DerivedIdentifiers, HttpCredentials, RegistrationResult, ServerCoordinates,
    WeblibName,
};

/// Request to register an app on the PeopleSoft server.
#[derive(Debug, Clone)]
pub struct RegistrationRequest<'a> {
    pub coordinates: &'a ServerCoordinates,
    pub identifiers: &'a DerivedIdentifiers,
    pub weblib_name: &'a WeblibName,
    /// Basic-auth credentials, when the server sits behind HTTP authentication.
    pub http_auth: Option<&'a HttpCredentials>,
}

/// Port for the remote registration endpoint.
pub trait AppRegistrar {
    /// Sign on and register the app. A single attempt; failures are fatal.
    fn register(&self, request: &RegistrationRequest<'_>) -> Result<RegistrationResult, AppError>;
}
