use std::fmt;

use super::questions::{Answers, names};
use super::{AppError, AppName, DerivedIdentifiers, WeblibName};

/// Where the PeopleSoft server lives and who signs on to it.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerCoordinates {
    pub hostname: String,
    /// Site name such as `csdev`.
    pub environment: String,
    /// Node such as `HRMS`.
    pub node: String,
    /// OPRID.
    pub username: String,
    pub password: String,
}

impl fmt::Debug for ServerCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerCoordinates")
            .field("hostname", &self.hostname)
            .field("environment", &self.environment)
            .field("node", &self.node)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Credentials for servers sitting behind HTTP basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for HttpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Everything the user answered for one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInput {
    pub app_name: AppName,
    pub weblib_name: WeblibName,
    pub coordinates: ServerCoordinates,
    /// `Some` when the server is under HTTP authentication.
    pub http_auth: Option<HttpCredentials>,
}

impl SessionInput {
    /// Build the session from collected answers, re-checking every rule.
    pub fn from_answers(answers: &Answers) -> Result<Self, AppError> {
        let app_name = AppName::new(answers.require_text(names::APP_NAME)?)?;
        let weblib_name = match answers.text(names::WEBLIB_NAME) {
            Some(value) if !value.is_empty() => WeblibName::new(value)?,
            _ => WeblibName::new(&DerivedIdentifiers::derive(&app_name).default_weblib_name)?,
        };

        let coordinates = ServerCoordinates {
            hostname: answers.require_text(names::PS_HOSTNAME)?.trim().to_string(),
            environment: answers.require_text(names::PS_ENVIRONMENT)?.trim().to_string(),
            node: answers.require_text(names::PS_NODE)?.trim().to_string(),
            username: answers.require_text(names::PS_USERNAME)?.to_string(),
            password: answers.require_text(names::PS_PASSWORD)?.to_string(),
        };

        let http_auth = if answers.confirmed(names::HAS_HTTP_AUTH) {
            Some(HttpCredentials {
                username: answers.text(names::HTTP_USERNAME).unwrap_or_default().to_string(),
                password: answers.text(names::HTTP_PASSWORD).unwrap_or_default().to_string(),
            })
        } else {
            None
        };

        Ok(Self { app_name, weblib_name, coordinates, http_auth })
    }

    pub fn has_http_auth(&self) -> bool {
        self.http_auth.is_some()
    }

    /// Answers that end up in the generated `.env`, identifiers excluded.
    pub fn env_entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![
            (names::PS_HOSTNAME, self.coordinates.hostname.as_str()),
            (names::PS_ENVIRONMENT, self.coordinates.environment.as_str()),
            (names::PS_NODE, self.coordinates.node.as_str()),
            (names::PS_USERNAME, self.coordinates.username.as_str()),
            (names::PS_PASSWORD, self.coordinates.password.as_str()),
        ];
        if let Some(auth) = &self.http_auth {
            entries.push((names::HTTP_USERNAME, auth.username.as_str()));
            entries.push((names::HTTP_PASSWORD, auth.password.as_str()));
        }
        entries
    }
}
