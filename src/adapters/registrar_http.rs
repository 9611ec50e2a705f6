//! PeopleSoft registration client implementation using reqwest.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::SET_COOKIE;
use url::Url;

use crate::domain::registration::{interpret_response, registration_url, server_origin};
use crate::domain::{AppError, HttpCredentials, RegistrationResult, ServerCoordinates};
use crate::ports::{AppRegistrar, RegistrationRequest};

const USER_AGENT: &str = concat!("create-ps-app/", env!("CARGO_PKG_VERSION"));
const SESSION_COOKIE: &str = "PS_TOKEN";

/// HTTP transport for the registration endpoint.
///
/// Each call signs on once, keeping the session cookie in the client's jar,
/// then issues a single registration POST. There are no retries.
#[derive(Debug, Clone)]
pub struct HttpAppRegistrar {
    client: Client,
    /// Overrides `https://{hostname}`, e.g. to reach a local test server.
    origin: Option<Url>,
}

impl HttpAppRegistrar {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, origin: None })
    }

    /// Send every request to `origin` instead of the session's hostname.
    pub fn with_origin(origin: Url) -> Result<Self, AppError> {
        Ok(Self { origin: Some(origin), ..Self::new()? })
    }

    fn origin_for(&self, coordinates: &ServerCoordinates) -> Result<Url, AppError> {
        match &self.origin {
            Some(origin) => Ok(origin.clone()),
            None => server_origin(coordinates),
        }
    }

    fn authorize(builder: RequestBuilder, http_auth: Option<&HttpCredentials>) -> RequestBuilder {
        match http_auth {
            Some(auth) => builder.basic_auth(&auth.username, Some(&auth.password)),
            None => builder,
        }
    }

    fn sign_on(
        &self,
        origin: &Url,
        coordinates: &ServerCoordinates,
        http_auth: Option<&HttpCredentials>,
    ) -> Result<(), AppError> {
        let mut url = origin.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::SignOn(format!("Cannot build URLs under {}", origin)))?
            .pop_if_empty()
            .extend(["psp", coordinates.environment.as_str(), ""]);
        url.set_query(Some("cmd=login&languageCd=ENG"));

        tracing::debug!(%url, "signing on");
        let form = [
            ("userid", coordinates.username.as_str()),
            ("pwd", coordinates.password.as_str()),
            ("timezoneOffset", "0"),
        ];
        let response = Self::authorize(self.client.post(url).form(&form), http_auth)
            .send()
            .map_err(|e| AppError::SignOn(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::SignOn(format!("server answered HTTP {}", status.as_u16())));
        }

        let has_session = response.headers().get_all(SET_COOKIE).iter().any(|value| {
            value.to_str().is_ok_and(|cookie| cookie.starts_with(&format!("{}=", SESSION_COOKIE)))
        });
        if !has_session {
            return Err(AppError::SignOn(format!(
                "no {} cookie returned; check the OPRID and password",
                SESSION_COOKIE
            )));
        }

        Ok(())
    }
}

impl AppRegistrar for HttpAppRegistrar {
    fn register(&self, request: &RegistrationRequest<'_>) -> Result<RegistrationResult, AppError> {
        let origin = self.origin_for(request.coordinates)?;
        self.sign_on(&origin, request.coordinates, request.http_auth)?;

        let url =
            registration_url(&origin, request.coordinates, request.identifiers, request.weblib_name)?;
        tracing::debug!(%url, "registering app");

        let response = Self::authorize(self.client.post(url), request.http_auth)
            .send()
            .map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let body = if status == 200 {
            response
                .text()
                .map_err(|e| AppError::Http(format!("Failed to read registration response: {}", e)))?
        } else {
            String::new()
        };

        interpret_response(status, &body, || {
            RegistrationResult::fallback(
                request.coordinates,
                request.identifiers,
                request.weblib_name,
            )
        })
    }
}
