//! Registration endpoint addressing and response interpretation.

use serde::Deserialize;
use url::{Url, form_urlencoded};

use super::peoplesoft::{ALREADY_EXISTS_MARKER, CREATOR_ISCRIPT, MAIN_ISCRIPT, PORTAL};
use super::identifiers::validate_hostname;
use super::{AppError, DerivedIdentifiers, ServerCoordinates, WeblibName};

/// Where the live app can be reached once registered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResult {
    pub app_url: String,
    /// Request header that redirects asset loading to a local dev server.
    pub local_dev_header_name: String,
}

impl RegistrationResult {
    /// The pair the server would have answered, rebuilt from local identifiers.
    pub fn fallback(
        coordinates: &ServerCoordinates,
        identifiers: &DerivedIdentifiers,
        weblib_name: &WeblibName,
    ) -> Self {
        Self {
            app_url: format!(
                "https://{}/psc/{}/{}/{}/s/{}.{}",
                coordinates.hostname,
                coordinates.environment,
                PORTAL,
                coordinates.node,
                weblib_name,
                MAIN_ISCRIPT
            ),
            local_dev_header_name: format!("X-{}-Asset-Url", identifiers.upper_app_name),
        }
    }
}

/// `https://{hostname}`, the origin every request goes to.
pub fn server_origin(coordinates: &ServerCoordinates) -> Result<Url, AppError> {
    validate_hostname(&coordinates.hostname).map_err(AppError::Validation)?;
    Url::parse(&format!("https://{}", coordinates.hostname.trim())).map_err(|e| {
        AppError::validation(format!("Invalid hostname '{}': {}", coordinates.hostname, e))
    })
}

/// Registration URL under `origin`.
///
/// `/psc/{environment}/EMPLOYEE/{node}/s/{creator iscript}?postDataBin=y&appName=..&weblibName=..&scriptName=..`
pub fn registration_url(
    origin: &Url,
    coordinates: &ServerCoordinates,
    identifiers: &DerivedIdentifiers,
    weblib_name: &WeblibName,
) -> Result<Url, AppError> {
    let mut url = origin.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::validation(format!("Cannot build URLs under {}", origin)))?
        .pop_if_empty()
        .extend([
            "psc",
            coordinates.environment.as_str(),
            PORTAL,
            coordinates.node.as_str(),
            "s",
            CREATOR_ISCRIPT,
        ]);

    let query = format!(
        "postDataBin=y&appName={}&weblibName={}&scriptName={}",
        identifiers.url_safe_app_name,
        encode(weblib_name.as_str()),
        encode(&identifiers.js_safe_name),
    );
    url.set_query(Some(&query));
    Ok(url)
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Turn the registration response into a result.
///
/// Non-200 is fatal. A 200 body is either the JSON descriptor, or plain text
/// containing the "already exists" marker, in which case `fallback` is used.
/// Anything else re-raises the JSON parse error.
pub fn interpret_response(
    status: u16,
    body: &str,
    fallback: impl FnOnce() -> RegistrationResult,
) -> Result<RegistrationResult, AppError> {
    if status != 200 {
        return Err(AppError::RegistrationFailed { status });
    }

    match serde_json::from_str::<RegistrationResult>(body) {
        Ok(result) => Ok(result),
        Err(_) if body.contains(ALREADY_EXISTS_MARKER) => {
            tracing::info!("app is already registered; reusing it");
            Ok(fallback())
        }
        Err(err) => Err(AppError::RegistrationResponse(err)),
    }
}
