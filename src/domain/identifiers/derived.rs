use url::form_urlencoded;

use super::AppName;
use crate::domain::peoplesoft::WEBLIB_PREFIX;

/// Number of upper-identifier characters kept after the weblib prefix.
const WEBLIB_STEM_LEN: usize = 8;

/// Every identifier derived from the raw app name.
///
/// All fields are pure functions of the input; nothing here is ever mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentifiers {
    /// Lowercase slug with whitespace runs collapsed to `_` (`demo_app`).
    pub directory: String,
    /// Form-urlencoded upper identifier, used in query strings.
    pub url_safe_app_name: String,
    /// Uppercase identifier sent as the registration `appName` (`DEMO_APP`).
    pub upper_app_name: String,
    /// Letters-only, lowercase (`demoapp`).
    pub js_safe_name: String,
    /// `WEBLIB_` plus the first eight upper characters (`WEBLIB_DEMO_APP`).
    pub default_weblib_name: String,
}

impl DerivedIdentifiers {
    pub fn derive(app_name: &AppName) -> Self {
        Self::from_raw(app_name.as_str())
    }

    pub(crate) fn from_raw(raw: &str) -> Self {
        let directory = slugify(raw);
        let upper_app_name: String = directory
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        let js_safe_name: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let stem: String = upper_app_name.chars().take(WEBLIB_STEM_LEN).collect();
        let url_safe_app_name = form_urlencoded::byte_serialize(upper_app_name.as_bytes()).collect();

        Self {
            directory,
            url_safe_app_name,
            default_weblib_name: format!("{}{}", WEBLIB_PREFIX, stem),
            upper_app_name,
            js_safe_name,
        }
    }
}

fn slugify(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_").to_lowercase()
}
