use url::Url;

use crate::domain::peoplesoft::WEBLIB_PREFIX;

pub const APP_NAME_MAX_LEN: usize = 30;
pub const WEBLIB_NAME_MAX_LEN: usize = 15;

/// Validates a raw application name as typed by the user.
///
/// Checks:
/// - Non-empty
/// - At most 30 characters
/// - No digits
/// - Characters are ASCII letters, '_', '-', or ' '
/// - Does not start with '-'
/// - At least one letter
pub fn validate_app_name(raw: &str) -> Result<(), String> {
    if raw.trim().is_empty() {
        return Err("App name cannot be empty".to_string());
    }
    if raw.chars().count() > APP_NAME_MAX_LEN {
        return Err(format!("App name must be {} characters or fewer", APP_NAME_MAX_LEN));
    }
    if raw.chars().any(|c| c.is_ascii_digit()) {
        return Err("App name cannot contain numbers".to_string());
    }
    if !raw.chars().all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-' || c == ' ') {
        return Err(
            "App name may only contain letters, underscores, hyphens, and spaces".to_string()
        );
    }
    if raw.trim_start().starts_with('-') {
        return Err("App name cannot start with a hyphen".to_string());
    }
    if !raw.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("App name must contain at least one letter".to_string());
    }
    Ok(())
}

/// Validates a server hostname, optionally with a port.
///
/// Rejects anything that would change the request URL beyond its host:
/// paths, credentials, queries, and fragments.
pub fn validate_hostname(raw: &str) -> Result<(), String> {
    let host = raw.trim();
    if host.is_empty() {
        return Err("Hostname cannot be empty".to_string());
    }
    if host.contains(['/', '@', '?', '#']) || host.chars().any(char::is_whitespace) {
        return Err(format!("'{}' is not a bare hostname (Ex: dev-ps.example.com)", host));
    }
    match Url::parse(&format!("https://{}", host)) {
        Ok(url) if url.host_str().is_some() => Ok(()),
        _ => Err(format!("'{}' is not a valid hostname", host)),
    }
}

/// Validates a weblib name.
///
/// Checks:
/// - Non-empty
/// - At most 15 characters
/// - Starts with `WEBLIB_` (case-insensitive)
/// - Characters are ASCII alphanumeric or '_'
pub fn validate_weblib_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Weblib name cannot be empty".to_string());
    }
    if name.chars().count() > WEBLIB_NAME_MAX_LEN {
        return Err(format!("Weblib name must be {} characters or fewer", WEBLIB_NAME_MAX_LEN));
    }
    let has_prefix = name
        .get(..WEBLIB_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(WEBLIB_PREFIX));
    if !has_prefix {
        return Err(format!("Weblib name must start with {}", WEBLIB_PREFIX));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("Weblib name may only contain letters, numbers, and underscores".to_string());
    }
    Ok(())
}

/// Validates a required free-text answer.
pub fn validate_required(value: &str) -> Result<(), String> {
    if value.trim().is_empty() { Err("A value is required".to_string()) } else { Ok(()) }
}

#[macro_export]
macro_rules! impl_validated_name {
    ($name:ident, $validate:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(value: &str) -> Result<Self, $crate::domain::AppError> {
                $validate(value).map_err($crate::domain::AppError::Validation)?;
                Ok(Self(value.to_string()))
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
