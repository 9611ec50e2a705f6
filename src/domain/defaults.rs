use serde::{Deserialize, Serialize};

use super::SessionInput;

/// Server coordinates remembered between runs. The app name is never saved.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_http_auth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_password: Option<String>,
}

impl std::fmt::Debug for LocalDefaults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalDefaults")
            .field("hostname", &self.hostname)
            .field("environment", &self.environment)
            .field("node", &self.node)
            .field("username", &self.username)
            .field("has_http_auth", &self.has_http_auth)
            .field("http_username", &self.http_username)
            .finish_non_exhaustive()
    }
}

impl LocalDefaults {
    pub fn from_session(session: &SessionInput) -> Self {
        let coordinates = &session.coordinates;
        Self {
            hostname: Some(coordinates.hostname.clone()),
            environment: Some(coordinates.environment.clone()),
            node: Some(coordinates.node.clone()),
            username: Some(coordinates.username.clone()),
            password: Some(coordinates.password.clone()),
            has_http_auth: Some(session.has_http_auth()),
            http_username: session.http_auth.as_ref().map(|auth| auth.username.clone()),
            http_password: session.http_auth.as_ref().map(|auth| auth.password.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_skips_missing() {
        let defaults = LocalDefaults {
            hostname: Some("dev-ps.example.com".into()),
            http_username: Some("u".into()),
            ..LocalDefaults::default()
        };
        let json = serde_json::to_string(&defaults).unwrap();
        assert_eq!(json, r#"{"hostname":"dev-ps.example.com","httpUsername":"u"}"#);
    }

    #[test]
    fn ignores_unknown_keys() {
        let defaults: LocalDefaults =
            serde_json::from_str(r#"{"node":"HRMS","appName":"ignored"}"#).unwrap();
        assert_eq!(defaults.node.as_deref(), Some("HRMS"));
    }

    #[test]
    fn debug_hides_passwords() {
        let defaults =
            LocalDefaults { password: Some("secret".into()), ..LocalDefaults::default() };
        assert!(!format!("{:?}", defaults).contains("secret"));
    }
}
