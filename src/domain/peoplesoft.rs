//! Fixed PeopleSoft protocol constants.

/// Every weblib name starts with this prefix.
pub const WEBLIB_PREFIX: &str = "WEBLIB_";

/// Portal segment used in every content URL.
pub const PORTAL: &str = "EMPLOYEE";

/// Weblib field formula that registers new apps on the server.
pub const CREATOR_ISCRIPT: &str = "WEBLIB_H_DEV.ISCRIPT1.FieldFormula.IScript_CreatePSApp";

/// IScript serving an app's HTML shell.
pub const MAIN_ISCRIPT: &str = "ISCRIPT1.FieldFormula.IScript_Main";

/// Substring in a non-JSON registration body meaning the app is already registered.
pub const ALREADY_EXISTS_MARKER: &str = "already exists";

/// npm package that uploads built assets to the server.
pub const DEPLOY_HELPER_PACKAGE: &str = "@highpoint/send-to-peoplesoft";

/// Version range pinned for [`DEPLOY_HELPER_PACKAGE`].
pub const DEPLOY_HELPER_VERSION: &str = "^2.1.0";

/// Binary name the deploy helper installs.
pub const DEPLOY_HELPER_BIN: &str = "send-to-peoplesoft";

/// Documentation for local development against a live server.
pub const DOCS_URL: &str = "https://cooperjones.github.io/hpt-docs/?path=/docs/welcome-installation--page";
