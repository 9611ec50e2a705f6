//! `package.json` rendering and merging.

use serde_json::{Map, Value, json};

use super::peoplesoft::{DEPLOY_HELPER_BIN, DEPLOY_HELPER_PACKAGE, DEPLOY_HELPER_VERSION};
use super::project::{ENTRY_SCRIPT, PACKAGE_MANAGER};

const SCRIPTS: &str = "scripts";
const DEV_DEPENDENCIES: &str = "devDependencies";
const DEPLOY: &str = "deploy";

#[derive(Debug, Clone, Copy)]
pub struct ManifestParams<'a> {
    pub build_folder: &'a str,
    /// Base name of the HTML shell and stylesheet.
    pub asset_name: &'a str,
    pub has_http_auth: bool,
}

/// `send-to-peoplesoft -d <folder>`, plus `--with-auth` behind HTTP auth.
pub fn deploy_script(build_folder: &str, has_http_auth: bool) -> String {
    let mut script = format!("{} -d {}", DEPLOY_HELPER_BIN, build_folder);
    if has_http_auth {
        script.push_str(" --with-auth");
    }
    script
}

/// The manifest this tool would write into an empty directory.
pub fn render_manifest(params: ManifestParams<'_>) -> Value {
    let ManifestParams { build_folder, asset_name, has_http_auth } = params;
    json!({
        "name": "my-peoplesoft-app",
        "version": "0.1.0",
        "description": "app bootstrapped with Create PeopleSoft App",
        "main": ENTRY_SCRIPT,
        "license": "UNLICENSED",
        SCRIPTS: {
            DEPLOY: deploy_script(build_folder, has_http_auth),
            "clean": format!("mkdirp {0} && rimraf {0}/*", build_folder),
            "copy-assets": format!("cp {0}.css {0}.html {1}", asset_name, build_folder),
            "prebuild": format!("{0} clean && {0} copy-assets", PACKAGE_MANAGER),
            "build": "webpack --mode production",
            "prestart": format!("{0} clean && {0} copy-assets", PACKAGE_MANAGER),
            "start": "webpack-dev-server --mode development"
        },
        DEV_DEPENDENCIES: {
            DEPLOY_HELPER_PACKAGE: DEPLOY_HELPER_VERSION
        }
    })
}

/// Parse a pre-existing manifest, treating unreadable content as empty.
pub fn parse_existing(content: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!("existing package.json is not a JSON object; replacing it");
            Map::new()
        }
        Err(err) => {
            tracing::warn!("existing package.json could not be parsed ({}); replacing it", err);
            Map::new()
        }
    }
}

/// Merge the generated manifest over an existing one.
///
/// Precedence, lowest first:
/// - top-level keys: generated < existing
/// - `scripts` and `devDependencies`: generated < existing < the tool's own
///   `deploy` script and deploy helper version
pub fn merge_manifest(existing: Map<String, Value>, generated: &Value) -> Value {
    let empty = Map::new();
    let generated = generated.as_object().unwrap_or(&empty);

    let mut merged = generated.clone();
    for (key, value) in &existing {
        if key != SCRIPTS && key != DEV_DEPENDENCIES {
            merged.insert(key.clone(), value.clone());
        }
    }

    let mut scripts = table(generated, SCRIPTS);
    scripts.extend(table(&existing, SCRIPTS));
    if let Some(deploy) = generated.get(SCRIPTS).and_then(|s| s.get(DEPLOY)) {
        scripts.insert(DEPLOY.to_string(), deploy.clone());
    }

    let mut dev_dependencies = table(generated, DEV_DEPENDENCIES);
    dev_dependencies.extend(table(&existing, DEV_DEPENDENCIES));
    dev_dependencies.insert(
        DEPLOY_HELPER_PACKAGE.to_string(),
        Value::String(DEPLOY_HELPER_VERSION.to_string()),
    );

    merged.insert(SCRIPTS.to_string(), Value::Object(scripts));
    merged.insert(DEV_DEPENDENCIES.to_string(), Value::Object(dev_dependencies));
    Value::Object(merged)
}

fn table(map: &Map<String, Value>, key: &str) -> Map<String, Value> {
    map.get(key).and_then(Value::as_object).cloned().unwrap_or_default()
}

/// Pretty JSON with a trailing newline.
pub fn to_pretty_string(manifest: &Value) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(manifest)?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn generated(has_http_auth: bool) -> Value {
        render_manifest(ManifestParams { build_folder: "dist", asset_name: "demo_app", has_http_auth })
    }

    #[test]
    fn deploy_script_without_auth_has_no_suffix() {
        assert_eq!(generated(false)["scripts"]["deploy"], "send-to-peoplesoft -d dist");
    }

    #[test]
    fn deploy_script_with_auth() {
        assert_eq!(generated(true)["scripts"]["deploy"], "send-to-peoplesoft -d dist --with-auth");
    }

    #[test]
    fn scripts_interpolate_folder_and_assets() {
        let manifest = generated(false);
        assert_eq!(manifest["scripts"]["clean"], "mkdirp dist && rimraf dist/*");
        assert_eq!(manifest["scripts"]["copy-assets"], "cp demo_app.css demo_app.html dist");
        assert_eq!(manifest["scripts"]["prebuild"], "yarn clean && yarn copy-assets");
        assert_eq!(manifest["license"], "UNLICENSED");
    }

    #[test]
    fn merge_keeps_custom_entries_and_forces_tool_entries() {
        let existing = parse_existing(
            r#"{
                "name": "custom-name",
                "scripts": { "lint": "eslint .", "deploy": "old deploy" },
                "devDependencies": { "eslint": "^8.0.0", "@highpoint/send-to-peoplesoft": "^0.1.0" }
            }"#,
        );
        let merged = merge_manifest(existing, &generated(true));

        assert_eq!(merged["name"], "custom-name");
        assert_eq!(merged["scripts"]["lint"], "eslint .");
        assert_eq!(merged["scripts"]["deploy"], "send-to-peoplesoft -d dist --with-auth");
        assert_eq!(merged["scripts"]["build"], "webpack --mode production");
        assert_eq!(merged["devDependencies"]["eslint"], "^8.0.0");
        assert_eq!(merged["devDependencies"][DEPLOY_HELPER_PACKAGE], DEPLOY_HELPER_VERSION);
    }

    #[test]
    fn unparseable_manifest_is_treated_as_empty() {
        assert!(parse_existing("{ not json").is_empty());
        assert!(parse_existing("[1, 2]").is_empty());
        let merged = merge_manifest(parse_existing("garbage"), &generated(false));
        assert_eq!(merged, generated(false));
    }

    #[test]
    fn pretty_output_ends_with_newline() {
        let rendered = to_pretty_string(&generated(false)).unwrap();
        assert!(rendered.ends_with("}\n"));
        assert!(rendered.starts_with("{\n  \"name\": \"my-peoplesoft-app\""));
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(
            custom in proptest::collection::btree_map("[a-z]{1,8}", "[a-z ]{0,12}", 0..6),
            has_http_auth in any::<bool>(),
        ) {
            let mut scripts = Map::new();
            for (key, value) in &custom {
                scripts.insert(key.clone(), Value::String(value.clone()));
            }
            let mut existing = Map::new();
            existing.insert("scripts".to_string(), Value::Object(scripts));

            let once = merge_manifest(existing, &generated(has_http_auth));
            let twice = merge_manifest(once.as_object().cloned().unwrap(), &generated(has_http_auth));

            prop_assert_eq!(&once["scripts"]["deploy"], &twice["scripts"]["deploy"]);
            prop_assert_eq!(&once["devDependencies"], &twice["devDependencies"]);
            for key in custom.keys().filter(|key| key.as_str() != "deploy") {
                prop_assert_eq!(&twice["scripts"][key.as_str()], &once["scripts"][key.as_str()]);
            }
            prop_assert_eq!(once, twice);
        }
    }
}
