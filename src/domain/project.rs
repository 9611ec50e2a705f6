//! Layout constants for generated projects.

/// Output folder for bundled assets.
pub const BUILD_FOLDER: &str = "dist";

/// Package manager dependency directory.
pub const DEPENDENCY_DIR: &str = "node_modules";

pub const MANIFEST_FILE: &str = "package.json";
pub const BUNDLER_CONFIG_FILE: &str = "webpack.config.js";
pub const IGNORE_FILE: &str = ".gitignore";
pub const ENV_FILE: &str = ".env";
pub const README_FILE: &str = "README.md";
pub const ENTRY_SCRIPT: &str = "src/index.js";

/// Package manager driving install, build, and deploy.
pub const PACKAGE_MANAGER: &str = "yarn";

/// Oldest supported Node.js major version.
pub const MIN_NODE_MAJOR: u32 = 10;

pub const RUNTIME_DEPENDENCIES: &[&str] = &["react", "react-dom", "@highpoint/js-fetch"];

pub const DEV_DEPENDENCIES: &[&str] = &[
    "webpack",
    "webpack-cli",
    "webpack-dev-server",
    "babel-loader",
    "@babel/core",
    "@babel/preset-env",
    "@babel/preset-react",
    "mkdirp",
    "rimraf",
];

pub fn html_file(asset_name: &str) -> String {
    format!("{}.html", asset_name)
}

pub fn stylesheet_file(asset_name: &str) -> String {
    format!("{}.css", asset_name)
}
