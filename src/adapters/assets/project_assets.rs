use include_dir::{Dir, include_dir};

use crate::domain::project::{ENTRY_SCRIPT, README_FILE, stylesheet_file};
use crate::domain::{AppError, FileSource, GeneratedFileSet};

static PROJECT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/project");

const STYLESHEET_ASSET: &str = "app.css";

fn asset(path: &str) -> Result<&'static [u8], AppError> {
    PROJECT_DIR
        .get_file(path)
        .map(|file| file.contents())
        .ok_or_else(|| AppError::Io(std::io::Error::other(format!("Missing bundled asset: {}", path))))
}

/// Boilerplate copied into a brand-new project only: readme, entry script, stylesheet.
pub fn add_boilerplate(files: &mut GeneratedFileSet, asset_name: &str) -> Result<(), AppError> {
    files.add(README_FILE, FileSource::Asset(asset(README_FILE)?))?;
    files.add(ENTRY_SCRIPT, FileSource::Asset(asset(ENTRY_SCRIPT)?))?;
    files.add(stylesheet_file(asset_name), FileSource::Asset(asset(STYLESHEET_ASSET)?))?;
    Ok(())
}
