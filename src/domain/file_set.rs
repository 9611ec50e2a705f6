use std::path::{Component, Path, PathBuf};

use super::AppError;

/// Where a generated file's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Text produced by a renderer.
    Rendered(String),
    /// Bundled static asset, copied byte for byte.
    Asset(&'static [u8]),
}

impl FileSource {
    pub fn bytes(&self) -> &[u8] {
        match self {
            FileSource::Rendered(text) => text.as_bytes(),
            FileSource::Asset(bytes) => bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative to the project directory.
    pub path: PathBuf,
    pub source: FileSource,
}

/// Ordered files to materialize. Paths are relative and never collide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFileSet {
    files: Vec<GeneratedFile>,
}

impl GeneratedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<P: Into<PathBuf>>(&mut self, path: P, source: FileSource) -> Result<(), AppError> {
        let path = path.into();
        if !is_contained(&path) {
            return Err(AppError::validation(format!(
                "Generated file path must stay inside the project: {}",
                path.display()
            )));
        }
        if self.files.iter().any(|file| file.path == path) {
            return Err(AppError::validation(format!(
                "Generated file listed twice: {}",
                path.display()
            )));
        }
        self.files.push(GeneratedFile { path, source });
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_contained(path: &Path) -> bool {
    path.components().next().is_some()
        && path.components().all(|component| matches!(component, Component::Normal(_)))
}
