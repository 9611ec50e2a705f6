use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, GeneratedFileSet};

/// Outcome of [`ProjectDirectory::ensure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Created,
    /// Left over from an earlier run; one-time scaffolding is skipped.
    AlreadyPresent,
}

impl DirectoryState {
    pub fn is_new(self) -> bool {
        self == DirectoryState::Created
    }
}

/// The generated project's directory on disk.
#[derive(Debug, Clone)]
pub struct ProjectDirectory {
    root: PathBuf,
}

impl ProjectDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory. An existing directory is reported, not an error.
    pub fn ensure(&self) -> Result<DirectoryState, AppError> {
        match fs::create_dir(&self.root) {
            Ok(()) => Ok(DirectoryState::Created),
            Err(err) if err.kind() == ErrorKind::AlreadyExists && self.root.is_dir() => {
                tracing::debug!(path = %self.root.display(), "project directory already exists");
                Ok(DirectoryState::AlreadyPresent)
            }
            Err(source) => Err(AppError::DirectoryCreation {
                path: self.root.display().to_string(),
                source,
            }),
        }
    }

    /// Write every file, creating parent directories as needed.
    pub fn write_files(&self, files: &GeneratedFileSet) -> Result<(), AppError> {
        for file in files.iter() {
            let path = self.root.join(&file.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, file.source.bytes())?;
            tracing::debug!(path = %path.display(), "wrote");
        }
        Ok(())
    }

    /// Read a project file; `None` when it is absent or unreadable.
    pub fn read_optional(&self, relative: &str) -> Option<String> {
        fs::read_to_string(self.root.join(relative)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileSource;
    use tempfile::TempDir;

    fn project() -> (TempDir, ProjectDirectory) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let project = ProjectDirectory::new(dir.path().join("demo_app"));
        (dir, project)
    }

    #[test]
    fn ensure_reports_existing_directory() {
        let (_dir, project) = project();
        assert_eq!(project.ensure().unwrap(), DirectoryState::Created);
        assert_eq!(project.ensure().unwrap(), DirectoryState::AlreadyPresent);
    }

    #[test]
    fn ensure_fails_when_a_file_is_in_the_way() {
        let (_dir, project) = project();
        fs::write(project.root(), "not a directory").unwrap();
        assert!(matches!(project.ensure(), Err(AppError::DirectoryCreation { .. })));
    }

    #[test]
    fn ensure_fails_without_parent() {
        let dir = TempDir::new().unwrap();
        let project = ProjectDirectory::new(dir.path().join("missing").join("demo_app"));
        let err = project.ensure().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn writes_nested_files_byte_for_byte() {
        let (_dir, project) = project();
        project.ensure().unwrap();

        let mut files = GeneratedFileSet::new();
        files.add("src/index.js", FileSource::Asset(b"\xEF\xBB\xBFrender();\r\n")).unwrap();
        files.add(".env", FileSource::Rendered("PS_NODE=HRMS".into())).unwrap();
        project.write_files(&files).unwrap();

        assert_eq!(fs::read(project.root().join("src/index.js")).unwrap(), b"\xEF\xBB\xBFrender();\r\n");
        assert_eq!(project.read_optional(".env").as_deref(), Some("PS_NODE=HRMS"));
        assert_eq!(project.read_optional("package.json"), None);
    }
}
