use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, LocalDefaults};
use crate::ports::DefaultsStore;

/// File name of the saved defaults under `$HOME`.
pub const DEFAULTS_FILE_NAME: &str = ".create-ps-app.json";

/// JSON file holding the server coordinates of the previous run.
#[derive(Debug, Clone)]
pub struct JsonFileDefaultsStore {
    path: PathBuf,
}

impl JsonFileDefaultsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$HOME/.create-ps-app.json`.
    pub fn in_home() -> Result<Self, AppError> {
        let home = dirs::home_dir().ok_or(AppError::HomeDirectoryMissing)?;
        Ok(Self::new(home.join(DEFAULTS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DefaultsStore for JsonFileDefaultsStore {
    fn load(&self) -> LocalDefaults {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return LocalDefaults::default(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "could not read saved defaults: {}", err);
                return LocalDefaults::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), "ignoring corrupt saved defaults: {}", err);
            LocalDefaults::default()
        })
    }

    fn save(&self, defaults: &LocalDefaults) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut content = serde_json::to_string_pretty(defaults)?;
        content.push('\n');
        fs::write(&self.path, content)?;
        Ok(())
    }
}
