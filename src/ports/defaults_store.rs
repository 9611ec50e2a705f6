use crate::domain::{AppError, LocalDefaults};

/// Port for the per-user defaults remembered between runs.
pub trait DefaultsStore {
    /// Load saved defaults. Missing or unreadable data yields empty defaults.
    fn load(&self) -> LocalDefaults;

    /// Replace saved defaults.
    fn save(&self, defaults: &LocalDefaults) -> Result<(), AppError>;
}
