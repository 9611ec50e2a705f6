use super::validation::validate_app_name;
use crate::impl_validated_name;

/// A validated application name, exactly as the user typed it.
///
/// Guarantees:
/// - Non-empty, at most 30 characters
/// - Only ASCII letters, `_`, `-`, or spaces
/// - At least one letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl_validated_name!(AppName, validate_app_name);

impl From<AppName> for String {
    fn from(val: AppName) -> Self {
        val.0
    }
}
