use super::validation::validate_weblib_name;
use crate::impl_validated_name;

/// A validated weblib name such as `WEBLIB_DEMO_APP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeblibName(String);

impl_validated_name!(WeblibName, validate_weblib_name);

impl From<WeblibName> for String {
    fn from(val: WeblibName) -> Self {
        val.0
    }
}
