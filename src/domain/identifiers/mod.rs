pub mod app_name;
pub mod derived;
pub mod validation;
pub mod weblib_name;

pub use app_name::AppName;
pub use derived::DerivedIdentifiers;
pub use validation::{
    validate_app_name, validate_hostname, validate_required, validate_weblib_name,
};
pub use weblib_name::WeblibName;
