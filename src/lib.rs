//! create-ps-app: scaffold, register, and deploy PeopleSoft web apps.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CreateOptions, CreateOutcome, CreateRequest, create, create_at};
pub use domain::AppError;
