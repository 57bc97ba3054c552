//! HTTP inbound adapter exposing the REST endpoints.

pub mod assignments;
pub mod auth;
pub mod classes;
pub mod enrollments;
pub mod error;
pub mod health;
pub mod session;
pub mod state;
pub mod student;
pub mod validation;

pub use error::ApiResult;
