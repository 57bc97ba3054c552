//! Transport-agnostic core: record types, errors, identifier generation,
//! credential helpers, and the store ports the adapters implement.

pub mod assignment;
pub mod class;
pub mod clock;
pub mod credentials;
pub mod enrollment;
pub mod error;
pub mod ids;
pub mod ports;
pub mod submission;
pub mod user;

pub use assignment::Assignment;
pub use class::Class;
pub use enrollment::Enrollment;
pub use error::{Error, ErrorCode};
pub use submission::Submission;
pub use user::{Role, User};
