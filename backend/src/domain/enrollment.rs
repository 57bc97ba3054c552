//! Enrollment records.

use serde::{Deserialize, Serialize};

/// A student's membership in a class.
///
/// Intended to be unique per (student, class) pair, but that is only checked
/// once at creation time by the enroll handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub class_id: String,
    pub enrolled_at: String,
}
