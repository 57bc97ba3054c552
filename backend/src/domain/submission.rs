//! Submission records.
//!
//! Modeled and persisted-ready, but no route currently creates, lists, or
//! grades submissions. Kept as a known-incomplete extension point rather
//! than completed speculatively.

use serde::{Deserialize, Serialize};

/// A student's submission for an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    /// Write-time snapshot of the student's display name.
    pub student_name: String,
    pub content: String,
    pub submitted_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
