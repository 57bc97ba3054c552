//! Class records.

use serde::{Deserialize, Serialize};

/// A class created by a teacher.
///
/// `teacher_name` is a write-time snapshot, never refreshed if the teacher
/// record later changes. `code` is the human-enterable join code; collisions
/// with other classes are neither checked nor prevented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    pub name: String,
    pub description: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub code: String,
    pub schedule: String,
    pub semester: String,
    pub created_at: String,
}
