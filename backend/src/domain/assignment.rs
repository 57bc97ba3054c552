//! Assignment records.

use serde::{Deserialize, Serialize};

/// An assignment attached to a class.
///
/// `class_name` is a write-time snapshot. `due_date` is stored as supplied,
/// not validated as a calendar date. `max_points` carries whatever the
/// lenient integer parse produced; `None` (serialized as `null`) marks input
/// that had no integer prefix at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub class_id: String,
    pub class_name: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub max_points: Option<i64>,
    pub created_at: String,
}
