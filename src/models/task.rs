use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskKind {
    /// Weekly payout figures request; completion appends a payout row.
    Cut,
    /// Ad-hoc follow-up question; completion appends a zero-weight
    /// evaluation row.
    Mission,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub kind: TaskKind,
    pub assigned_to: String,
    pub machine: String,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub completed: bool,
}
