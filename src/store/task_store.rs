//! Task queue persisted as one JSON document, rewritten wholesale on every
//! mutation. Tasks are never deleted, only flagged completed.

use std::fs;

use tracing::debug;

use crate::error::AppResult;
use crate::models::task::TaskRecord;
use crate::store::StoreRoot;

pub fn load(root: &StoreRoot) -> AppResult<Vec<TaskRecord>> {
    let path = root.tasks_path();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(&path)?;
    let tasks: Vec<TaskRecord> = serde_json::from_str(&contents)?;
    debug!(target: "app::store", count = tasks.len(), "task queue loaded");
    Ok(tasks)
}

pub fn save(root: &StoreRoot, tasks: &[TaskRecord]) -> AppResult<()> {
    let contents = serde_json::to_string_pretty(tasks)?;
    fs::write(root.tasks_path(), contents)?;
    debug!(target: "app::store", count = tasks.len(), "task queue saved");
    Ok(())
}
