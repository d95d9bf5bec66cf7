//! Machine registry persisted as one JSON document, rewritten wholesale on
//! every mutation.

use std::fs;

use tracing::debug;

use crate::error::AppResult;
use crate::models::machine::MachineRecord;
use crate::store::StoreRoot;

pub fn load(root: &StoreRoot) -> AppResult<Vec<MachineRecord>> {
    let path = root.machines_path();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(&path)?;
    let machines: Vec<MachineRecord> = serde_json::from_str(&contents)?;
    debug!(target: "app::store", count = machines.len(), "machine registry loaded");
    Ok(machines)
}

pub fn save(root: &StoreRoot, machines: &[MachineRecord]) -> AppResult<()> {
    let contents = serde_json::to_string_pretty(machines)?;
    fs::write(root.machines_path(), contents)?;
    debug!(target: "app::store", count = machines.len(), "machine registry saved");
    Ok(())
}
