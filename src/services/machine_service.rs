use std::fs;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::machine::MachineRecord;
use crate::store::{machine_store, StoreRoot};

/// Who is asking for a machine listing. Evaluators only see machines
/// assigned to them; the admin sees every active machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requester<'a> {
    User(&'a str),
    Admin,
}

#[derive(Clone)]
pub struct MachineService {
    root: StoreRoot,
}

impl MachineService {
    pub fn new(root: StoreRoot) -> Self {
        Self { root }
    }

    /// Active machines visible to the requester. Deactivated machines are
    /// hidden here but their historical ledger rows stay untouched.
    pub fn list(&self, requester: Requester<'_>) -> AppResult<Vec<MachineRecord>> {
        let machines = machine_store::load(&self.root)?;
        Ok(machines
            .into_iter()
            .filter(|machine| machine.active)
            .filter(|machine| match requester {
                Requester::Admin => true,
                Requester::User(name) => machine.is_assigned_to(name),
            })
            .collect())
    }

    /// Registers a machine. Names are not deduplicated; a later rewrite
    /// simply wins (single-writer model, no uniqueness enforcement).
    pub fn create(
        &self,
        name: &str,
        assigned_to: Vec<String>,
        photo: Option<&[u8]>,
    ) -> AppResult<MachineRecord> {
        if name.trim().is_empty() {
            return Err(AppError::validation("machine name must not be empty"));
        }

        let photo_path = match photo {
            Some(bytes) => {
                let path = self.root.photo_path(name);
                fs::write(&path, bytes)?;
                Some(path.to_string_lossy().into_owned())
            }
            None => None,
        };

        let record = MachineRecord {
            name: name.to_string(),
            assigned_to,
            photo: photo_path,
            active: true,
        };

        let mut machines = machine_store::load(&self.root)?;
        machines.push(record.clone());
        machine_store::save(&self.root, &machines)?;
        info!(machine = %record.name, "machine created");
        Ok(record)
    }

    /// Overwrites the assignment list of a machine.
    pub fn reassign(&self, name: &str, assigned_to: Vec<String>) -> AppResult<MachineRecord> {
        self.update(name, |machine| machine.assigned_to = assigned_to.clone())
            .map(|machine| {
                info!(machine = %name, "machine reassigned");
                machine
            })
    }

    /// Soft delete: flips the active flag, leaving the record and all
    /// ledger history in place.
    pub fn deactivate(&self, name: &str) -> AppResult<()> {
        self.update(name, |machine| machine.active = false)?;
        info!(machine = %name, "machine deactivated");
        Ok(())
    }

    /// Stores or replaces the photo asset for a machine. Last write wins.
    pub fn save_photo(&self, name: &str, bytes: &[u8]) -> AppResult<MachineRecord> {
        let path = self.root.photo_path(name);
        fs::write(&path, bytes)?;
        let path = path.to_string_lossy().into_owned();
        self.update(name, |machine| machine.photo = Some(path.clone()))
    }

    fn update(
        &self,
        name: &str,
        mutate: impl FnMut(&mut MachineRecord),
    ) -> AppResult<MachineRecord> {
        let mut mutate = mutate;
        let mut machines = machine_store::load(&self.root)?;
        let target = machines
            .iter_mut()
            .find(|machine| machine.name == name)
            .ok_or_else(AppError::not_found)?;
        mutate(target);
        let updated = target.clone();
        machine_store::save(&self.root, &machines)?;
        Ok(updated)
    }
}
