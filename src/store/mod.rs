use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{EVALUATIONS_FILE, MACHINES_FILE, PAYOUT_FILE, TASKS_FILE, UPLOADS_DIR};
use crate::error::AppResult;
use crate::models::machine::MachineRecord;

pub mod evaluation_ledger;
pub mod ledger;
pub mod machine_store;
pub mod task_store;

pub mod payout_ledger;

/// Handle to the flat-file data directory. Every persisted store lives in
/// one file under this root; mutations rewrite the owning file wholesale.
/// Single-writer by design — there is no locking and no atomic rename.
#[derive(Clone, Debug)]
pub struct StoreRoot {
    dir: PathBuf,
}

impl StoreRoot {
    /// Opens (and if needed creates) the data directory, seeding any
    /// missing files with empty or default content.
    pub fn new<P: Into<PathBuf>>(dir: P) -> AppResult<Self> {
        let dir = dir.into();
        info!(data_dir = %dir.display(), "initializing store root");
        fs::create_dir_all(&dir)?;

        let root = Self { dir };
        fs::create_dir_all(root.uploads_dir())?;
        root.seed_missing_files()?;
        Ok(root)
    }

    fn seed_missing_files(&self) -> AppResult<()> {
        if !self.evaluations_path().exists() {
            fs::write(
                self.evaluations_path(),
                format!("{}\n", evaluation_ledger::HEADER),
            )?;
        }
        if !self.payout_path().exists() {
            fs::write(self.payout_path(), format!("{}\n", payout_ledger::HEADER))?;
        }
        if !self.machines_path().exists() {
            machine_store::save(self, &default_machines())?;
        }
        if !self.tasks_path().exists() {
            fs::write(self.tasks_path(), "[]")?;
        }
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn evaluations_path(&self) -> PathBuf {
        self.dir.join(EVALUATIONS_FILE)
    }

    pub fn payout_path(&self) -> PathBuf {
        self.dir.join(PAYOUT_FILE)
    }

    pub fn machines_path(&self) -> PathBuf {
        self.dir.join(MACHINES_FILE)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.dir.join(UPLOADS_DIR)
    }

    pub fn photo_path(&self, machine: &str) -> PathBuf {
        self.uploads_dir().join(format!("{machine}.jpg"))
    }
}

fn default_machines() -> Vec<MachineRecord> {
    vec![MachineRecord {
        name: "Clip Machine 4P - #001".to_string(),
        assigned_to: vec!["Leonel".to_string(), "Gina".to_string()],
        photo: None,
        active: true,
    }]
}
