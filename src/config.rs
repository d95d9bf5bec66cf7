//! Hard-coded deployment configuration: the evaluator roster, the shared
//! admin credential, the default payout band, and the on-disk file names.
//! There is deliberately no config file or environment layer.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const ADMIN_PASSWORD: &str = "181025";

pub const EVALUATIONS_FILE: &str = "evaluations.csv";
pub const PAYOUT_FILE: &str = "payout_history.csv";
pub const MACHINES_FILE: &str = "machines.json";
pub const TASKS_FILE: &str = "tasks.json";
pub const UPLOADS_DIR: &str = "uploads";

/// Fallback acceptable payout band when a machine has no recorded target.
pub const DEFAULT_BAND_MIN: f64 = 18.0;
pub const DEFAULT_BAND_MAX: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Sales,
    Finance,
    Technical,
    Quality,
    Support,
}

#[derive(Debug, Clone)]
pub struct UserEntry {
    pub name: &'static str,
    pub role: Role,
}

pub static USERS: Lazy<Vec<UserEntry>> = Lazy::new(|| {
    vec![
        UserEntry {
            name: "Leonel",
            role: Role::Sales,
        },
        UserEntry {
            name: "Gina",
            role: Role::Finance,
        },
        UserEntry {
            name: "Christian",
            role: Role::Technical,
        },
        UserEntry {
            name: "Eduardo",
            role: Role::Quality,
        },
        UserEntry {
            name: "Daniel",
            role: Role::Support,
        },
    ]
});

pub fn find_user(name: &str) -> Option<&'static UserEntry> {
    USERS.iter().find(|user| user.name == name)
}

pub fn user_names() -> Vec<String> {
    USERS.iter().map(|user| user.name.to_string()).collect()
}
