use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MachineRecord {
    pub name: String,
    #[serde(default)]
    pub assigned_to: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl MachineRecord {
    pub fn is_assigned_to(&self, user: &str) -> bool {
        self.assigned_to.iter().any(|name| name == user)
    }
}
