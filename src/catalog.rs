//! Static catalog of the seven weighted audit criteria. Weights sum to 1.0;
//! that invariant is enforced by the test below, not at runtime.

use once_cell::sync::Lazy;

use crate::config::Role;

/// Criterion ids 1 and 2 record a target figure instead of sub-item ratings.
pub const SALES_BUDGET_ID: u32 = 1;
pub const PAYOUT_TARGET_ID: u32 = 2;

/// Criterion id stamped onto mission answers; weight 0, excluded from
/// approval aggregation.
pub const MISSION_CRITERION_ID: &str = "MISSION";

#[derive(Debug, Clone)]
pub struct Criterion {
    pub id: u32,
    pub name: &'static str,
    pub weight: f64,
    pub role: Role,
    pub sub_items: &'static [&'static str],
}

impl Criterion {
    /// True for the two target-setting criteria that bypass sub-item scoring.
    pub fn is_target_setting(&self) -> bool {
        self.id == SALES_BUDGET_ID || self.id == PAYOUT_TARGET_ID
    }
}

pub static CRITERIA: Lazy<Vec<Criterion>> = Lazy::new(|| {
    vec![
        Criterion {
            id: 1,
            name: "Sales (budget)",
            weight: 0.20,
            role: Role::Sales,
            sub_items: &["Does the machine meet or beat its sales budget?"],
        },
        Criterion {
            id: 2,
            name: "Sales (payout)",
            weight: 0.20,
            role: Role::Finance,
            sub_items: &["Does the machine hold the stipulated payout?"],
        },
        Criterion {
            id: 3,
            name: "Functionality",
            weight: 0.20,
            role: Role::Technical,
            sub_items: &[
                "Is the supply voltage specified?",
                "Are the joysticks mechanical?",
                "Do all play functions operate correctly?",
                "Is power-on behavior stable?",
                "Does it run without constant recalibration?",
                "Is it free of frequent misadjustments?",
            ],
        },
        Criterion {
            id: 4,
            name: "Material quality",
            weight: 0.10,
            role: Role::Quality,
            sub_items: &[
                "Is the cabinet metal?",
                "Is the build rigid?",
                "Is the assembly clean?",
                "Is it free of loose parts?",
                "Does it have a padlock bracket?",
                "Does the cash box have a proper lock?",
                "Do the doors latch securely?",
                "Is the power supply a MEAN WELL unit?",
                "Is the wiring 14-gauge?",
            ],
        },
        Criterion {
            id: 5,
            name: "Look & feel",
            weight: 0.10,
            role: Role::Finance,
            sub_items: &[
                "Is the design modern?",
                "Are the labels in good shape?",
                "Is it free of sharp edges?",
                "Is the exterior in good condition?",
                "Are the controls within reach?",
                "Are the buttons clearly visible?",
                "Are the play instructions clear?",
                "Is the play flow logical?",
            ],
        },
        Criterion {
            id: 6,
            name: "Maintainability",
            weight: 0.10,
            role: Role::Technical,
            sub_items: &[
                "Is the cabinet easy to open?",
                "Is there working space inside?",
                "Are spare parts commonly available?",
                "Are component models identifiable?",
                "Is a manual included?",
                "Is there an electrical diagram?",
            ],
        },
        Criterion {
            id: 7,
            name: "Support",
            weight: 0.10,
            role: Role::Support,
            sub_items: &[
                "Are the key adjustments documented?",
                "Are spare parts available from the vendor?",
                "Is vendor documentation available?",
            ],
        },
    ]
});

pub fn criteria_for_role(role: Role) -> Vec<&'static Criterion> {
    CRITERIA.iter().filter(|c| c.role == role).collect()
}

pub fn find_criterion(id: u32) -> Option<&'static Criterion> {
    CRITERIA.iter().find(|c| c.id == id)
}
