use serde::{Deserialize, Serialize};

/// One appended ledger row. `criterion_id` is either a catalog id rendered
/// as a number or the `"MISSION"` sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRow {
    pub machine: String,
    pub user: String,
    pub criterion_id: String,
    pub criterion: String,
    pub weight: f64,
    pub score: u8,
    pub comments: String,
    pub timestamp: String,
}

impl EvaluationRow {
    pub fn is_mission(&self) -> bool {
        self.criterion_id == crate::catalog::MISSION_CRITERION_ID
    }
}

/// Answer to one sub-question. Ad-hoc extra sub-items added at rating time
/// use the same shape; their `item` text simply is not in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubItemAnswer {
    pub item: String,
    #[serde(flatten)]
    pub response: SubItemResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SubItemResponse {
    /// Rating on the 1–10 scale with an optional free-text note.
    Rated {
        rating: u8,
        #[serde(default)]
        comment: Option<String>,
    },
    /// Excluded from the average entirely.
    NotApplicable,
}

impl SubItemAnswer {
    pub fn rated(item: impl Into<String>, rating: u8) -> Self {
        Self {
            item: item.into(),
            response: SubItemResponse::Rated {
                rating,
                comment: None,
            },
        }
    }

    pub fn rated_with_comment(
        item: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            response: SubItemResponse::Rated {
                rating,
                comment: Some(comment.into()),
            },
        }
    }

    pub fn not_applicable(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            response: SubItemResponse::NotApplicable,
        }
    }
}

/// One criterion's worth of form input for a submission batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CriterionAnswer {
    pub criterion_id: u32,
    #[serde(flatten)]
    pub input: CriterionInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "input")]
pub enum CriterionInput {
    /// Target figure for the two target-setting criteria.
    Target { value: f64 },
    /// Sub-item ratings for everything else.
    SubItems { answers: Vec<SubItemAnswer> },
}

/// Result of folding one criterion's sub-item answers into a tier.
///
/// When every sub-item is N/A the tier stays 3 while the displayed average
/// is 0.0. That pairing is inconsistent on its face but matches the
/// system's historical behavior, so both numbers are carried as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SubItemOutcome {
    pub average: f64,
    pub tier: u8,
    pub details: Vec<String>,
    pub all_not_applicable: bool,
}
