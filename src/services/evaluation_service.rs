use chrono::Local;
use tracing::info;

use crate::catalog::{self, Criterion, PAYOUT_TARGET_ID};
use crate::config;
use crate::error::{AppError, AppResult};
use crate::models::evaluation::{
    CriterionAnswer, CriterionInput, EvaluationRow, SubItemAnswer, SubItemOutcome, SubItemResponse,
};
use crate::models::payout::{PayoutRow, BAND_SENTINEL_WEEK};
use crate::store::{evaluation_ledger, payout_ledger, StoreRoot};

/// Half-width of the acceptable payout band around a recorded target, in
/// percentage points.
const BAND_HALF_WIDTH: f64 = 5.0;

#[derive(Clone)]
pub struct EvaluationService {
    root: StoreRoot,
}

impl EvaluationService {
    pub fn new(root: StoreRoot) -> Self {
        Self { root }
    }

    /// Catalog entries the given user is responsible for, by role.
    pub fn criteria_for(&self, user: &str) -> AppResult<Vec<&'static Criterion>> {
        let entry = config::find_user(user)
            .ok_or_else(|| AppError::validation(format!("unknown user: {user}")))?;
        Ok(catalog::criteria_for_role(entry.role))
    }

    /// Submits one evaluation form: builds one ledger row per answered
    /// criterion and appends the whole batch in one call. Target-setting
    /// criteria record their target as a comment with a fixed score of 3;
    /// the payout target additionally appends the band sentinel row.
    /// Re-submission is not prevented — it simply appends more rows.
    pub fn submit(
        &self,
        machine: &str,
        user: &str,
        answers: &[CriterionAnswer],
    ) -> AppResult<Vec<EvaluationRow>> {
        if machine.trim().is_empty() {
            return Err(AppError::validation("evaluation must target a machine"));
        }
        let owned = self.criteria_for(user)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let today = Local::now().format("%Y-%m-%d").to_string();

        let mut rows = Vec::with_capacity(answers.len());
        let mut sentinel: Option<PayoutRow> = None;

        for answer in answers {
            let criterion = owned
                .iter()
                .find(|c| c.id == answer.criterion_id)
                .copied()
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "criterion {} is not owned by {user}",
                        answer.criterion_id
                    ))
                })?;

            let (score, comments) = match (&answer.input, criterion.is_target_setting()) {
                (CriterionInput::Target { value }, true) => {
                    if criterion.id == PAYOUT_TARGET_ID {
                        if !(0.0..=100.0).contains(value) {
                            return Err(AppError::validation(format!(
                                "payout target out of range: {value}"
                            )));
                        }
                        sentinel = Some(PayoutRow {
                            machine: machine.to_string(),
                            date: today.clone(),
                            week: BAND_SENTINEL_WEEK.to_string(),
                            sales: value - BAND_HALF_WIDTH,
                            payout: value + BAND_HALF_WIDTH,
                            notes: format!("Payout target set: {value}%"),
                        });
                        // Historical conflation: defining the target counts
                        // as the criterion passing. Preserved, not fixed.
                        (3, format!("Target set: {value}%"))
                    } else {
                        (3, format!("Target set: ${value}"))
                    }
                }
                (CriterionInput::SubItems { answers }, false) => {
                    let outcome = score_sub_items(answers)?;
                    (outcome.tier, outcome.details.join(" "))
                }
                (CriterionInput::Target { .. }, false) => {
                    return Err(AppError::validation(format!(
                        "criterion {} requires sub-item ratings",
                        criterion.id
                    )));
                }
                (CriterionInput::SubItems { .. }, true) => {
                    return Err(AppError::validation(format!(
                        "criterion {} records a target, not sub-item ratings",
                        criterion.id
                    )));
                }
            };

            rows.push(EvaluationRow {
                machine: machine.to_string(),
                user: user.to_string(),
                criterion_id: criterion.id.to_string(),
                criterion: criterion.name.to_string(),
                weight: criterion.weight,
                score,
                comments,
                timestamp: timestamp.clone(),
            });
        }

        if let Some(row) = &sentinel {
            payout_ledger::append(&self.root, row)?;
        }
        evaluation_ledger::append_batch(&self.root, &rows)?;
        info!(
            machine = %machine,
            user = %user,
            criteria = rows.len(),
            "evaluation submitted"
        );
        Ok(rows)
    }

    /// Whether any non-mission row exists for the pair. Presence only — a
    /// repeat submission does not change the answer.
    pub fn has_evaluated(&self, machine: &str, user: &str) -> AppResult<bool> {
        Ok(evaluation_ledger::read_all(&self.root)?
            .iter()
            .any(|row| row.machine == machine && row.user == user && !row.is_mission()))
    }
}

/// Folds sub-item answers into a 1–3 tier. N/A items are excluded from the
/// average; avg ≥ 9 → 3, avg ≥ 6 → 2, else 1. When everything is N/A the
/// tier defaults to 3 while the reported average stays 0.0 (long-standing
/// quirk, kept as-is).
pub fn score_sub_items(answers: &[SubItemAnswer]) -> AppResult<SubItemOutcome> {
    let mut ratings = Vec::new();
    let mut details = Vec::with_capacity(answers.len());

    for answer in answers {
        match &answer.response {
            SubItemResponse::NotApplicable => {
                details.push(format!("[{}: N/A]", answer.item));
            }
            SubItemResponse::Rated { rating, comment } => {
                if !(1..=10).contains(rating) {
                    return Err(AppError::validation(format!(
                        "sub-item rating out of range: {rating}"
                    )));
                }
                ratings.push(f64::from(*rating));
                match comment {
                    Some(text) => details.push(format!("[{}: {rating} - {text}]", answer.item)),
                    None => details.push(format!("[{}: {rating}]", answer.item)),
                }
            }
        }
    }

    if ratings.is_empty() {
        details.push("(all sub-items marked not applicable)".to_string());
        return Ok(SubItemOutcome {
            average: 0.0,
            tier: 3,
            details,
            all_not_applicable: true,
        });
    }

    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let tier = if average >= 9.0 {
        3
    } else if average >= 6.0 {
        2
    } else {
        1
    };

    Ok(SubItemOutcome {
        average,
        tier,
        details,
        all_not_applicable: false,
    })
}
