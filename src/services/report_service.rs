use std::collections::BTreeMap;

use tracing::debug;

use crate::config;
use crate::error::AppResult;
use crate::models::report::{
    ApprovalSummary, AuditDetailRow, PayoutPoint, PayoutSeries, ProgressCell, ProgressRow,
    RadarEntry, SeverityTier,
};
use crate::models::payout::PayoutBand;
use crate::store::{evaluation_ledger, machine_store, payout_ledger, StoreRoot};

/// Read-only aggregation over the two ledgers and the machine registry.
/// Missing data yields empty reports, never errors.
#[derive(Clone)]
pub struct ReportService {
    root: StoreRoot,
}

impl ReportService {
    pub fn new(root: StoreRoot) -> Self {
        Self { root }
    }

    /// Approval percentage for one machine: Σ(score × weight) over its
    /// non-mission rows, divided by the 3.0 maximum, times 100. `None`
    /// when the machine has no standard evaluations yet.
    pub fn approval_for(&self, machine: &str) -> AppResult<Option<f64>> {
        let rows = evaluation_ledger::read_all(&self.root)?;
        let mut weighted = 0.0;
        let mut seen = false;
        for row in rows
            .iter()
            .filter(|row| row.machine == machine && !row.is_mission())
        {
            weighted += f64::from(row.score) * row.weight;
            seen = true;
        }
        Ok(seen.then(|| weighted / 3.0 * 100.0))
    }

    /// Approval percentages for every machine present in the ledger,
    /// sorted by machine name.
    pub fn approval_summary(&self) -> AppResult<Vec<ApprovalSummary>> {
        let rows = evaluation_ledger::read_all(&self.root)?;
        let mut weighted: BTreeMap<String, f64> = BTreeMap::new();
        for row in rows.iter().filter(|row| !row.is_mission()) {
            *weighted.entry(row.machine.clone()).or_default() +=
                f64::from(row.score) * row.weight;
        }
        let summary: Vec<ApprovalSummary> = weighted
            .into_iter()
            .map(|(machine, total)| ApprovalSummary {
                machine,
                approval_pct: total / 3.0 * 100.0,
            })
            .collect();
        debug!(target: "app::report", machines = summary.len(), "approval summary built");
        Ok(summary)
    }

    /// Active machines × configured users; a cell is complete iff any
    /// non-mission row exists for the pair. Binary presence, no weighting.
    pub fn progress_matrix(&self) -> AppResult<Vec<ProgressRow>> {
        let machines = machine_store::load(&self.root)?;
        let rows = evaluation_ledger::read_all(&self.root)?;
        let users = config::user_names();

        Ok(machines
            .iter()
            .filter(|machine| machine.active)
            .map(|machine| ProgressRow {
                machine: machine.name.clone(),
                cells: users
                    .iter()
                    .map(|user| ProgressCell {
                        user: user.clone(),
                        complete: rows.iter().any(|row| {
                            row.machine == machine.name
                                && &row.user == user
                                && !row.is_mission()
                        }),
                    })
                    .collect(),
            })
            .collect())
    }

    /// Weekly payout points for a machine, each classified against the
    /// machine's band. The band comes from the latest sentinel row; when
    /// none exists the hard-coded default applies.
    pub fn payout_series(&self, machine: &str) -> AppResult<PayoutSeries> {
        let rows = payout_ledger::read_for_machine(&self.root, machine)?;

        let target = rows
            .iter()
            .rev()
            .find(|row| row.is_band_sentinel())
            .map(|row| PayoutBand {
                min: row.sales,
                max: row.payout,
            });
        let band_from_target = target.is_some();
        let band = target.unwrap_or_default();

        let points = rows
            .iter()
            .filter(|row| !row.is_band_sentinel())
            .map(|row| PayoutPoint {
                week: row.week.clone(),
                date: row.date.clone(),
                sales: row.sales,
                payout: row.payout,
                position: band.classify(row.payout),
            })
            .collect();

        Ok(PayoutSeries {
            machine: machine.to_string(),
            band,
            band_from_target,
            points,
        })
    }

    /// Mean score per criterion name (0–3 scale) over a machine's
    /// non-mission rows, sorted by criterion name.
    pub fn radar(&self, machine: &str) -> AppResult<Vec<RadarEntry>> {
        let rows = evaluation_ledger::read_all(&self.root)?;
        let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for row in rows
            .iter()
            .filter(|row| row.machine == machine && !row.is_mission())
        {
            let entry = sums.entry(row.criterion.clone()).or_default();
            entry.0 += f64::from(row.score);
            entry.1 += 1;
        }
        Ok(sums
            .into_iter()
            .map(|(criterion, (sum, count))| RadarEntry {
                criterion,
                mean_score: sum / count as f64,
            })
            .collect())
    }

    /// Every ledger row for a machine (missions included) with a severity
    /// tier per score, in append order.
    pub fn audit_detail(&self, machine: &str) -> AppResult<Vec<AuditDetailRow>> {
        let rows = evaluation_ledger::read_all(&self.root)?;
        Ok(rows
            .into_iter()
            .filter(|row| row.machine == machine)
            .map(|row| AuditDetailRow {
                user: row.user,
                criterion: row.criterion,
                score: row.score,
                tier: SeverityTier::from_score(row.score),
                comments: row.comments,
                timestamp: row.timestamp,
            })
            .collect())
    }
}
