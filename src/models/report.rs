use serde::{Deserialize, Serialize};

use crate::models::payout::{BandPosition, PayoutBand};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalSummary {
    pub machine: String,
    /// Weighted score over non-mission rows divided by 3.0, times 100.
    pub approval_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCell {
    pub user: String,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRow {
    pub machine: String,
    pub cells: Vec<ProgressCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutPoint {
    pub week: String,
    pub date: String,
    pub sales: f64,
    pub payout: f64,
    pub position: BandPosition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSeries {
    pub machine: String,
    pub band: PayoutBand,
    /// True when the band came from a recorded target rather than the
    /// hard-coded default.
    pub band_from_target: bool,
    pub points: Vec<PayoutPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RadarEntry {
    pub criterion: String,
    /// Mean score on the 0–3 scale.
    pub mean_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeverityTier {
    Good,
    Fair,
    Poor,
}

impl SeverityTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            3 => SeverityTier::Good,
            2 => SeverityTier::Fair,
            _ => SeverityTier::Poor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetailRow {
    pub user: String,
    pub criterion: String,
    pub score: u8,
    pub tier: SeverityTier,
    pub comments: String,
    pub timestamp: String,
}
