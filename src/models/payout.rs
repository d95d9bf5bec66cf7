use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_BAND_MAX, DEFAULT_BAND_MIN};

/// Week label of the sentinel row that encodes a machine's acceptable
/// payout band: the sales column carries the band minimum and the payout
/// column the maximum.
pub const BAND_SENTINEL_WEEK: &str = "META_RANGO";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRow {
    pub machine: String,
    pub date: String,
    pub week: String,
    pub sales: f64,
    pub payout: f64,
    pub notes: String,
}

impl PayoutRow {
    pub fn is_band_sentinel(&self) -> bool {
        self.week == BAND_SENTINEL_WEEK
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutBand {
    pub min: f64,
    pub max: f64,
}

impl Default for PayoutBand {
    fn default() -> Self {
        Self {
            min: DEFAULT_BAND_MIN,
            max: DEFAULT_BAND_MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BandPosition {
    Below,
    Within,
    Above,
}

impl PayoutBand {
    pub fn classify(&self, payout: f64) -> BandPosition {
        if payout < self.min {
            BandPosition::Below
        } else if payout > self.max {
            BandPosition::Above
        } else {
            BandPosition::Within
        }
    }
}
