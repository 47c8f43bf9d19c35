//! Wire models for the quote series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point of a charting series.
///
/// Real and synthetic series share this shape, so callers cannot tell them
/// apart structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: DateTime<Utc>, price: f64) -> Self {
        Self { date, price }
    }
}
