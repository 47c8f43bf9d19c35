//! Synthetic price series generation.
//!
//! When the provider cannot deliver real data the caller still gets a chart.
//! The base price is derived deterministically from the symbol so repeated
//! requests for the same ticker chart around the same level, while the walk
//! itself is freshly random on every call.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::PricePoint;

/// Number of points in a generated series.
pub const SERIES_LEN: usize = 50;

/// Spacing between consecutive points.
const STEP_MINUTES: i64 = 15;

/// Per-step perturbation magnitude, as a fraction of the current price.
const STEP_MAGNITUDE: f64 = 0.015;

/// Downward bias of the walk: uniform [0, 1) samples are shifted by this
/// amount before scaling, so steps skew slightly negative.
const STEP_BIAS: f64 = 0.48;

/// Deterministic base price for a symbol: character-code sum folded into
/// the 50..500 range.
pub fn base_price_for(symbol: &str) -> f64 {
    let seed: u32 = symbol.chars().map(|c| c as u32).sum();
    50.0 + (seed % 450) as f64
}

/// Generate a plausible intraday series for `symbol`.
///
/// Fifty points at 15-minute spacing, most recent point at `now`, random
/// walk around the symbol's base price, clamped to a floor of 1.0.
pub fn fallback_series(symbol: &str) -> Vec<PricePoint> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let mut price = base_price_for(symbol);
    (0..SERIES_LEN)
        .map(|i| {
            let change = (rng.gen::<f64>() - STEP_BIAS) * price * STEP_MAGNITUDE;
            price = (price + change).max(1.0);
            let date = now - Duration::minutes((SERIES_LEN as i64 - 1 - i as i64) * STEP_MINUTES);
            PricePoint::new(date, (price * 100.0).round() / 100.0)
        })
        .collect()
}
