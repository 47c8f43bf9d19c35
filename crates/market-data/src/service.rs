//! The caller-facing quote service.
//!
//! Contract: `chart_data` never fails. Whatever goes wrong upstream, the
//! caller receives an ordered, chart-ready series.

use std::sync::Arc;

use log::{debug, warn};

use crate::models::PricePoint;
use crate::provider::IntradayProvider;
use crate::symbol;
use crate::synthetic;

pub struct QuoteService {
    provider: Arc<dyn IntradayProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn IntradayProvider>) -> Self {
        Self { provider }
    }

    /// Produce a time-ordered price series for a user-entered symbol.
    ///
    /// The symbol is normalized before hitting the provider; any fetch
    /// failure is logged and resolved to a synthetic series seeded from the
    /// display form of the symbol.
    pub async fn chart_data(&self, raw_symbol: &str) -> Vec<PricePoint> {
        let display = symbol::display_symbol(raw_symbol);
        let query = symbol::provider_symbol(raw_symbol);

        match self.provider.intraday_series(&query).await {
            Ok(series) => {
                debug!("Fetched {} real points for {}", series.len(), query);
                series
            }
            Err(err) => {
                warn!("Quote fetch for {} fell back to synthetic data: {}", query, err);
                synthetic::fallback_series(&display)
            }
        }
    }
}
