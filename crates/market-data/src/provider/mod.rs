//! Intraday quote providers.

mod alpha_vantage;

pub use alpha_vantage::AlphaVantageProvider;

use async_trait::async_trait;

use crate::errors::QuoteFetchError;
use crate::models::PricePoint;

/// A source of intraday price history for an already-normalized symbol.
///
/// Implementations classify their own failures into [`QuoteFetchError`]
/// variants; deciding what to do about a failure is the caller's business.
#[async_trait]
pub trait IntradayProvider: Send + Sync {
    /// Fetch up to the 50 most recent intraday points for `symbol`,
    /// ascending chronological order.
    async fn intraday_series(&self, symbol: &str) -> Result<Vec<PricePoint>, QuoteFetchError>;
}
