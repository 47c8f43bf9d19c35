//! Quote acquisition for the trade diary.
//!
//! Given a free-text ticker symbol, this crate produces a time-ordered intraday
//! price series suitable for charting. Real data comes from Alpha Vantage; any
//! upstream failure (invalid symbol, rate limit, malformed payload, transport
//! error) is absorbed and replaced by a plausible synthetic series, so callers
//! always receive a usable chart and never an error.

pub mod errors;
pub mod models;
pub mod provider;
pub mod service;
pub mod symbol;
pub mod synthetic;

pub use errors::QuoteFetchError;
pub use models::PricePoint;
pub use provider::{AlphaVantageProvider, IntradayProvider};
pub use service::QuoteService;
