//! Alpha Vantage intraday provider.
//!
//! Uses the TIME_SERIES_INTRADAY endpoint with a 5-minute interval. The free
//! tier answers rate-limited requests with a `Note`/`Information` payload and
//! unknown symbols with an `Error Message` payload, both under HTTP 200, so
//! classification happens on the body rather than the status line.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::QuoteFetchError;
use crate::models::PricePoint;
use crate::provider::IntradayProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const INTERVAL: &str = "5min";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Maximum number of points returned from a real series.
pub const MAX_POINTS: usize = 50;

pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct IntradayResponse {
    #[serde(rename = "Time Series (5min)")]
    time_series: Option<HashMap<String, IntradayBar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IntradayBar {
    #[serde(rename = "4. close")]
    close: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, api_key }
    }

    async fn fetch(&self, symbol: &str) -> Result<String, QuoteFetchError> {
        let params = [
            ("function", "TIME_SERIES_INTRADAY"),
            ("symbol", symbol),
            ("interval", INTERVAL),
            ("outputsize", "compact"),
            ("apikey", &self.api_key),
        ];
        let url = reqwest::Url::parse_with_params(BASE_URL, &params)
            .map_err(|e| QuoteFetchError::Malformed(format!("Failed to build URL: {e}")))?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                QuoteFetchError::Timeout
            } else {
                QuoteFetchError::Network(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QuoteFetchError::RateLimited);
        }
        if !status.is_success() {
            return Err(QuoteFetchError::UpstreamError(format!("HTTP {status}")));
        }

        Ok(response.text().await?)
    }
}

/// Classify and parse a raw TIME_SERIES_INTRADAY body.
///
/// Classification order, first match wins: explicit error, rate-limit notice,
/// absent or unusable time series. Otherwise the 50 most recent bars, mapped
/// to points in ascending chronological order with closes taken verbatim.
pub(crate) fn parse_intraday_body(body: &str) -> Result<Vec<PricePoint>, QuoteFetchError> {
    let response: IntradayResponse = serde_json::from_str(body)
        .map_err(|e| QuoteFetchError::Malformed(format!("Failed to parse response: {e}")))?;

    if let Some(msg) = response.error_message {
        return Err(QuoteFetchError::UpstreamError(msg));
    }
    if response.note.is_some() || response.information.is_some() {
        return Err(QuoteFetchError::RateLimited);
    }

    let time_series = response
        .time_series
        .ok_or_else(|| QuoteFetchError::Malformed("Missing time series".to_string()))?;

    let mut points: Vec<PricePoint> = time_series
        .into_iter()
        .filter_map(|(timestamp, bar)| {
            let date = parse_timestamp(&timestamp)?;
            let price = bar.close.parse::<f64>().ok()?;
            Some(PricePoint::new(date, price))
        })
        .collect();

    if points.is_empty() {
        return Err(QuoteFetchError::Malformed("Empty time series".to_string()));
    }

    // Newest first, keep the most recent window, then back to chronological.
    points.sort_by(|a, b| b.date.cmp(&a.date));
    points.truncate(MAX_POINTS);
    points.reverse();
    Ok(points)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

#[async_trait]
impl IntradayProvider for AlphaVantageProvider {
    async fn intraday_series(&self, symbol: &str) -> Result<Vec<PricePoint>, QuoteFetchError> {
        let body = self.fetch(symbol).await?;
        parse_intraday_body(&body)
    }
}
