//! Trade domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Direction of a discretionary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "Buy",
            TradeType::Sell => "Sell",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(TradeType::Buy),
            "Sell" => Ok(TradeType::Sell),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown trade type: {other}"
            ))),
        }
    }
}

/// How strongly the user believes in the setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conviction {
    High,
    #[default]
    Medium,
    Low,
}

impl Conviction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conviction::High => "High",
            Conviction::Medium => "Medium",
            Conviction::Low => "Low",
        }
    }
}

impl FromStr for Conviction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Conviction::High),
            "Medium" => Ok(Conviction::Medium),
            "Low" => Ok(Conviction::Low),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown conviction: {other}"
            ))),
        }
    }
}

/// Domain model for one logged position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub user_id: String,
    pub stock_name: String,
    pub stock_symbol: String,
    pub entry_price: f64,
    pub target_price: f64,
    pub stop_loss: Option<f64>,
    pub quantity: f64,
    pub conviction: Conviction,
    pub trade_type: TradeType,
    /// Holding period in days.
    pub time_period_days: i32,
    pub reminder_date: DateTime<Utc>,
    pub reminder_sent: bool,
    pub is_closed: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trade {
    /// Profit/loss percentage implied by the entry and target prices,
    /// rounded to 2 decimals. Zero when the entry price is zero.
    pub fn profit_loss_percent(&self) -> f64 {
        if self.entry_price == 0.0 {
            return 0.0;
        }
        let profit = match self.trade_type {
            TradeType::Buy => (self.target_price - self.entry_price) / self.entry_price * 100.0,
            TradeType::Sell => (self.entry_price - self.target_price) / self.entry_price * 100.0,
        };
        round2(profit)
    }
}

/// API representation of a trade: the stored fields plus derived ones.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeView {
    #[serde(flatten)]
    pub trade: Trade,
    pub profit_loss_percent: f64,
}

impl From<Trade> for TradeView {
    fn from(trade: Trade) -> Self {
        let profit_loss_percent = trade.profit_loss_percent();
        TradeView {
            trade,
            profit_loss_percent,
        }
    }
}

/// Input model for logging a new trade.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub stock_name: String,
    pub stock_symbol: String,
    pub entry_price: f64,
    pub target_price: f64,
    pub stop_loss: Option<f64>,
    pub quantity: Option<f64>,
    pub conviction: Option<Conviction>,
    pub trade_type: TradeType,
    pub time_period_days: i32,
    pub notes: Option<String>,
}

/// Partial update for a trade. `None` fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeUpdate {
    pub stock_name: Option<String>,
    pub stock_symbol: Option<String>,
    pub entry_price: Option<f64>,
    pub target_price: Option<f64>,
    pub stop_loss: Option<f64>,
    pub quantity: Option<f64>,
    pub conviction: Option<Conviction>,
    pub trade_type: Option<TradeType>,
    pub time_period_days: Option<i32>,
    pub notes: Option<String>,
    pub is_closed: Option<bool>,
}

/// Aggregate statistics over one user's journal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSummary {
    pub total_trades: usize,
    pub active_trades: usize,
    pub closed_trades: usize,
    pub total_invested: f64,
    pub average_profit_target: f64,
}

/// The reminder fires once the holding period has elapsed, counted from
/// when the trade was logged.
pub fn reminder_date_for(created_at: DateTime<Utc>, time_period_days: i32) -> DateTime<Utc> {
    created_at + Duration::days(time_period_days as i64)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
