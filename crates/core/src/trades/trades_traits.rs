use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::trades::trades_model::{NewTrade, Trade, TradeSummary, TradeUpdate};

/// Trait for trade repository operations.
///
/// Owner scoping is enforced by the service, not the store; the repository
/// only offers the filtered queries the service needs.
pub trait TradeRepositoryTrait: Send + Sync {
    /// All trades for one user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Trade>>;
    fn find_by_id(&self, trade_id: &str) -> Result<Option<Trade>>;
    fn insert(&self, trade: Trade) -> Result<Trade>;
    fn update(&self, trade: Trade) -> Result<Trade>;
    fn delete(&self, trade_id: &str) -> Result<usize>;
    /// Open, un-notified trades whose reminder date has passed, ordered by
    /// creation time ascending for reproducible sweeps.
    fn find_due_reminders(&self, as_of: DateTime<Utc>) -> Result<Vec<Trade>>;
    /// Flip `reminder_sent` to true. Persisted immediately so a crash
    /// mid-sweep cannot re-notify already-handled trades.
    fn mark_reminder_sent(&self, trade_id: &str) -> Result<()>;
}

/// Trait for trade service operations. Every method is scoped to the
/// calling user.
pub trait TradeServiceTrait: Send + Sync {
    fn list_trades(&self, user_id: &str) -> Result<Vec<Trade>>;
    fn create_trade(&self, user_id: &str, input: NewTrade) -> Result<Trade>;
    fn update_trade(&self, user_id: &str, trade_id: &str, update: TradeUpdate) -> Result<Trade>;
    fn delete_trade(&self, user_id: &str, trade_id: &str) -> Result<()>;
    fn summary(&self, user_id: &str) -> Result<TradeSummary>;
    fn export_csv(&self, user_id: &str) -> Result<String>;
}
