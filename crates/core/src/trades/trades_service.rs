use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};
use crate::trades::trades_model::{
    reminder_date_for, round2, NewTrade, Trade, TradeSummary, TradeUpdate,
};
use crate::trades::trades_traits::{TradeRepositoryTrait, TradeServiceTrait};

pub struct TradeService {
    repository: Arc<dyn TradeRepositoryTrait>,
}

impl TradeService {
    pub fn new(repository: Arc<dyn TradeRepositoryTrait>) -> Self {
        TradeService { repository }
    }

    fn validate(input: &NewTrade) -> Result<()> {
        if input.stock_name.trim().is_empty() {
            return Err(ValidationError::MissingField("stockName".to_string()).into());
        }
        if input.stock_symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("stockSymbol".to_string()).into());
        }
        if input.time_period_days < 1 {
            return Err(ValidationError::InvalidInput(
                "timePeriodDays must be at least 1".to_string(),
            )
            .into());
        }
        if let Some(quantity) = input.quantity {
            if quantity <= 0.0 {
                return Err(ValidationError::InvalidInput(
                    "quantity must be positive".to_string(),
                )
                .into());
            }
        }
        Ok(())
    }

    /// Load a trade and check it belongs to `user_id`.
    fn owned_trade(&self, user_id: &str, trade_id: &str) -> Result<Trade> {
        let trade = self
            .repository
            .find_by_id(trade_id)?
            .ok_or_else(|| Error::NotFound(format!("Trade not found: {trade_id}")))?;
        if trade.user_id != user_id {
            return Err(Error::Forbidden(
                "Trade belongs to a different user".to_string(),
            ));
        }
        Ok(trade)
    }
}

impl TradeServiceTrait for TradeService {
    fn list_trades(&self, user_id: &str) -> Result<Vec<Trade>> {
        self.repository.list_for_user(user_id)
    }

    fn create_trade(&self, user_id: &str, input: NewTrade) -> Result<Trade> {
        Self::validate(&input)?;
        let now = Utc::now();
        let trade = Trade {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            stock_name: input.stock_name.trim().to_string(),
            stock_symbol: input.stock_symbol.trim().to_string(),
            entry_price: input.entry_price,
            target_price: input.target_price,
            stop_loss: input.stop_loss,
            quantity: input.quantity.unwrap_or(1.0),
            conviction: input.conviction.unwrap_or_default(),
            trade_type: input.trade_type,
            time_period_days: input.time_period_days,
            reminder_date: reminder_date_for(now, input.time_period_days),
            reminder_sent: false,
            is_closed: false,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert(trade)
    }

    fn update_trade(&self, user_id: &str, trade_id: &str, update: TradeUpdate) -> Result<Trade> {
        let mut trade = self.owned_trade(user_id, trade_id)?;

        if let Some(stock_name) = update.stock_name {
            trade.stock_name = stock_name;
        }
        if let Some(stock_symbol) = update.stock_symbol {
            trade.stock_symbol = stock_symbol;
        }
        if let Some(entry_price) = update.entry_price {
            trade.entry_price = entry_price;
        }
        if let Some(target_price) = update.target_price {
            trade.target_price = target_price;
        }
        if let Some(stop_loss) = update.stop_loss {
            trade.stop_loss = Some(stop_loss);
        }
        if let Some(quantity) = update.quantity {
            trade.quantity = quantity;
        }
        if let Some(conviction) = update.conviction {
            trade.conviction = conviction;
        }
        if let Some(trade_type) = update.trade_type {
            trade.trade_type = trade_type;
        }
        if let Some(notes) = update.notes {
            trade.notes = Some(notes);
        }
        if let Some(is_closed) = update.is_closed {
            trade.is_closed = is_closed;
        }

        // Editing the holding period re-arms the reminder: the date is
        // recomputed from the original creation time and the sent flag
        // resets, so a shortened period becomes eligible on the next sweep.
        if let Some(time_period_days) = update.time_period_days {
            if time_period_days < 1 {
                return Err(ValidationError::InvalidInput(
                    "timePeriodDays must be at least 1".to_string(),
                )
                .into());
            }
            trade.time_period_days = time_period_days;
            trade.reminder_date = reminder_date_for(trade.created_at, time_period_days);
            trade.reminder_sent = false;
        }

        trade.updated_at = Utc::now();
        self.repository.update(trade)
    }

    fn delete_trade(&self, user_id: &str, trade_id: &str) -> Result<()> {
        let trade = self.owned_trade(user_id, trade_id)?;
        self.repository.delete(&trade.id)?;
        Ok(())
    }

    fn summary(&self, user_id: &str) -> Result<TradeSummary> {
        let trades = self.repository.list_for_user(user_id)?;
        let total_trades = trades.len();
        let active_trades = trades.iter().filter(|t| !t.is_closed).count();

        let total_invested: f64 = trades
            .iter()
            .filter(|t| !t.is_closed)
            .map(|t| t.entry_price * t.quantity)
            .sum();

        let average_profit_target = if total_trades > 0 {
            trades.iter().map(Trade::profit_loss_percent).sum::<f64>() / total_trades as f64
        } else {
            0.0
        };

        Ok(TradeSummary {
            total_trades,
            active_trades,
            closed_trades: total_trades - active_trades,
            total_invested: round2(total_invested),
            average_profit_target: round2(average_profit_target),
        })
    }

    fn export_csv(&self, user_id: &str) -> Result<String> {
        let trades = self.repository.list_for_user(user_id)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "stockName",
                "stockSymbol",
                "tradeType",
                "entryPrice",
                "targetPrice",
                "stopLoss",
                "quantity",
                "conviction",
                "timePeriodDays",
                "profitLossPercent",
                "isClosed",
                "notes",
                "createdAt",
            ])
            .map_err(|e| Error::Unexpected(format!("CSV write failed: {e}")))?;

        for trade in &trades {
            writer
                .write_record([
                    trade.stock_name.clone(),
                    trade.stock_symbol.clone(),
                    trade.trade_type.as_str().to_string(),
                    trade.entry_price.to_string(),
                    trade.target_price.to_string(),
                    trade.stop_loss.map(|v| v.to_string()).unwrap_or_default(),
                    trade.quantity.to_string(),
                    trade.conviction.as_str().to_string(),
                    trade.time_period_days.to_string(),
                    trade.profit_loss_percent().to_string(),
                    trade.is_closed.to_string(),
                    trade.notes.clone().unwrap_or_default(),
                    trade.created_at.to_rfc3339(),
                ])
                .map_err(|e| Error::Unexpected(format!("CSV write failed: {e}")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Unexpected(format!("CSV flush failed: {e}")))?;
        String::from_utf8(bytes).map_err(|e| Error::Unexpected(format!("CSV encoding: {e}")))
    }
}
