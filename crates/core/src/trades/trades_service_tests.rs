//! Tests for the trade service: validation, ownership scoping, reminder
//! re-arming and aggregate statistics.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::trades::trades_model::*;
    use crate::trades::trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
    use crate::trades::TradeService;
    use chrono::{DateTime, Duration, Utc};
    use std::sync::{Arc, Mutex};

    /// In-memory repository mirroring the SQLite behavior the service
    /// relies on.
    #[derive(Default)]
    struct MockTradeRepository {
        trades: Mutex<Vec<Trade>>,
    }

    impl TradeRepositoryTrait for MockTradeRepository {
        fn list_for_user(&self, user_id: &str) -> Result<Vec<Trade>> {
            let mut trades: Vec<Trade> = self
                .trades
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect();
            trades.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(trades)
        }

        fn find_by_id(&self, trade_id: &str) -> Result<Option<Trade>> {
            Ok(self
                .trades
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == trade_id)
                .cloned())
        }

        fn insert(&self, trade: Trade) -> Result<Trade> {
            self.trades.lock().unwrap().push(trade.clone());
            Ok(trade)
        }

        fn update(&self, trade: Trade) -> Result<Trade> {
            let mut trades = self.trades.lock().unwrap();
            let slot = trades.iter_mut().find(|t| t.id == trade.id).unwrap();
            *slot = trade.clone();
            Ok(trade)
        }

        fn delete(&self, trade_id: &str) -> Result<usize> {
            let mut trades = self.trades.lock().unwrap();
            let before = trades.len();
            trades.retain(|t| t.id != trade_id);
            Ok(before - trades.len())
        }

        fn find_due_reminders(&self, as_of: DateTime<Utc>) -> Result<Vec<Trade>> {
            let mut due: Vec<Trade> = self
                .trades
                .lock()
                .unwrap()
                .iter()
                .filter(|t| !t.is_closed && !t.reminder_sent && t.reminder_date <= as_of)
                .cloned()
                .collect();
            due.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(due)
        }

        fn mark_reminder_sent(&self, trade_id: &str) -> Result<()> {
            let mut trades = self.trades.lock().unwrap();
            if let Some(trade) = trades.iter_mut().find(|t| t.id == trade_id) {
                trade.reminder_sent = true;
            }
            Ok(())
        }
    }

    fn service() -> (TradeService, Arc<MockTradeRepository>) {
        let repo = Arc::new(MockTradeRepository::default());
        (TradeService::new(repo.clone()), repo)
    }

    fn new_trade() -> NewTrade {
        NewTrade {
            stock_name: "Infosys".to_string(),
            stock_symbol: "INFY.NS".to_string(),
            entry_price: 1500.0,
            target_price: 1650.0,
            stop_loss: Some(1450.0),
            quantity: Some(5.0),
            conviction: Some(Conviction::High),
            trade_type: TradeType::Buy,
            time_period_days: 30,
            notes: None,
        }
    }

    #[test]
    fn create_derives_reminder_fields() {
        let (service, _) = service();
        let before = Utc::now();
        let trade = service.create_trade("user-1", new_trade()).unwrap();

        assert!(!trade.reminder_sent);
        assert!(!trade.is_closed);
        assert_eq!(trade.time_period_days, 30);
        let expected = trade.created_at + Duration::days(30);
        assert_eq!(trade.reminder_date, expected);
        assert!(trade.created_at >= before);
    }

    #[test]
    fn create_applies_defaults() {
        let (service, _) = service();
        let mut input = new_trade();
        input.quantity = None;
        input.conviction = None;
        let trade = service.create_trade("user-1", input).unwrap();
        assert_eq!(trade.quantity, 1.0);
        assert_eq!(trade.conviction, Conviction::Medium);
    }

    #[test]
    fn create_rejects_missing_required_fields() {
        let (service, _) = service();

        let mut input = new_trade();
        input.stock_name = " ".to_string();
        assert!(matches!(
            service.create_trade("user-1", input).unwrap_err(),
            Error::Validation(_)
        ));

        let mut input = new_trade();
        input.time_period_days = 0;
        assert!(matches!(
            service.create_trade("user-1", input).unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn update_by_non_owner_is_forbidden() {
        let (service, _) = service();
        let trade = service.create_trade("user-1", new_trade()).unwrap();

        let err = service
            .update_trade("user-2", &trade.id, TradeUpdate::default())
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));

        let err = service.delete_trade("user-2", &trade.id).unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[test]
    fn update_of_missing_trade_is_not_found() {
        let (service, _) = service();
        let err = service
            .update_trade("user-1", "missing", TradeUpdate::default())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn editing_holding_period_rearms_the_reminder() {
        let (service, repo) = service();
        let trade = service.create_trade("user-1", new_trade()).unwrap();
        repo.mark_reminder_sent(&trade.id).unwrap();

        let updated = service
            .update_trade(
                "user-1",
                &trade.id,
                TradeUpdate {
                    time_period_days: Some(7),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(!updated.reminder_sent);
        assert_eq!(updated.time_period_days, 7);
        assert_eq!(
            updated.reminder_date,
            trade.created_at + Duration::days(7)
        );
    }

    #[test]
    fn other_edits_leave_the_reminder_alone() {
        let (service, _) = service();
        let trade = service.create_trade("user-1", new_trade()).unwrap();

        let updated = service
            .update_trade(
                "user-1",
                &trade.id,
                TradeUpdate {
                    target_price: Some(1700.0),
                    is_closed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.reminder_date, trade.reminder_date);
        assert_eq!(updated.target_price, 1700.0);
        assert!(updated.is_closed);
    }

    #[test]
    fn summary_counts_and_sums() {
        let (service, _) = service();
        // Open Buy: entry 100 x 2, target 120 -> +20%
        let mut input = new_trade();
        input.entry_price = 100.0;
        input.target_price = 120.0;
        input.quantity = Some(2.0);
        service.create_trade("user-1", input).unwrap();

        // Closed Sell: entry 100, target 90 -> +10%, excluded from invested.
        let mut input = new_trade();
        input.entry_price = 100.0;
        input.target_price = 90.0;
        input.trade_type = TradeType::Sell;
        let closed = service.create_trade("user-1", input).unwrap();
        service
            .update_trade(
                "user-1",
                &closed.id,
                TradeUpdate {
                    is_closed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        // Someone else's trade must not leak in.
        service.create_trade("user-2", new_trade()).unwrap();

        let summary = service.summary("user-1").unwrap();
        assert_eq!(summary.total_trades, 2);
        assert_eq!(summary.active_trades, 1);
        assert_eq!(summary.closed_trades, 1);
        assert_eq!(summary.total_invested, 200.0);
        assert_eq!(summary.average_profit_target, 15.0);
    }

    #[test]
    fn summary_of_empty_journal_is_all_zero() {
        let (service, _) = service();
        let summary = service.summary("user-1").unwrap();
        assert_eq!(summary.total_trades, 0);
        assert_eq!(summary.total_invested, 0.0);
        assert_eq!(summary.average_profit_target, 0.0);
    }

    #[test]
    fn csv_export_contains_header_and_rows() {
        let (service, _) = service();
        service.create_trade("user-1", new_trade()).unwrap();

        let csv = service.export_csv("user-1").unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "stockName,stockSymbol,tradeType,entryPrice,targetPrice,stopLoss,quantity,conviction,timePeriodDays,profitLossPercent,isClosed,notes,createdAt"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Infosys,INFY.NS,Buy,1500,1650,1450,5,High,30,10,false"));
        assert!(lines.next().is_none());
    }
}
