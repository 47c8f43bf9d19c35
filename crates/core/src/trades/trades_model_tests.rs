//! Tests for trade domain models.

#[cfg(test)]
mod tests {
    use crate::trades::trades_model::*;
    use chrono::{Duration, TimeZone, Utc};

    fn base_trade() -> Trade {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        Trade {
            id: "trade-1".to_string(),
            user_id: "user-1".to_string(),
            stock_name: "Reliance Industries".to_string(),
            stock_symbol: "RELIANCE.NS".to_string(),
            entry_price: 100.0,
            target_price: 120.0,
            stop_loss: None,
            quantity: 1.0,
            conviction: Conviction::Medium,
            trade_type: TradeType::Buy,
            time_period_days: 30,
            reminder_date: reminder_date_for(created, 30),
            reminder_sent: false,
            is_closed: false,
            notes: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn profit_loss_percent_for_buy() {
        let trade = base_trade();
        assert_eq!(trade.profit_loss_percent(), 20.00);
    }

    #[test]
    fn profit_loss_percent_for_sell() {
        let mut trade = base_trade();
        trade.trade_type = TradeType::Sell;
        trade.target_price = 80.0;
        assert_eq!(trade.profit_loss_percent(), 20.00);
    }

    #[test]
    fn profit_loss_percent_with_zero_entry_is_zero() {
        let mut trade = base_trade();
        trade.entry_price = 0.0;
        trade.target_price = 50.0;
        assert_eq!(trade.profit_loss_percent(), 0.0);
    }

    #[test]
    fn profit_loss_percent_rounds_to_two_decimals() {
        let mut trade = base_trade();
        trade.entry_price = 3.0;
        trade.target_price = 4.0;
        // 33.333... -> 33.33
        assert_eq!(trade.profit_loss_percent(), 33.33);
    }

    #[test]
    fn losing_buy_is_negative() {
        let mut trade = base_trade();
        trade.target_price = 90.0;
        assert_eq!(trade.profit_loss_percent(), -10.00);
    }

    #[test]
    fn conviction_defaults_to_medium() {
        assert_eq!(Conviction::default(), Conviction::Medium);
    }

    #[test]
    fn reminder_date_counts_from_creation() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(
            reminder_date_for(created, 7),
            created + Duration::days(7)
        );
    }

    #[test]
    fn trade_view_carries_the_derived_percentage() {
        let view = TradeView::from(base_trade());
        assert_eq!(view.profit_loss_percent, 20.00);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["profitLossPercent"], 20.0);
        assert_eq!(json["stockSymbol"], "RELIANCE.NS");
        // Credential-free model, but make sure flattening kept the id.
        assert_eq!(json["id"], "trade-1");
    }

    #[test]
    fn enums_serialize_with_their_display_names() {
        assert_eq!(serde_json::to_string(&TradeType::Buy).unwrap(), r#""Buy""#);
        assert_eq!(serde_json::to_string(&TradeType::Sell).unwrap(), r#""Sell""#);
        assert_eq!(
            serde_json::to_string(&Conviction::High).unwrap(),
            r#""High""#
        );
        let parsed: Conviction = serde_json::from_str(r#""Low""#).unwrap();
        assert_eq!(parsed, Conviction::Low);
    }
}
