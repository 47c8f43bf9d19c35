// Diesel table definitions, kept in sync with the embedded migrations.

diesel::table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    trades (id) {
        id -> Text,
        user_id -> Text,
        stock_name -> Text,
        stock_symbol -> Text,
        entry_price -> Double,
        target_price -> Double,
        stop_loss -> Nullable<Double>,
        quantity -> Double,
        conviction -> Text,
        trade_type -> Text,
        time_period_days -> Integer,
        reminder_date -> Timestamp,
        reminder_sent -> Bool,
        is_closed -> Bool,
        notes -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(trades -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(trades, users);
