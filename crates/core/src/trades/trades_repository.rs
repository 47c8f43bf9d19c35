//! Diesel-backed trade repository.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::db::{get_connection, DbPool, StorageError};
use crate::errors::{DatabaseError, Error, Result};
use crate::schema::trades;
use crate::trades::trades_model::{Conviction, Trade, TradeType};
use crate::trades::trades_traits::TradeRepositoryTrait;

/// Database model for trades.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeDB {
    pub id: String,
    pub user_id: String,
    pub stock_name: String,
    pub stock_symbol: String,
    pub entry_price: f64,
    pub target_price: f64,
    pub stop_loss: Option<f64>,
    pub quantity: f64,
    pub conviction: String,
    pub trade_type: String,
    pub time_period_days: i32,
    pub reminder_date: NaiveDateTime,
    pub reminder_sent: bool,
    pub is_closed: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Trade> for TradeDB {
    fn from(trade: Trade) -> Self {
        TradeDB {
            id: trade.id,
            user_id: trade.user_id,
            stock_name: trade.stock_name,
            stock_symbol: trade.stock_symbol,
            entry_price: trade.entry_price,
            target_price: trade.target_price,
            stop_loss: trade.stop_loss,
            quantity: trade.quantity,
            conviction: trade.conviction.as_str().to_string(),
            trade_type: trade.trade_type.as_str().to_string(),
            time_period_days: trade.time_period_days,
            reminder_date: trade.reminder_date.naive_utc(),
            reminder_sent: trade.reminder_sent,
            is_closed: trade.is_closed,
            notes: trade.notes,
            created_at: trade.created_at.naive_utc(),
            updated_at: trade.updated_at.naive_utc(),
        }
    }
}

impl TryFrom<TradeDB> for Trade {
    type Error = Error;

    fn try_from(db: TradeDB) -> Result<Trade> {
        let trade_type = TradeType::from_str(&db.trade_type)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        let conviction = Conviction::from_str(&db.conviction)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(Trade {
            id: db.id,
            user_id: db.user_id,
            stock_name: db.stock_name,
            stock_symbol: db.stock_symbol,
            entry_price: db.entry_price,
            target_price: db.target_price,
            stop_loss: db.stop_loss,
            quantity: db.quantity,
            conviction,
            trade_type,
            time_period_days: db.time_period_days,
            reminder_date: DateTime::<Utc>::from_naive_utc_and_offset(db.reminder_date, Utc),
            reminder_sent: db.reminder_sent,
            is_closed: db.is_closed,
            notes: db.notes,
            created_at: DateTime::<Utc>::from_naive_utc_and_offset(db.created_at, Utc),
            updated_at: DateTime::<Utc>::from_naive_utc_and_offset(db.updated_at, Utc),
        })
    }
}

pub struct TradeRepository {
    pool: Arc<DbPool>,
}

impl TradeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        TradeRepository { pool }
    }
}

impl TradeRepositoryTrait for TradeRepository {
    fn list_for_user(&self, user: &str) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = trades::table
            .filter(trades::user_id.eq(user))
            .order(trades::created_at.desc())
            .load::<TradeDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Trade::try_from).collect()
    }

    fn find_by_id(&self, trade_id: &str) -> Result<Option<Trade>> {
        let mut conn = get_connection(&self.pool)?;
        let found = trades::table
            .find(trade_id)
            .first::<TradeDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        found.map(Trade::try_from).transpose()
    }

    fn insert(&self, trade: Trade) -> Result<Trade> {
        let record = TradeDB::from(trade);
        let mut conn = get_connection(&self.pool)?;
        let inserted = diesel::insert_into(trades::table)
            .values(&record)
            .returning(TradeDB::as_returning())
            .get_result::<TradeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Trade::try_from(inserted)
    }

    fn update(&self, trade: Trade) -> Result<Trade> {
        let record = TradeDB::from(trade);
        let mut conn = get_connection(&self.pool)?;
        let updated = diesel::update(trades::table.find(record.id.clone()))
            .set(&record)
            .returning(TradeDB::as_returning())
            .get_result::<TradeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Trade::try_from(updated)
    }

    fn delete(&self, trade_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(trades::table.find(trade_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound(format!("Trade not found: {trade_id}")).into());
        }
        Ok(deleted)
    }

    fn find_due_reminders(&self, as_of: DateTime<Utc>) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = trades::table
            .filter(trades::is_closed.eq(false))
            .filter(trades::reminder_sent.eq(false))
            .filter(trades::reminder_date.le(as_of.naive_utc()))
            .order(trades::created_at.asc())
            .load::<TradeDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Trade::try_from).collect()
    }

    fn mark_reminder_sent(&self, trade_id: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let updated = diesel::update(trades::table.find(trade_id))
            .set((
                trades::reminder_sent.eq(true),
                trades::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        if updated == 0 {
            return Err(DatabaseError::NotFound(format!("Trade not found: {trade_id}")).into());
        }
        Ok(())
    }
}
