use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use tradediary_core::{
    db,
    reminders::{EmailNotifier, LogNotifier, Notifier, ReminderScheduler, ReminderSweep},
    trades::{TradeRepository, TradeService, TradeServiceTrait},
    users::{UserRepository, UserService, UserServiceTrait},
};
use tradediary_market_data::{AlphaVantageProvider, QuoteService};

use crate::{auth::AuthManager, config::Config};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub trade_service: Arc<dyn TradeServiceTrait + Send + Sync>,
    pub quote_service: Arc<QuoteService>,
    pub scheduler: Arc<ReminderScheduler>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let user_service = Arc::new(UserService::new(user_repo.clone()));

    let trade_repo = Arc::new(TradeRepository::new(pool.clone()));
    let trade_service = Arc::new(TradeService::new(trade_repo.clone()));

    let provider = Arc::new(AlphaVantageProvider::new(
        config.alpha_vantage_api_key.clone(),
    ));
    let quote_service = Arc::new(QuoteService::new(provider));

    let notifier: Arc<dyn Notifier> = match &config.smtp {
        Some(settings) => Arc::new(EmailNotifier::new(settings)?),
        None => {
            tracing::warn!("No SMTP settings configured; reminders will only be logged");
            Arc::new(LogNotifier)
        }
    };
    let sweep = Arc::new(ReminderSweep::new(trade_repo, user_repo, notifier));
    let scheduler = Arc::new(ReminderScheduler::new(sweep));

    let auth = Arc::new(AuthManager::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl,
    ));

    Ok(Arc::new(AppState {
        user_service,
        trade_service,
        quote_service,
        scheduler,
        auth,
    }))
}
