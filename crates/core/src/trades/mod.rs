//! Trades module - domain models, service, repository.

mod trades_model;
mod trades_model_tests;
mod trades_repository;
mod trades_service;
mod trades_service_tests;
mod trades_traits;

pub use trades_model::{
    reminder_date_for, Conviction, NewTrade, Trade, TradeSummary, TradeType, TradeUpdate,
    TradeView,
};
pub use trades_repository::TradeRepository;
pub use trades_service::TradeService;
pub use trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
