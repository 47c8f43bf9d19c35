//! Core domain logic for the trade diary.
//!
//! Storage-specific types (Diesel models, connection pooling) live in the
//! [`db`] module and the per-domain repositories; everything else is
//! database-agnostic and works against the repository traits, so services
//! and the reminder scheduler can be exercised with in-memory fakes.

pub mod db;
pub mod errors;
pub mod reminders;
pub mod schema;
pub mod trades;
pub mod users;

pub use errors::{DatabaseError, Error, Result, ValidationError};
