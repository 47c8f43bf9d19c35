//! Holding-period reminders.
//!
//! Once a day, at a fixed local time, the scheduler sweeps the journal for
//! open trades whose holding period has elapsed and emails their owners.
//! The sweep is sequential and per-trade fault isolated: one failed send
//! never aborts the batch, and each successful send is persisted before
//! the next trade is touched.

mod notifier;
mod schedule;
mod scheduler;
mod sweep;

pub use notifier::{EmailNotifier, LogNotifier, Notifier, ReminderEmail, SmtpSettings};
pub use schedule::{next_fire_after, REMINDER_HOUR, REMINDER_TZ};
pub use scheduler::ReminderScheduler;
pub use sweep::ReminderSweep;
