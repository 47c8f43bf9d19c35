//! The daily reminder sweep.

use std::sync::Arc;

use chrono::Utc;
use log::{error, info, warn};

use crate::reminders::notifier::{Notifier, ReminderEmail};
use crate::trades::TradeRepositoryTrait;
use crate::users::UserRepositoryTrait;

/// Scans for due trades and notifies their owners, one at a time.
///
/// This is a background path: every failure is absorbed here, logged, and
/// isolated to the trade it occurred on.
pub struct ReminderSweep {
    trades: Arc<dyn TradeRepositoryTrait>,
    users: Arc<dyn UserRepositoryTrait>,
    notifier: Arc<dyn Notifier>,
}

impl ReminderSweep {
    pub fn new(
        trades: Arc<dyn TradeRepositoryTrait>,
        users: Arc<dyn UserRepositoryTrait>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        ReminderSweep {
            trades,
            users,
            notifier,
        }
    }

    /// Run one sweep. Returns the number of reminders dispatched.
    pub async fn run(&self) -> usize {
        info!("Running daily reminder sweep");

        let due = match self.trades.find_due_reminders(Utc::now()) {
            Ok(due) => due,
            Err(e) => {
                error!("Reminder sweep could not query due trades: {e}");
                return 0;
            }
        };

        if due.is_empty() {
            info!("No reminders due today");
            return 0;
        }

        let mut sent = 0;
        for trade in &due {
            let user = match self.users.find_by_id(&trade.user_id) {
                Ok(Some(user)) => user,
                Ok(None) => {
                    warn!(
                        "Skipping reminder for trade {}: owner {} not found",
                        trade.id, trade.user_id
                    );
                    continue;
                }
                Err(e) => {
                    warn!(
                        "Skipping reminder for trade {}: owner lookup failed: {e}",
                        trade.id
                    );
                    continue;
                }
            };

            let email = ReminderEmail::compose(&user, trade);
            match self
                .notifier
                .send(&user.email, &email.subject(), &email.html_body())
                .await
            {
                Ok(()) => {
                    // Persist before moving on, so a crash mid-batch cannot
                    // re-notify this trade tomorrow.
                    if let Err(e) = self.trades.mark_reminder_sent(&trade.id) {
                        error!("Failed to mark trade {} as notified: {e}", trade.id);
                    } else {
                        sent += 1;
                    }
                }
                Err(e) => {
                    error!("Reminder for trade {} failed to send: {e}", trade.id);
                }
            }
        }

        info!("Reminder sweep finished: {sent} of {} dispatched", due.len());
        sent
    }
}
