//! Process-lifetime scheduler for the daily sweep.
//!
//! Started once at boot and stopped (if ever) at shutdown. Tests bypass the
//! clock entirely by calling [`ReminderSweep::run`] directly.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::{info, warn};
use tokio::task::JoinHandle;

use crate::reminders::schedule::{next_fire_after, REMINDER_HOUR, REMINDER_TZ};
use crate::reminders::sweep::ReminderSweep;

pub struct ReminderScheduler {
    sweep: Arc<ReminderSweep>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl ReminderScheduler {
    pub fn new(sweep: Arc<ReminderSweep>) -> Self {
        ReminderScheduler {
            sweep,
            handle: Mutex::new(None),
        }
    }

    /// Spawn the daily timer loop. Calling `start` on an already running
    /// scheduler is a logged no-op.
    pub fn start(&self) {
        let mut handle = self.handle.lock().unwrap();
        if handle.is_some() {
            warn!("Reminder scheduler already running");
            return;
        }

        let sweep = self.sweep.clone();
        *handle = Some(tokio::spawn(async move {
            loop {
                let now = Utc::now();
                let fire_at = next_fire_after(now, REMINDER_TZ);
                info!(
                    "Next reminder sweep at {} ({:02}:00 {})",
                    fire_at, REMINDER_HOUR, REMINDER_TZ
                );

                let wait = (fire_at - now)
                    .to_std()
                    .unwrap_or(std::time::Duration::ZERO);
                tokio::time::sleep(wait).await;

                sweep.run().await;
            }
        }));
        info!("Reminder scheduler started");
    }

    /// Abort the timer loop. A sweep already in flight is not interrupted
    /// mid-trade by anything other than process exit.
    pub fn stop(&self) {
        if let Some(handle) = self.handle.lock().unwrap().take() {
            handle.abort();
            info!("Reminder scheduler stopped");
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
