//! Reminder composition and the mail transport seam.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::errors::{Error, Result};
use crate::trades::{Trade, TradeType};
use crate::users::User;

/// Best-effort delivery of one notification. Failures surface as errors to
/// the sweep, which logs them and moves on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()>;
}

/// The payload of a holding-period reminder.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderEmail {
    pub user_name: String,
    pub stock_name: String,
    pub trade_type: TradeType,
    pub time_period_days: i32,
    pub entry_price: f64,
    pub target_price: f64,
}

impl ReminderEmail {
    pub fn compose(user: &User, trade: &Trade) -> Self {
        ReminderEmail {
            user_name: user.name.clone(),
            stock_name: trade.stock_name.clone(),
            trade_type: trade.trade_type,
            time_period_days: trade.time_period_days,
            entry_price: trade.entry_price,
            target_price: trade.target_price,
        }
    }

    pub fn subject(&self) -> String {
        format!("Trade Reminder: {}", self.stock_name)
    }

    pub fn html_body(&self) -> String {
        format!(
            "<p>Hi {name},</p>\
             <p>This is a reminder for your <b>{trade_type}</b> trade on <b>{stock}</b>.</p>\
             <p>Your holding period of {days} days has ended.</p>\
             <p><b>Entry:</b> {entry}</p>\
             <p><b>Target:</b> {target}</p>\
             <p>Please review your position in the dashboard.</p>\
             <br>\
             <p>Best,<br>The Trade Diary Team</p>",
            name = self.user_name,
            trade_type = self.trade_type,
            stock = self.stock_name,
            days = self.time_period_days,
            entry = self.entry_price,
            target = self.target_price,
        )
    }
}

/// SMTP transport configuration.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender shown to recipients, e.g. `Trade Diary <no-reply@example.com>`.
    pub from_address: String,
}

/// Lettre-backed SMTP notifier.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: lettre::message::Mailbox,
}

impl EmailNotifier {
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| Error::Notification(format!("Invalid SMTP relay: {e}")))?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();
        let from = settings
            .from_address
            .parse()
            .map_err(|e| Error::Notification(format!("Invalid sender address: {e}")))?;
        Ok(EmailNotifier { transport, from })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to
                .parse()
                .map_err(|e| Error::Notification(format!("Invalid recipient {to}: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| Error::Notification(format!("Failed to build message: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| Error::Notification(format!("SMTP send failed: {e}")))?;
        Ok(())
    }
}

/// Stand-in used when no SMTP transport is configured. Reminders are
/// logged so the sweep still marks them handled.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<()> {
        log::info!("Reminder (email disabled) to {to}: {subject}");
        Ok(())
    }
}
