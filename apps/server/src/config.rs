use std::{net::SocketAddr, time::Duration};

use tradediary_core::reminders::SmtpSettings;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub alpha_vantage_api_key: String,
    /// SMTP transport settings; when absent, reminders are logged instead
    /// of emailed.
    pub smtp: Option<SmtpSettings>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TD_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid TD_LISTEN_ADDR");
        let db_path = std::env::var("TD_DB_PATH").unwrap_or_else(|_| "./db/tradediary.db".into());
        let cors_allow = std::env::var("TD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("TD_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let jwt_secret = std::env::var("TD_JWT_SECRET").expect("TD_JWT_SECRET must be set");
        let token_ttl_secs: u64 = std::env::var("TD_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .unwrap_or(86400);
        let alpha_vantage_api_key =
            std::env::var("TD_ALPHA_VANTAGE_API_KEY").unwrap_or_else(|_| "demo".into());
        let smtp = Self::smtp_from_env();

        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            alpha_vantage_api_key,
            smtp,
        }
    }

    fn smtp_from_env() -> Option<SmtpSettings> {
        let host = std::env::var("TD_SMTP_HOST").ok()?;
        let port = std::env::var("TD_SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(465);
        let username = std::env::var("TD_SMTP_USER").ok()?;
        let password = std::env::var("TD_SMTP_PASS").ok()?;
        let from_address = std::env::var("TD_SMTP_FROM")
            .unwrap_or_else(|_| format!("Trade Diary <{username}>"));
        Some(SmtpSettings {
            host,
            port,
            username,
            password,
            from_address,
        })
    }
}
