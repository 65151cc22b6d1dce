//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// Unset selects the seeded in-memory store, set selects SQLite.
    pub database_url: Option<String>,
    /// Unset selects the log-only alert sink.
    pub alert_webhook_url: Option<String>,
    pub alert_webhook_secret: Option<String>,
    pub request_timeout_secs: u64,
    pub rate_limit_per_minute: u32,
    pub seed_demo_accounts: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL").ok();
        let alert_webhook_url = env::var("ALERT_WEBHOOK_URL").ok();
        let alert_webhook_secret = env::var("ALERT_WEBHOOK_SECRET").ok();

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?;

        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .unwrap_or_else(|_| "120".to_string())
            .parse()?;

        let seed_demo_accounts = env::var("SEED_DEMO_ACCOUNTS")
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        Ok(Self {
            port,
            database_url,
            alert_webhook_url,
            alert_webhook_secret,
            request_timeout_secs,
            rate_limit_per_minute,
            seed_demo_accounts,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("YES"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy(""));
    }
}
