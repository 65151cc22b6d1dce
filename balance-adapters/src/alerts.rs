//! Alert sink adapters.
//!
//! Alert delivery is best-effort by contract: the service logs failures and
//! answers the balance request regardless, so both sinks here only have to
//! report what happened.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use balance_types::{AccountId, AlertError, AlertReason, AlertSink};

use crate::security::sign_alert;

/// `AlertSink` that writes alerts to the log and nothing else.
///
/// Default sink for local development.
#[derive(Clone, Copy, Default)]
pub struct LogAlertSink;

impl LogAlertSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn trigger_alert(
        &self,
        account: AccountId,
        reason: AlertReason,
    ) -> Result<(), AlertError> {
        tracing::info!(account_id = %account, reason = reason.as_str(), "balance alert");
        Ok(())
    }
}

/// Wire payload of a webhook alert delivery.
#[derive(Debug, Serialize)]
pub struct AlertEvent {
    pub event_id: Uuid,
    pub account_id: AccountId,
    pub reason: AlertReason,
    pub timestamp: DateTime<Utc>,
}

impl AlertEvent {
    fn now(account: AccountId, reason: AlertReason) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            account_id: account,
            reason,
            timestamp: Utc::now(),
        }
    }
}

/// `AlertSink` that POSTs a JSON [`AlertEvent`] to a configured URL.
///
/// When a secret is configured, the request carries an HMAC-SHA256 hex
/// signature of the body in the `X-Alert-Signature` header so receivers
/// can authenticate deliveries.
pub struct WebhookAlertSink {
    client: reqwest::Client,
    url: String,
    secret: Option<String>,
}

impl WebhookAlertSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            secret: None,
        }
    }

    /// Configures the signing secret for the `X-Alert-Signature` header.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

#[async_trait]
impl AlertSink for WebhookAlertSink {
    async fn trigger_alert(
        &self,
        account: AccountId,
        reason: AlertReason,
    ) -> Result<(), AlertError> {
        let event = AlertEvent::now(account, reason);
        let body =
            serde_json::to_vec(&event).map_err(|err| AlertError::Delivery(err.to_string()))?;

        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json");
        if let Some(secret) = &self.secret {
            request = request.header("X-Alert-Signature", sign_alert(&body, secret));
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|err| AlertError::Delivery(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AlertError::Delivery(format!("HTTP {}", response.status())));
        }

        tracing::debug!(
            event_id = %event.event_id,
            account_id = %account,
            reason = reason.as_str(),
            "alert webhook delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_sink_always_succeeds() {
        let sink = LogAlertSink::new();

        let result = sink
            .trigger_alert(AccountId::new(1001), AlertReason::InvestmentOpportunity)
            .await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_alert_event_wire_shape() {
        let event = AlertEvent::now(AccountId::new(1001), AlertReason::LowBalance);

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["account_id"], 1001);
        assert_eq!(value["reason"], "low_balance");
        assert!(value["event_id"].is_string());
        assert!(value["timestamp"].is_string());
    }
}
