//! # Balance Client SDK
//!
//! A typed Rust client for the Balance API.

use balance_types::{BalanceSnapshot, Currency};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Balance API client.
pub struct BalanceClient {
    base_url: String,
    http: Client,
}

impl BalanceClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches a balance snapshot.
    ///
    /// `identifier` is passed through verbatim; the server decides whether it
    /// names a direct account (`"1001"`) or a business account (`"BA5-2"`).
    /// A `contact_email` is recorded on the account before the balance is
    /// answered.
    pub async fn balance(
        &self,
        identifier: &str,
        currency: Currency,
        contact_email: Option<&str>,
    ) -> Result<BalanceSnapshot, ClientError> {
        let path = match contact_email {
            Some(email) => format!("/api/balance/{}/{}/{}", identifier, currency, email),
            None => format!("/api/balance/{}/{}", identifier, currency),
        };
        self.get(&path).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BalanceClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = BalanceClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_balance_path_shapes() {
        // The path layout is part of the API contract.
        assert_eq!(
            format!("/api/balance/{}/{}", "BA5-2", Currency::EURO),
            "/api/balance/BA5-2/EURO"
        );
        assert_eq!(
            format!(
                "/api/balance/{}/{}/{}",
                "1001",
                Currency::SEK,
                "astrid@example.se"
            ),
            "/api/balance/1001/SEK/astrid@example.se"
        );
    }
}
