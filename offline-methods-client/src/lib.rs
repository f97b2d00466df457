//! # Offline Methods Client SDK
//!
//! A typed Rust client for the offline payment methods checkout API.

use offline_methods_types::{CheckoutConfig, CheckoutOption, StoreId};
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

/// Offline methods API client.
pub struct OfflineMethodsClient {
    base_url: String,
    http: Client,
}

impl OfflineMethodsClient {
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

    /// Fetches the checkout payload of a store. Empty when the family is inactive.
    pub async fn checkout_config(&self, store: StoreId) -> Result<CheckoutConfig, ClientError> {
        self.get(&format!("/api/stores/{}/checkout-config", store))
            .await
    }

    /// Fetches the options offered to shoppers of a store.
    pub async fn payment_methods_off(
        &self,
        store: StoreId,
    ) -> Result<Vec<CheckoutOption>, ClientError> {
        self.get(&format!("/api/stores/{}/payment-methods-off", store))
            .await
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
