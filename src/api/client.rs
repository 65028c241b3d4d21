use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    RequestFailed { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body the backend may attach to a failed request
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// API client for making HTTP requests
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and deserialize the response.
    /// Non-success statuses fail with `fallback` as the message.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path)).send().await?;

        if !response.ok() {
            return Err(ApiError::RequestFailed {
                status: response.status(),
                message: fallback.to_string(),
            });
        }

        decode(response).await
    }

    /// Make a POST request with a JSON body.
    /// Non-success statuses carry the server's `message`, or `fallback`.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::RequestFailed {
                status,
                message: error_message(&body, fallback),
            });
        }

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Extract `message` from a JSON error body, or use the fallback
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_server_body() {
        let body = r#"{"message": "Temperature out of range"}"#;
        assert_eq!(error_message(body, "fallback"), "Temperature out of range");
    }

    #[test]
    fn test_error_message_falls_back() {
        assert_eq!(error_message("", "fallback"), "fallback");
        assert_eq!(error_message("<html>502</html>", "fallback"), "fallback");
        assert_eq!(error_message(r#"{"error": "x"}"#, "fallback"), "fallback");
        assert_eq!(error_message(r#"{"message": null}"#, "fallback"), "fallback");
        assert_eq!(error_message(r#"{"message": "  "}"#, "fallback"), "fallback");
    }

    #[test]
    fn test_request_failed_displays_message() {
        let err = ApiError::RequestFailed {
            status: 400,
            message: "Name is required".to_string(),
        };
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_url_joins_base() {
        let client = ApiClient::new(&AppConfig {
            api_base_url: "https://health.example.com".to_string(),
            ..AppConfig::default()
        });
        assert_eq!(
            client.url("/api/declarations"),
            "https://health.example.com/api/declarations"
        );
    }
}
