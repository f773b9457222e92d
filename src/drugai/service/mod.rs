//! # Hosted Services
//!
//! Model inference and subscription checkout run on hosted endpoints. This
//! module is the crate's only boundary with them.
//!
//! ## Transport Abstraction
//!
//! Requests go through the [`Transport`] trait so that the clients here can be
//! exercised without a network:
//! - [`HttpTransport`]: production, `reqwest::blocking` against `api_url`
//! - [`memory::CannedTransport`]: scripted replies, records every request
//! - [`Unconfigured`]: used until an `api_url` is set
//!
//! Every call is a JSON `POST` with a bearer token. A transport only moves
//! bytes; interpreting status codes is the client's job:
//!
//! - [`inference`]: `POST /invoke`, `402` means the monthly quota is used up
//! - [`checkout`]: `POST /checkout`, answers with a redirect or a checkout URL
//!
//! ## One Request at a Time
//!
//! [`guard::InFlight`] keeps a second submission from going out while one is
//! still outstanding. Nothing is retried automatically.

use crate::auth::Token;
use crate::error::{DrugaiError, Result};
use std::time::Duration;

pub mod checkout;
pub mod guard;
pub mod inference;
pub mod memory;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw status and body of a service reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    /// POSTs `body` as JSON to `path` (relative to the service base URL).
    fn post_json(&self, path: &str, token: &Token, body: &serde_json::Value) -> Result<Reply>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(DrugaiError::Config("api_url is not set".into()));
        }
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("drugai/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post_json(&self, path: &str, token: &Token, body: &serde_json::Value) -> Result<Reply> {
        (**self).post_json(path, token, body)
    }
}

/// Stands in when no `api_url` is configured; every call fails with a hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl Transport for Unconfigured {
    fn post_json(&self, path: &str, _token: &Token, _body: &serde_json::Value) -> Result<Reply> {
        Err(DrugaiError::Config(format!(
            "cannot reach {}: api-url is not set (run `drugai config api-url <url>`)",
            path
        )))
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, token: &Token, body: &serde_json::Value) -> Result<Reply> {
        let url = self.url(path);
        tracing::info!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(body)
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(%url, status, "reply received");
        Ok(Reply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let transport =
            HttpTransport::new("https://api.example.com/", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.url("/invoke"), "https://api.example.com/invoke");
        assert_eq!(transport.url("checkout"), "https://api.example.com/checkout");
    }

    #[test]
    fn empty_base_url_is_a_config_error() {
        let err = HttpTransport::new("  ", Duration::from_secs(1));
        assert!(matches!(err, Err(DrugaiError::Config(_))));
    }

    #[test]
    fn unconfigured_transport_explains_itself() {
        let err = Unconfigured
            .post_json("/invoke", &Token::new("t"), &serde_json::json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("api-url"));
    }

    #[test]
    fn success_range() {
        assert!(Reply::new(200, "").is_success());
        assert!(Reply::new(204, "").is_success());
        assert!(!Reply::new(402, "").is_success());
        assert!(!Reply::new(500, "").is_success());
    }
}
