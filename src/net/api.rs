//! REST client for the admin login endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpAuthApi` reports a network
//! failure, since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped into `LoginError`; nothing panics and nothing is
//! retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, LoginResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::error::LoginError;

/// Authentication backend seam. The page uses `HttpAuthApi`; tests inject
/// scripted implementations.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session token and user.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` on any non-success response, transport failure or
    /// malformed success body.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, LoginError>;
}

/// `AuthApi` over `fetch`, posting JSON to a fixed endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    endpoint: String,
}

impl HttpAuthApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(credentials)
                .map_err(|e| LoginError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| LoginError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                return Err(rejected(status, &body));
            }
            decode_login_response(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(LoginError::Network(format!("{} not available on server", self.endpoint)))
        }
    }
}

/// Build the rejection for a non-success status, lifting `message` out of the
/// body when it is a JSON object carrying one.
#[cfg(any(test, feature = "hydrate"))]
fn rejected(status: u16, body: &str) -> LoginError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    LoginError::Rejected { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_login_response(body: &str) -> Result<LoginResponse, LoginError> {
    let resp: LoginResponse = serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))?;
    if resp.token.is_empty() {
        return Err(LoginError::Decode("empty token".to_owned()));
    }
    Ok(resp)
}
