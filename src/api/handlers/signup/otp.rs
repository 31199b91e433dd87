//! One-time-passcode dispatch behind the `OtpDispatcher` seam.
//!
//! Successful signups trigger a `POST {base_url}/api/auth/send-otp` call so the
//! passcode service can deliver a verification code. Delivery is best-effort:
//! the signup handler logs a failure and still returns the created account.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, info_span, Instrument};
use url::Url;

use crate::APP_USER_AGENT;

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Dispatch seam for the signup handler.
#[async_trait]
pub trait OtpDispatcher: Send + Sync {
    /// Request a one-time passcode for the given email.
    async fn send_otp(&self, email: &str) -> Result<()>;
}

/// Production dispatcher calling the passcode service over HTTP.
/// The endpoint is resolved and validated once at construction.
pub struct HttpOtpDispatcher {
    client: Client,
    endpoint: Url,
}

impl HttpOtpDispatcher {
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed or the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = send_otp_url(base_url)?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(DISPATCH_TIMEOUT)
            .build()
            .context("failed to build OTP dispatch client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl OtpDispatcher for HttpOtpDispatcher {
    async fn send_otp(&self, email: &str) -> Result<()> {
        let mut map = HashMap::new();
        map.insert("email", email);

        let span = info_span!(
            "http.request",
            http.method = "POST",
            http.url = %self.endpoint
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&map)
            .send()
            .instrument(span)
            .await
            .context("failed to send OTP dispatch request")?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "OTP dispatch returned status {}",
                response.status()
            ));
        }

        Ok(())
    }
}

/// Local dev dispatcher that logs the request instead of calling the service.
#[derive(Clone, Debug)]
pub struct LogOtpDispatcher;

#[async_trait]
impl OtpDispatcher for LogOtpDispatcher {
    async fn send_otp(&self, email: &str) -> Result<()> {
        info!(email = %email, "OTP dispatch stub");
        Ok(())
    }
}

/// Build the dispatch endpoint from the configured base URL (trailing slash tolerated).
fn send_otp_url(base_url: &str) -> Result<Url> {
    let base = base_url.trim_end_matches('/');
    Url::parse(&format!("{base}/api/auth/send-otp"))
        .with_context(|| format!("invalid OTP dispatch base URL: {base_url}"))
}
