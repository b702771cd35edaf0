//! HTTP client for Slack incoming-webhook delivery

use async_trait::async_trait;
use beacon_core::BeaconError;
use reqwest::{Client, Url};

use crate::config::SlackConfig;
use crate::message::Payload;

/// Transport seam for posting a composed payload to a webhook URL
#[async_trait]
pub trait SlackTransport: Send + Sync {
    /// Post the payload, returning the numeric HTTP status code.
    ///
    /// The status code is observability data only; callers do not branch
    /// on it.
    async fn post(&self, url: &str, payload: &Payload) -> Result<u16, BeaconError>;
}

/// Webhook client backed by reqwest.
///
/// Delivery is a single attempt: the payload is serialized to JSON and
/// posted as the `payload` form field, the way Slack-compatible incoming
/// webhooks expect it.
pub struct SlackClient {
    client: Client,
}

impl SlackClient {
    pub fn new(config: &SlackConfig) -> Result<Self, BeaconError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| BeaconError::HttpError(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SlackTransport for SlackClient {
    async fn post(&self, url: &str, payload: &Payload) -> Result<u16, BeaconError> {
        let url = Url::parse(url).map_err(|e| BeaconError::InvalidUrl(e.to_string()))?;

        let json = serde_json::to_string(payload)?;

        let response = self
            .client
            .post(url)
            .form(&[("payload", json.as_str())])
            .send()
            .await
            .map_err(|e| BeaconError::HttpError(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
