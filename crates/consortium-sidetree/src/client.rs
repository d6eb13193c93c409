//! HTTP Sidetree anchoring client.
use crate::{CreateDidOptions, DidClient, DidClientError};
use async_trait::async_trait;
use consortium_core::did::DidDocument;
use log::debug;
use serde::Serialize;

/// Wire form of a Sidetree create request.
#[derive(Serialize, Debug)]
struct CreateDidRequest<'a> {
    #[serde(rename = "type")]
    operation_type: &'static str,
    domain: &'a str,
    #[serde(flatten)]
    options: &'a CreateDidOptions,
}

/// A [`DidClient`] backed by a Sidetree node's HTTP operations endpoint.
/// Transport concerns (TLS trust configuration, timeouts, retries) belong
/// to the [`reqwest::Client`] passed in by the caller.
pub struct HttpSidetreeDidClient {
    url: String,
    http_client: reqwest::Client,
}

impl HttpSidetreeDidClient {
    /// New client for the Sidetree node at `url`, with default transport.
    pub fn new(url: &str) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// New client with a caller-configured transport.
    pub fn with_client(url: &str, http_client: reqwest::Client) -> Self {
        Self {
            url: format!("{}/operations", url.trim_end_matches('/')),
            http_client,
        }
    }
}

#[async_trait]
impl DidClient for HttpSidetreeDidClient {
    async fn create_did(
        &self,
        domain: &str,
        options: CreateDidOptions,
    ) -> Result<DidDocument, DidClientError> {
        let request = CreateDidRequest {
            operation_type: "create",
            domain,
            options: &options,
        };
        debug!("sending create operation for domain {} to {}", domain, self.url);
        let response = self
            .http_client
            .post(&self.url)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DidClientError::OperationRejected {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(DidClientError::MalformedResponse)
    }
}
