//! Sidetree DID anchoring client and the consortium bootstrap pipeline.
pub mod client;
pub mod create;

use async_trait::async_trait;
use consortium_core::config::ConsortiumPolicy;
use consortium_core::did::DidDocument;
use consortium_core::key::Jwk;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error returned by a DID anchoring client.
#[derive(Error, Debug)]
pub enum DidClientError {
    /// Transport-level failure sending the create request.
    #[error("failed to send create sidetree request: {0}")]
    Http(#[from] reqwest::Error),
    /// The anchoring service rejected the operation.
    #[error("sidetree create operation rejected with status {status}: {body}")]
    OperationRejected { status: u16, body: String },
    /// The anchoring service returned a body that is not a DID document.
    #[error("malformed DID document in sidetree response: {0}")]
    MalformedResponse(serde_json::Error),
}

/// Options for a DID create operation, derived from the stakeholder's
/// public key and the consortium's Sidetree policy.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CreateDidOptions {
    pub public_key: Jwk,
    pub key_algorithm: String,
    pub hash_algorithm: String,
}

impl CreateDidOptions {
    /// Creation options for one stakeholder under the given network policy.
    /// The key must already be reduced to its public form.
    pub fn new(public_key: Jwk, policy: &ConsortiumPolicy) -> Self {
        Self {
            public_key,
            key_algorithm: policy.sidetree.key_algorithm.clone(),
            hash_algorithm: policy.sidetree.hash_algorithm.clone(),
        }
    }
}

/// Any backend capable of anchoring a DID for a stakeholder domain.
/// Implemented by the HTTP Sidetree client and by test doubles.
#[async_trait]
pub trait DidClient {
    /// Anchors a DID for `domain`, returning the anchored DID document.
    async fn create_did(
        &self,
        domain: &str,
        options: CreateDidOptions,
    ) -> Result<DidDocument, DidClientError>;
}
