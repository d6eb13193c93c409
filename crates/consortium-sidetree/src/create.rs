//! The consortium configuration bootstrap pipeline.
use crate::{CreateDidOptions, DidClient, DidClientError};
use consortium_core::assembler::{assemble_configs, AssemblyError, ConfigOutput};
use consortium_core::config::Configuration;
use consortium_core::did::DidDocument;
use consortium_core::key::{load_private_key, KeyError};
use log::{debug, info};
use std::collections::HashMap;
use thiserror::Error;

/// An error aborting the bootstrap pipeline. Every variant names the
/// offending domain; there is no partial-success mode.
#[derive(Error, Debug)]
pub enum CreateConfigError {
    /// A member's signing key could not be loaded.
    #[error("failed to load signing key for domain {domain}: {source}")]
    KeyLoad { domain: String, source: KeyError },
    /// The anchoring service failed for a member.
    #[error("failed to create DID for domain {domain}: {source}")]
    DidCreation {
        domain: String,
        source: DidClientError,
    },
    /// Internal-consistency fault during assembly.
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Anchors one DID per member, strictly in document order, returning the
/// domain-to-document mapping. Fail-fast and non-retried: the first key or
/// anchoring failure aborts the run and earlier anchored DIDs are
/// discarded, so a failed run never yields a partially consistent file set.
/// No remote rollback is attempted; anchoring is externally reconciled.
pub async fn create_dids(
    config: &Configuration,
    client: &dyn DidClient,
) -> Result<HashMap<String, DidDocument>, CreateConfigError> {
    let mut dids = HashMap::with_capacity(config.members_data.len());
    for member in &config.members_data {
        let private_key = load_private_key(&member.private_key_jwk_path).map_err(|source| {
            CreateConfigError::KeyLoad {
                domain: member.domain.clone(),
                source,
            }
        })?;
        // Only the public form leaves this scope; the private key is
        // dropped at the end of the iteration and never persisted.
        let options =
            CreateDidOptions::new(private_key.to_public(), &config.consortium_data.policy);
        debug!("anchoring DID for domain {}", member.domain);
        let document = client
            .create_did(&member.domain, options)
            .await
            .map_err(|source| CreateConfigError::DidCreation {
                domain: member.domain.clone(),
                source,
            })?;
        info!("anchored DID {} for domain {}", document.id, member.domain);
        dids.insert(member.domain.clone(), document);
    }
    Ok(dids)
}

/// Runs the full pipeline short of persistence: anchors every member DID
/// and assembles the per-domain output documents, consortium first.
pub async fn create_config(
    config: &Configuration,
    client: &dyn DidClient,
) -> Result<Vec<(String, ConfigOutput)>, CreateConfigError> {
    let dids = create_dids(config, client).await?;
    Ok(assemble_configs(config, &dids)?)
}
