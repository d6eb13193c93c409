//! Assembly of per-domain output documents.
use crate::config::{Configuration, ConsortiumPolicy, MemberPolicy};
use crate::did::DidDocument;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// An internal-consistency fault during assembly. Unreachable if DID
/// creation completed for every member.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("no anchored DID for domain {0}")]
    MissingDid(String),
}

/// Reference to a member within the consortium file: the member's domain
/// and its anchored DID identifier. The member's own policy and endpoints
/// belong to the member's file, not here.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct MemberRef {
    pub domain: String,
    pub did: String,
}

/// The consortium-domain output document.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ConsortiumConfig {
    pub domain: String,
    pub policy: ConsortiumPolicy,
    pub members: Vec<MemberRef>,
}

/// A stakeholder-domain output document.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct MemberConfig {
    pub domain: String,
    pub policy: MemberPolicy,
    pub endpoints: Vec<String>,
    pub did: DidDocument,
}

/// A per-domain output document. No further mutation after assembly.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(untagged)]
pub enum ConfigOutput {
    Consortium(ConsortiumConfig),
    Member(MemberConfig),
}

/// Merges the parsed configuration and the anchored DIDs into one output
/// document per domain: the consortium domain first, then each member in
/// document order. Pure function: no I/O.
pub fn assemble_configs(
    config: &Configuration,
    dids: &HashMap<String, DidDocument>,
) -> Result<Vec<(String, ConfigOutput)>, AssemblyError> {
    let mut outputs = Vec::with_capacity(1 + config.members_data.len());

    let mut member_refs = Vec::with_capacity(config.members_data.len());
    for member in &config.members_data {
        let did = dids
            .get(&member.domain)
            .ok_or_else(|| AssemblyError::MissingDid(member.domain.clone()))?;
        member_refs.push(MemberRef {
            domain: member.domain.clone(),
            did: did.id.clone(),
        });
    }

    outputs.push((
        config.consortium_data.domain.clone(),
        ConfigOutput::Consortium(ConsortiumConfig {
            domain: config.consortium_data.domain.clone(),
            policy: config.consortium_data.policy.clone(),
            members: member_refs,
        }),
    ));

    for member in &config.members_data {
        // Checked above while building member_refs.
        let did = dids
            .get(&member.domain)
            .ok_or_else(|| AssemblyError::MissingDid(member.domain.clone()))?;
        outputs.push((
            member.domain.clone(),
            ConfigOutput::Member(MemberConfig {
                domain: member.domain.clone(),
                policy: member.policy.clone(),
                endpoints: member.endpoints.clone(),
                did: did.clone(),
            }),
        ));
    }

    Ok(outputs)
}
