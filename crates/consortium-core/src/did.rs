//! Anchored DID document type.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A DID document returned by the anchoring service. Opaque beyond its
/// identifier: all other fields are carried through to the stakeholder's
/// published file unchanged.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct DidDocument {
    pub id: String,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl DidDocument {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            properties: Map::new(),
        }
    }
}
