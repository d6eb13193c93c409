//! Private signing key loading (JWK format).
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Curves accepted for stakeholder signing keys.
const SUPPORTED_CURVES: [&str; 3] = ["Ed25519", "secp256k1", "P-256"];

/// An error relating to loading a stakeholder signing key.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Key file could not be read.
    #[error("failed to read jwk file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Key file contents could not be decoded as a JWK.
    #[error("failed to unmarshal to jwk from {path}: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// JWK has no private key component.
    #[error("jwk file {0} contains no private key")]
    MissingPrivateKey(PathBuf),
    /// JWK curve is missing or not supported.
    #[error("unsupported curve {curve:?} in jwk file {path}")]
    UnsupportedCurve {
        path: PathBuf,
        curve: Option<String>,
    },
}

/// JSON Web Key. Key material is opaque to this crate: it is loaded,
/// reduced to its public form for the anchoring request, and dropped.
/// The private form must never be written to any output document.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Jwk {
    pub kty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl Jwk {
    /// Returns the public form of this key, with private parameters removed.
    pub fn to_public(&self) -> Jwk {
        Jwk {
            d: None,
            ..self.clone()
        }
    }

    /// Whether this JWK carries a private key component.
    pub fn is_private(&self) -> bool {
        self.d.is_some()
    }
}

/// Reads a private key JWK from file. Fails with a read-class error if the
/// file is unreadable and a format-class error if the contents are not a
/// supported private JWK. No side effects beyond the read.
pub fn load_private_key(path: &Path) -> Result<Jwk, KeyError> {
    let contents = fs::read_to_string(path).map_err(|source| KeyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let jwk: Jwk = serde_json::from_str(&contents).map_err(|source| KeyError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    if !jwk.is_private() {
        return Err(KeyError::MissingPrivateKey(path.to_path_buf()));
    }
    let supported = matches!(&jwk.crv, Some(curve) if SUPPORTED_CURVES.contains(&curve.as_str()));
    if !supported {
        return Err(KeyError::UnsupportedCurve {
            path: path.to_path_buf(),
            curve: jwk.crv.clone(),
        });
    }
    Ok(jwk)
}
