//! Consortium configuration document: data model and loader.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error relating to reading or decoding a consortium configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration file could not be decoded.
    #[error("failed to decode config file {path}: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A member defines no endpoints.
    #[error("member {0} has no endpoints")]
    EmptyEndpoints(String),
    /// The same domain appears more than once in the document.
    #[error("duplicate domain {0} in configuration")]
    DuplicateDomain(String),
}

/// Cache-control policy for published configuration files.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CacheControl {
    /// Maximum age, in seconds, before a cached copy must be refreshed.
    pub max_age: u64,
}

/// Parameters of the Sidetree instance anchoring the network's DIDs.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct SidetreeParams {
    pub hash_algorithm: String,
    pub key_algorithm: String,
    pub max_encoded_hash_length: u32,
    pub max_operation_size: u32,
}

/// Network-wide trust policy published in the consortium file.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ConsortiumPolicy {
    pub cache: CacheControl,
    /// Number of stakeholder files a verifier must fetch and cross-check.
    pub num_queries: u32,
    /// Hash algorithm identifier for the config history chain.
    pub history_hash: String,
    pub sidetree: SidetreeParams,
}

/// Partial [`ConsortiumPolicy`] overridable per member. Unset fields are
/// omitted from the member's published file; no consortium-level defaults
/// are inherited.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct MemberPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_queries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidetree: Option<SidetreeParams>,
}

/// The network-wide trust anchor: consortium domain and policy.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ConsortiumData {
    pub domain: String,
    pub policy: ConsortiumPolicy,
}

/// One consortium stakeholder: its domain, policy overrides, endpoints and
/// the path to its private signing key.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct MemberData {
    pub domain: String,
    #[serde(default)]
    pub policy: MemberPolicy,
    pub endpoints: Vec<String>,
    #[serde(rename = "privateKeyJwkPath")]
    pub private_key_jwk_path: PathBuf,
}

/// A decoded consortium configuration document. Constructed once per
/// invocation and read-only thereafter.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct Configuration {
    pub consortium_data: ConsortiumData,
    pub members_data: Vec<MemberData>,
}

/// Reads and decodes a consortium configuration document. Validates shape
/// only; semantic policy validation (e.g. algorithm support) is the
/// anchoring service's concern.
pub fn load_config(path: &Path) -> Result<Configuration, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Configuration =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Format {
            path: path.to_path_buf(),
            source,
        })?;
    validate_shape(&config)?;
    Ok(config)
}

/// Shape-level checks beyond serde decoding: endpoint cardinality and
/// domain uniqueness across the whole document.
fn validate_shape(config: &Configuration) -> Result<(), ConfigError> {
    let mut domains = HashSet::new();
    domains.insert(config.consortium_data.domain.as_str());
    for member in &config.members_data {
        if member.endpoints.is_empty() {
            return Err(ConfigError::EmptyEndpoints(member.domain.clone()));
        }
        if !domains.insert(member.domain.as_str()) {
            return Err(ConfigError::DuplicateDomain(member.domain.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{test_config_json, TEST_CONFIG_TEMPLATE};
    use std::io::Write;

    #[test]
    fn test_deserialize() {
        let config: Configuration =
            serde_json::from_str(&test_config_json("key.jwk")).unwrap();

        assert_eq!(config.consortium_data.domain, "consortium.net");
        assert_eq!(config.consortium_data.policy.cache.max_age, 2419200);
        assert_eq!(config.consortium_data.policy.num_queries, 2);
        assert_eq!(config.consortium_data.policy.history_hash, "SHA256");
        assert_eq!(
            config.consortium_data.policy.sidetree,
            SidetreeParams {
                hash_algorithm: "SHA256".to_string(),
                key_algorithm: "NotARealAlg2018".to_string(),
                max_encoded_hash_length: 100,
                max_operation_size: 8192,
            }
        );

        assert_eq!(config.members_data.len(), 1);
        let member = &config.members_data[0];
        assert_eq!(member.domain, "stakeholder.one");
        assert_eq!(
            member.policy.cache,
            Some(CacheControl { max_age: 604800 })
        );
        assert_eq!(member.policy.num_queries, None);
        assert_eq!(member.policy.sidetree, None);
        assert_eq!(member.endpoints.len(), 2);
        assert_eq!(member.private_key_jwk_path, PathBuf::from("key.jwk"));
    }

    #[test]
    fn test_member_policy_absent_fields_not_serialized() {
        let policy = MemberPolicy {
            cache: Some(CacheControl { max_age: 604800 }),
            ..Default::default()
        };
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(json, r#"{"cache":{"max_age":604800}}"#);
    }

    #[test]
    fn test_load_config() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(test_config_json("key.jwk").as_bytes())?;

        let config = load_config(file.path())?;
        assert_eq!(config.consortium_data.domain, "consortium.net");
        Ok(())
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("nonexistent.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_config_invalid_json() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"not a config document")?;

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Format { .. })));
        Ok(())
    }

    #[test]
    fn test_load_config_missing_field() -> Result<(), Box<dyn std::error::Error>> {
        // Valid JSON, but no members_data field.
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(br#"{"consortium_data": {}}"#)?;

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Format { .. })));
        Ok(())
    }

    #[test]
    fn test_load_config_empty_endpoints() -> Result<(), Box<dyn std::error::Error>> {
        let mut config_value: serde_json::Value =
            serde_json::from_str(&test_config_json("key.jwk"))?;
        config_value["members_data"][0]["endpoints"] = serde_json::json!([]);
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(config_value.to_string().as_bytes())?;

        let result = load_config(file.path());
        assert!(
            matches!(result, Err(ConfigError::EmptyEndpoints(domain)) if domain == "stakeholder.one")
        );
        Ok(())
    }

    #[test]
    fn test_load_config_duplicate_domain() -> Result<(), Box<dyn std::error::Error>> {
        let mut config_value: serde_json::Value =
            serde_json::from_str(&test_config_json("key.jwk"))?;
        let duplicate = config_value["members_data"][0].clone();
        config_value["members_data"]
            .as_array_mut()
            .unwrap()
            .push(duplicate);
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(config_value.to_string().as_bytes())?;

        let result = load_config(file.path());
        assert!(
            matches!(result, Err(ConfigError::DuplicateDomain(domain)) if domain == "stakeholder.one")
        );
        Ok(())
    }

    #[test]
    fn test_validate_empty_endpoints() {
        let mut config: Configuration =
            serde_json::from_str(&test_config_json("key.jwk")).unwrap();
        config.members_data[0].endpoints.clear();

        let result = validate_shape(&config);
        assert!(
            matches!(result, Err(ConfigError::EmptyEndpoints(domain)) if domain == "stakeholder.one")
        );
    }

    #[test]
    fn test_validate_duplicate_domain() {
        let mut config: Configuration =
            serde_json::from_str(&test_config_json("key.jwk")).unwrap();
        let duplicate = config.members_data[0].clone();
        config.members_data.push(duplicate);

        let result = validate_shape(&config);
        assert!(
            matches!(result, Err(ConfigError::DuplicateDomain(domain)) if domain == "stakeholder.one")
        );
    }

    #[test]
    fn test_config_template_has_path_placeholder() {
        assert!(TEST_CONFIG_TEMPLATE.contains("PRIVATE_KEY_JWK_PATH"));
    }
}
