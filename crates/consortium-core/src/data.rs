//! Shared test data.

/// A consortium configuration document with one member. The member's
/// `privateKeyJwkPath` is the placeholder `PRIVATE_KEY_JWK_PATH`, to be
/// substituted with a real path via [`test_config_json`].
pub const TEST_CONFIG_TEMPLATE: &str = r#"{
  "consortium_data": {
    "domain": "consortium.net",
    "policy": {
      "cache": {
        "max_age": 2419200
      },
      "num_queries": 2,
      "history_hash": "SHA256",
      "sidetree": {
        "hash_algorithm": "SHA256",
        "key_algorithm": "NotARealAlg2018",
        "max_encoded_hash_length": 100,
        "max_operation_size": 8192
      }
    }
  },
  "members_data": [
    {
      "domain": "stakeholder.one",
      "policy": {"cache": {"max_age": 604800}},
      "endpoints": [
        "http://endpoints.stakeholder.one/peer1/",
        "http://endpoints.stakeholder.one/peer2/"
      ],
      "privateKeyJwkPath": "PRIVATE_KEY_JWK_PATH"
    }
  ]
}"#;

/// A valid Ed25519 private key in JWK form.
pub const TEST_PRIVATE_KEY_JWK: &str = r#"{
  "kty": "OKP",
  "kid": "key1",
  "d": "-YawjZSeB9Rkdol9SHeOcT9hIvo_VuH6zM-pgtk3b10",
  "crv": "Ed25519",
  "x": "bWRCy8DtNhRO3HdKTFB2eEG5Ac1J00D0DQPffOwtAD0"
}"#;

/// Returns [`TEST_CONFIG_TEMPLATE`] with the key path placeholder replaced.
pub fn test_config_json(private_key_jwk_path: &str) -> String {
    TEST_CONFIG_TEMPLATE.replace("PRIVATE_KEY_JWK_PATH", private_key_jwk_path)
}
