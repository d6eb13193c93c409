//! Core data model and logic for consortium configuration bootstrap
//! (network layer independent).
pub mod assembler;
pub mod config;
pub mod data;
pub mod did;
pub mod key;
pub mod writer;

/// File extension for all configuration artifacts written by this crate.
pub const JSON_FILE_EXTENSION: &str = ".json";
