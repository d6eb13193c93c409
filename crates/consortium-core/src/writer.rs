//! Persistence of assembled output documents.
use crate::assembler::ConfigOutput;
use crate::JSON_FILE_EXTENSION;
use log::info;
use serde_json::to_string_pretty as to_json;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error relating to writing output documents.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Destination directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An output document could not be serialized.
    #[error("failed to serialize config for domain {domain}: {source}")]
    Serialize {
        domain: String,
        source: serde_json::Error,
    },
    /// An output file could not be written.
    #[error("failed to write config file for domain {domain}: {source}")]
    File {
        domain: String,
        source: std::io::Error,
    },
}

/// Writes one `<domain>.json` file per output document into `dir`, creating
/// the directory if absent. Fails fast on the first error; files already
/// written in the same invocation are not rolled back, so callers should
/// target a fresh directory and discard it on failure.
pub fn write_configs(dir: &Path, outputs: &[(String, ConfigOutput)]) -> Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    for (domain, output) in outputs {
        let contents = to_json(output).map_err(|source| WriteError::Serialize {
            domain: domain.clone(),
            source,
        })?;
        let path = dir.join(format!("{}{}", domain, JSON_FILE_EXTENSION));
        fs::write(&path, contents).map_err(|source| WriteError::File {
            domain: domain.clone(),
            source,
        })?;
        info!("wrote config file {}", path.display());
    }
    Ok(())
}
