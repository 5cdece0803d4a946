use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use stripes_core::SimulationConfig;
use thiserror::Error;
use tracing::debug;

/// Indentation of the emitted document
const INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("deserialize error: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Render a document as 4-space indented JSON without a trailing newline.
/// Non-finite floats are written as `null`.
pub fn to_pretty_json(doc: &SimulationConfig) -> Result<String, StorageError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut ser).map_err(StorageError::Serialize)?;
    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|e| {
        StorageError::Serialize(serde::ser::Error::custom(e.to_string()))
    })
}

/// Write a document to disk, replacing whatever was there
pub fn write_document(doc: &SimulationConfig, path: &Path) -> Result<(), StorageError> {
    let text = to_pretty_json(doc)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text.as_bytes()).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote simulation input");
    Ok(())
}

/// Load a document from disk
pub fn read_document(path: &Path) -> Result<SimulationConfig, StorageError> {
    let data = fs::read(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(StorageError::Deserialize)
}
