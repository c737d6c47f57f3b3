//! Document reader and writer
//!
//! A document is the serialized snapshot of one store's full record set:
//! a pretty-printed JSON array of flat records. Writes replace the document
//! wholesale using the temp file + rename pattern:
//!
//! 1. Write the full array to `<doc>.tmp`
//! 2. Sync the temp file
//! 3. Rename temp to final (atomic on POSIX)
//!
//! If any step fails, the temp file is cleaned up and the previous document
//! survives untouched. There are no retries; failures propagate to the
//! caller synchronously.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Errors from reading or writing a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error during read, write, or rename
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record set could not be encoded as JSON
    #[error("failed to encode document: {0}")]
    Encode(serde_json::Error),

    /// Document exists but is not valid JSON for its record type
    #[error("failed to parse document {}: {source}", .path.display())]
    Parse {
        /// Path of the unreadable document
        path: PathBuf,
        /// Underlying parser error
        source: serde_json::Error,
    },
}

impl From<DocumentError> for shelf_core::Error {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::Io(io) => shelf_core::Error::Io(io),
            DocumentError::Encode(err) => shelf_core::Error::Serialization(err.to_string()),
            DocumentError::Parse { path, source } => shelf_core::Error::CorruptDocument {
                path,
                reason: source.to_string(),
            },
        }
    }
}

/// Write the full record sequence to `path`, replacing the prior document
///
/// The write is atomic: the document on disk is either the previous version
/// or the new one, never a partial file.
pub fn write_document<T: Serialize>(path: &Path, records: &[T]) -> Result<(), DocumentError> {
    let temp_path = temp_path_for(path);

    debug!(
        path = %path.display(),
        records = records.len(),
        "Writing document"
    );

    // A stale temp file from a previous failed write is simply replaced.
    if temp_path.exists() {
        warn!(path = %temp_path.display(), "Removing stale temp file");
        let _ = std::fs::remove_file(&temp_path);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let encoded = serde_json::to_vec_pretty(records).map_err(DocumentError::Encode)?;

    let result = (|| -> Result<(), DocumentError> {
        let mut file = File::create(&temp_path)?;
        file.write_all(&encoded)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, path)?;
        Ok(())
    })();

    if let Err(e) = result {
        warn!(
            temp_path = %temp_path.display(),
            error = %e,
            "Document write failed, cleaning up temp file"
        );
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    debug!(path = %path.display(), bytes = encoded.len(), "Document written");
    Ok(())
}

/// Read the full record sequence from `path`
///
/// Returns `Ok(None)` when no document exists: a store that has never been
/// written starts empty, which is not an error. A document that exists but
/// cannot be parsed is an error; the caller treats it as fatal at startup.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, DocumentError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No document on disk, starting empty");
            return Ok(None);
        }
        Err(e) => return Err(DocumentError::Io(e)),
    };

    let records = serde_json::from_slice(&bytes).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(records))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
