// src/core/snapshot.rs

use crate::constants::SNAPSHOT_VERSION;
use crate::core::errors::{AutoError, AutoResult};
use crate::models::Automobile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What is actually written to disk: the automobile plus a format version.
#[derive(Serialize, Deserialize, Debug)]
struct SnapshotEnvelope {
    version: u32,
    automobile: Automobile,
}

/// Serializes `automobile` to a compressed binary file at `path` and returns the path.
///
/// The payload is `bincode` (standard config) compressed with LZ4; the original
/// size is prepended so decompression can allocate exactly once.
pub fn save(automobile: &Automobile, path: &Path) -> AutoResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let envelope = SnapshotEnvelope {
        version: SNAPSHOT_VERSION,
        automobile: automobile.clone(),
    };
    let raw_bytes = bincode::serde::encode_to_vec(&envelope, bincode::config::standard())?;
    let compressed_bytes = lz4_flex::compress_prepend_size(&raw_bytes);
    log::trace!(
        "Snapshot of '{}': {} bytes raw, {} bytes compressed.",
        automobile.name(),
        raw_bytes.len(),
        compressed_bytes.len()
    );

    fs::write(path, &compressed_bytes)?;
    log::debug!("Saved '{}' to '{}'", automobile.name(), path.display());
    Ok(path.to_path_buf())
}

/// Reads back an automobile written by [`save`].
///
/// # Errors
/// Returns [`AutoError::SnapshotCorrupt`] when the file cannot be decompressed
/// or was written by an unknown format version.
///
/// The name is rebuilt from make and model, and a selection pointing past its
/// group's options is cleared.
pub fn load(path: &Path) -> AutoResult<Automobile> {
    let compressed_bytes = fs::read(path)?;
    let raw_bytes = lz4_flex::decompress_size_prepended(&compressed_bytes).map_err(|e| {
        AutoError::SnapshotCorrupt {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    let (envelope, _): (SnapshotEnvelope, usize) =
        bincode::serde::decode_from_slice(&raw_bytes, bincode::config::standard())?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(AutoError::SnapshotCorrupt {
            path: path.display().to_string(),
            reason: format!(
                "unsupported snapshot version {} (expected {})",
                envelope.version, SNAPSHOT_VERSION
            ),
        });
    }

    let mut automobile = envelope.automobile;
    let dropped = automobile.revalidate();
    if dropped > 0 {
        log::warn!(
            "Snapshot '{}' had {} selection(s) pointing past their options; cleared.",
            path.display(),
            dropped
        );
    }

    log::debug!("Loaded '{}' from '{}'", automobile.name(), path.display());
    Ok(automobile)
}
