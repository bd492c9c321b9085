//! Mission file container I/O.
//!
//! A mission file is a JSON document, gzip-compressed when stored under the
//! `.miz` extension. Loading sniffs the gzip magic instead of trusting the
//! extension, so plain-JSON files load regardless of how they are named.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::debug;

use mizmerge_core::Mission;

use crate::error::{MizError, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads a mission document from `path`.
///
/// # Errors
///
/// Returns [`MizError::Read`] when the file is missing or unreadable and
/// [`MizError::Parse`] when the payload is not a valid mission document.
pub fn load_mission(path: impl AsRef<Path>) -> Result<Mission> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| MizError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let payload = if raw.starts_with(&GZIP_MAGIC) {
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut decoded)
            .map_err(|source| MizError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        decoded
    } else {
        raw
    };

    let mission = serde_json::from_slice(&payload).map_err(|source| MizError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded mission");
    Ok(mission)
}

/// Saves a mission document to `path`.
///
/// `.miz` targets are gzip-compressed; any other extension gets pretty
/// JSON. Writes are not transactional: a failure can leave a partial file
/// behind, and re-running the save is the recovery path.
///
/// # Errors
///
/// Returns [`MizError::Serialize`] when the document cannot be encoded and
/// [`MizError::Write`] when the target path is not writable.
pub fn save_mission(mission: &Mission, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let payload = serde_json::to_vec_pretty(mission).map_err(MizError::Serialize)?;

    let bytes = if path.extension().and_then(|ext| ext.to_str()) == Some("miz") {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload).map_err(|source| MizError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        encoder.finish().map_err(|source| MizError::Write {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        payload
    };

    fs::write(path, bytes).map_err(|source| MizError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved mission");
    Ok(())
}

/// Derives the default output path for a merge:
/// `<destination stem>_merged.<same extension>` next to the destination.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use mizmerge_miz::default_output_path;
///
/// let out = default_output_path(Path::new("missions/mission2.miz"));
/// assert_eq!(out, Path::new("missions/mission2_merged.miz"));
/// ```
pub fn default_output_path(destination: &Path) -> PathBuf {
    let stem = destination
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("mission");
    let file_name = match destination.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_merged.{ext}"),
        None => format!("{stem}_merged"),
    };
    destination.with_file_name(file_name)
}
