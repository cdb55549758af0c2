// crates/geonames-core/src/archive.rs
use crate::error::{GeoNamesError, Result};
use log::debug;
use std::io::{Cursor, Read};

/// Upper bound for the pre-allocation hint; the header size is not trusted beyond it.
const MAX_CAPACITY_HINT: u64 = 64 * 1024 * 1024;

/// Returns the first entry of a ZIP archive when `is_zip` is set, otherwise
/// hands `content` back untouched.
pub fn extract_if_zip(content: Vec<u8>, is_zip: bool) -> Result<Vec<u8>> {
    if is_zip {
        first_entry(&content)
    } else {
        Ok(content)
    }
}

/// Reads the first entry (central directory order) of an in-memory ZIP.
pub fn first_entry(content: &[u8]) -> Result<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(content))
        .map_err(|e| GeoNamesError::Archive(format!("Failed to read zip archive: {e}")))?;

    if archive.is_empty() {
        return Err(GeoNamesError::Archive("zip archive has no entries".into()));
    }

    let mut file = archive
        .by_index(0)
        .map_err(|e| GeoNamesError::Archive(format!("Failed to open first entry: {e}")))?;

    let declared = file.size();
    let hint = usize::try_from(declared.min(MAX_CAPACITY_HINT)).unwrap_or(0);
    let mut buffer = Vec::with_capacity(hint);
    file.read_to_end(&mut buffer)
        .map_err(|e| GeoNamesError::Archive(format!("Failed to read {}: {e}", file.name())))?;

    if buffer.len() as u64 != declared {
        return Err(GeoNamesError::Archive(format!(
            "{} declares {declared} bytes but holds {}",
            file.name(),
            buffer.len()
        )));
    }

    debug!("extracted {} ({} bytes)", file.name(), buffer.len());
    Ok(buffer)
}
