// crates/geonames-core/src/writer.rs
use crate::error::{GeoNamesError, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates or truncates `path` and writes `text` exactly, no trailing newline added.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    let write_err = |source| GeoNamesError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!("wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_exact_text_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("geoNames.json");

        write_output(&path, "{\"a\":1,\"b\":[2,3]}").unwrap();
        write_output(&path, "{}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("geoNames.js");

        let err = write_output(&path, "export default{}").unwrap_err();
        match err {
            GeoNamesError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
