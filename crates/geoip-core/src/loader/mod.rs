// crates/geoip-core/src/loader/mod.rs

//! # Database Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and the optional
//! strict verification of an opened MaxMind DB store.

use crate::error::{GeoIpError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub mod verify;

/// Byte sequence that precedes the metadata map at the end of every file.
pub const METADATA_START_MARKER: &[u8] = b"\xAB\xCD\xEFMaxMind.com";

/// Zero bytes between the search tree and the data section.
pub const DATA_SECTION_SEPARATOR_SIZE: usize = 16;

/// Reads a whole database file into memory.
///
/// With the `compact` feature, `*.gz` files are decompressed on the fly.
pub fn read_database(path: &Path) -> Result<Vec<u8>> {
    let mut stream = open_stream(path)?;
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name says so.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| GeoIpError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);

    // Centralized Gzip Logic
    #[cfg(feature = "compact")]
    {
        if is_gzip_path(path) {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg_attr(not(feature = "compact"), allow(dead_code))]
fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_is_not_found() {
        let path = PathBuf::from("definitely/not/here.mmdb");
        match read_database(&path) {
            Err(GeoIpError::NotFound { path: got, .. }) => assert_eq!(got, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn gzip_detection_uses_extension() {
        assert!(is_gzip_path(Path::new("GeoLite2-City.mmdb.gz")));
        assert!(is_gzip_path(Path::new("db.GZ")));
        assert!(!is_gzip_path(Path::new("GeoLite2-City.mmdb")));
        assert!(!is_gzip_path(Path::new("gz")));
    }
}
