// crates/geoip-core/src/loader/verify.rs

//! Strict verification: the decoder walks its metadata, the whole search
//! tree, the data section separator and every record the tree points at.

use super::METADATA_START_MARKER;
use crate::error::{GeoIpError, Result};

/// Runs the decoder's full structural check over an opened store.
pub fn verify_database<S: AsRef<[u8]>>(reader: &maxminddb::Reader<S>) -> Result<()> {
    reader.verify().map_err(|err| {
        log::warn!(
            "strict verification of {} failed: {err}",
            reader.metadata.database_type
        );
        GeoIpError::Verification(err.to_string())
    })
}

/// Byte offset of the last metadata marker, if any.
pub fn find_metadata_start(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(METADATA_START_MARKER.len())
        .rposition(|w| w == METADATA_START_MARKER)
}
