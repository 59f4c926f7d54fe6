// crates/geoip-core/src/error.rs

//! Error taxonomy for opening databases and running typed lookups.

use std::path::PathBuf;

use maxminddb::MaxMindDbError;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum GeoIpError {
    /// The declared `database_type` is not in the variant registry.
    ///
    /// Raised at construction time; no reader is ever returned for such a store.
    #[error("geoip2: reader does not support the {0:?} database type")]
    UnknownDatabaseType(String),

    /// A query method was called on a reader whose database variant does not
    /// carry that record category. No decoding is attempted.
    #[error("geoip2: the {method} method does not support the {database_type} database")]
    InvalidMethod {
        method: &'static str,
        database_type: String,
    },

    /// The database file is missing or could not be opened.
    #[error("database not found at {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the database bytes failed after the file was opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoder could not read the metadata section.
    #[error("failed to open database: {0}")]
    Open(#[source] MaxMindDbError),

    /// Strict verification rejected the file layout.
    #[error("database verification failed: {0}")]
    Verification(String),

    /// The decoder failed while walking the search tree.
    #[error("lookup failed: {0}")]
    Lookup(#[source] MaxMindDbError),

    /// The data section could not be materialized into the requested record.
    #[error("{0}")]
    Decode(#[source] MaxMindDbError),

    /// A textual address failed to parse.
    #[error("invalid IP address")]
    InvalidIp(String),

    /// The builder rejected a network or could not lay out the tree.
    #[error("build error: {0}")]
    Build(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeoIpError {
    /// `true` for the method-restriction failure, the only error a caller can
    /// fix by picking a different query method.
    pub fn is_invalid_method(&self) -> bool {
        matches!(self, GeoIpError::InvalidMethod { .. })
    }

    /// `true` when the data section of an otherwise valid store is corrupt.
    pub fn is_decode(&self) -> bool {
        matches!(self, GeoIpError::Decode(_))
    }
}

/// A convenience `Result` type alias using the crate's [`GeoIpError`].
pub type Result<T> = std::result::Result<T, GeoIpError>;
