// crates/geoip-core/src/lib.rs

//! Typed, capability-checked lookups over MaxMind DB geolocation stores.
//!
//! ```rust
//! use geoip_core::builder::samples;
//! use geoip_core::{DatabaseVariant, HasData, Reader};
//!
//! let bytes = samples::database(DatabaseVariant::City).unwrap().build().unwrap();
//! let reader = Reader::from_bytes(bytes).unwrap();
//!
//! let city = reader.city(samples::LONDON.parse().unwrap()).unwrap();
//! assert!(city.has_data());
//! assert!(reader.asn(samples::LONDON.parse().unwrap()).unwrap_err().is_invalid_method());
//! ```

#[cfg(feature = "builder")]
pub mod builder; // Database writer, also the fixture factory
pub mod capability;
pub mod common;
pub mod error;
pub mod loader; // File I/O, gzip and strict verification
pub mod model;
pub mod options;
pub mod reader;
pub mod service;
pub mod traits;

// Re-exports
pub use crate::capability::{classify, Capability, CapabilitySet, DatabaseVariant};
pub use crate::common::DatabaseInfo;
pub use crate::error::{GeoIpError, Result};
pub use crate::options::{ReaderOption, ReaderOptions};
pub use crate::reader::Reader;
pub use crate::service::{GeoIpService, LookupData, PooledLookup};
pub use crate::traits::{HasData, Record};
// Export the Record Types
pub use model::{
    AnonymousIp, Asn, City, ConnectionType, Country, Domain, Enterprise, Isp, Names,
};
