//! Workspace crate: re-exports `geoip-core` for the demos.

pub use geoip_core::*;

pub mod prelude {
    pub use geoip_core::builder::{samples, CompressionMode, IpVersion, MmdbBuilder, Value};
    pub use geoip_core::{
        Capability, CapabilitySet, DatabaseVariant, GeoIpError, GeoIpService, HasData,
        LookupData, Reader, ReaderOption, ReaderOptions, Result,
    };
}
