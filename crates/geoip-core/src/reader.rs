// crates/geoip-core/src/reader.rs

//! # Typed Reader
//!
//! Binds a `maxminddb` decoder to the [`CapabilitySet`] of the store it reads.
//! Every query goes through [`Reader::lookup`]: the capability check runs
//! first, so a record shape the store does not carry is never decoded.

use std::fmt;
use std::net::IpAddr;
use std::path::Path;

use crate::capability::{classify, CapabilitySet, DatabaseVariant};
use crate::common::DatabaseInfo;
use crate::error::{GeoIpError, Result};
use crate::loader::{self, verify};
use crate::model::{AnonymousIp, Asn, City, ConnectionType, Country, Domain, Enterprise, Isp};
use crate::options::ReaderOptions;
use crate::traits::Record;

/// A classified, capability-checked database handle.
///
/// `S` is the byte source handed to the decoder; files are read into a
/// `Vec<u8>`. The reader is immutable after construction and can be shared
/// across threads by reference.
pub struct Reader<S: AsRef<[u8]> = Vec<u8>> {
    inner: maxminddb::Reader<S>,
    variant: DatabaseVariant,
    capabilities: CapabilitySet,
    options: ReaderOptions,
}

impl Reader<Vec<u8>> {
    /// Opens a database file with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, ReaderOptions::default())
    }

    /// Opens a database file. `*.gz` files are decompressed with the `compact` feature.
    pub fn open_with(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let bytes = loader::read_database(path.as_ref())?;
        Self::from_bytes_with(bytes, options)
    }
}

impl<S: AsRef<[u8]>> Reader<S> {
    pub fn from_bytes(buf: S) -> Result<Self> {
        Self::from_bytes_with(buf, ReaderOptions::default())
    }

    pub fn from_bytes_with(buf: S, options: ReaderOptions) -> Result<Self> {
        let inner = maxminddb::Reader::from_source(buf).map_err(GeoIpError::Open)?;
        if options.is_strict() {
            verify::verify_database(&inner)?;
        }
        let variant = classify(&inner.metadata.database_type)?;
        let capabilities = variant.capabilities();

        log::debug!(
            "opened {} database: variant={:?} capabilities={:?} nodes={} record_size={}",
            inner.metadata.database_type,
            variant,
            capabilities,
            inner.metadata.node_count,
            inner.metadata.record_size
        );

        Ok(Reader {
            inner,
            variant,
            capabilities,
            options,
        })
    }

    /// Checks the capability for `T`, then resolves and decodes `ip`.
    ///
    /// An address absent from the store yields `T::default()`.
    pub fn lookup<T: Record>(&self, ip: IpAddr) -> Result<T> {
        if !self.capabilities.contains(T::CAPABILITY) {
            return Err(GeoIpError::InvalidMethod {
                method: T::CAPABILITY.method_name(),
                database_type: self.database_type().to_string(),
            });
        }

        let result = self.inner.lookup(ip).map_err(GeoIpError::Lookup)?;
        let record = result.decode::<T>().map_err(GeoIpError::Decode)?;
        log::trace!(
            "{} lookup for {ip}: {}",
            T::CAPABILITY,
            if record.is_some() { "found" } else { "absent" }
        );
        Ok(record.unwrap_or_default())
    }

    pub fn city(&self, ip: IpAddr) -> Result<City> {
        self.lookup(ip)
    }

    pub fn country(&self, ip: IpAddr) -> Result<Country> {
        self.lookup(ip)
    }

    pub fn enterprise(&self, ip: IpAddr) -> Result<Enterprise> {
        self.lookup(ip)
    }

    pub fn asn(&self, ip: IpAddr) -> Result<Asn> {
        self.lookup(ip)
    }

    pub fn isp(&self, ip: IpAddr) -> Result<Isp> {
        self.lookup(ip)
    }

    pub fn domain(&self, ip: IpAddr) -> Result<Domain> {
        self.lookup(ip)
    }

    pub fn connection_type(&self, ip: IpAddr) -> Result<ConnectionType> {
        self.lookup(ip)
    }

    pub fn anonymous_ip(&self, ip: IpAddr) -> Result<AnonymousIp> {
        self.lookup(ip)
    }

    pub fn variant(&self) -> DatabaseVariant {
        self.variant
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    /// The declared `database_type` from the store's metadata.
    pub fn database_type(&self) -> &str {
        &self.inner.metadata.database_type
    }

    pub fn metadata(&self) -> &maxminddb::Metadata {
        &self.inner.metadata
    }

    #[allow(clippy::unnecessary_cast)]
    pub fn info(&self) -> DatabaseInfo {
        let meta = &self.inner.metadata;
        DatabaseInfo {
            database_type: meta.database_type.clone(),
            variant: self.variant,
            capabilities: self.capabilities,
            node_count: meta.node_count as u32,
            record_size: meta.record_size as u16,
            ip_version: meta.ip_version as u16,
            build_epoch: meta.build_epoch as u64,
            languages: meta.languages.clone(),
            description: meta.description.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Preferred languages for display names, most preferred first.
    pub fn locales(&self) -> &[String] {
        self.options.preferred_locales()
    }

    /// Releases the decoder and its buffer.
    pub fn close(self) -> Result<()> {
        log::debug!("closing {} database", self.database_type());
        drop(self.inner);
        Ok(())
    }

    /// Replaces the capability set to force specific query paths.
    #[cfg(test)]
    pub(crate) fn force_capabilities(&mut self, capabilities: CapabilitySet) {
        self.capabilities = capabilities;
    }
}

impl<S: AsRef<[u8]>> fmt::Debug for Reader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("database_type", &self.database_type())
            .field("variant", &self.variant)
            .field("capabilities", &self.capabilities)
            .field("options", &self.options)
            .finish()
    }
}
