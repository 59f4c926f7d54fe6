// crates/geoip-core/src/service.rs

//! # Lookup Service
//!
//! A thin request-facing layer over a City-capable [`Reader`]: parses textual
//! addresses, flattens the City record into a [`LookupData`] summary, and keeps
//! a small pool of summary buffers for callers that serve many requests.

use std::fmt;
use std::net::IpAddr;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::error::{GeoIpError, Result};
use crate::options::ReaderOptions;
use crate::reader::Reader;

/// Buffers kept for reuse; any extra returned buffer is dropped.
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Flattened City summary for one address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupData {
    pub country: String,
    pub city: String,
    pub iso_code: String,
    pub timezone: String,
}

impl LookupData {
    /// Clears every field, keeping the allocations.
    pub fn reset(&mut self) {
        self.country.clear();
        self.city.clear();
        self.iso_code.clear();
        self.timezone.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_empty()
            && self.city.is_empty()
            && self.iso_code.is_empty()
            && self.timezone.is_empty()
    }
}

pub struct GeoIpService {
    reader: Reader,
    pool: Mutex<Vec<LookupData>>,
    pool_capacity: usize,
}

impl GeoIpService {
    pub fn open(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        Ok(Self::from_reader(Reader::open_with(path, options)?))
    }

    pub fn from_reader(reader: Reader) -> Self {
        GeoIpService {
            reader,
            pool: Mutex::new(Vec::new()),
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }

    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    /// Resolves `ip` into `data`. Names follow the reader's locales.
    ///
    /// `data` is only written on success; an address absent from the store
    /// leaves every field empty.
    pub fn lookup_ip(&self, ip: &str, data: &mut LookupData) -> Result<()> {
        let addr: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| GeoIpError::InvalidIp(ip.to_string()))?;
        let record = self.reader.city(addr)?;
        let locales = self.reader.locales();

        data.reset();
        data.country
            .push_str(record.country.names.localized(locales).unwrap_or_default());
        data.city
            .push_str(record.city.names.localized(locales).unwrap_or_default());
        data.iso_code.push_str(&record.country.iso_code);
        data.timezone.push_str(&record.location.time_zone);
        Ok(())
    }

    /// Takes a cleared buffer from the pool, or a fresh one.
    pub fn acquire(&self) -> PooledLookup<'_> {
        let data = self
            .pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default();
        PooledLookup {
            service: self,
            data,
        }
    }

    fn release(&self, mut data: LookupData) {
        data.reset();
        let mut pool = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        if pool.len() < self.pool_capacity {
            pool.push(data);
        }
    }

    /// Buffers currently waiting in the pool.
    pub fn pooled(&self) -> usize {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn close(self) -> Result<()> {
        self.reader.close()
    }
}

impl fmt::Debug for GeoIpService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoIpService")
            .field("reader", &self.reader)
            .field("pool_capacity", &self.pool_capacity)
            .finish_non_exhaustive()
    }
}

/// A pooled [`LookupData`], returned to its service on drop.
pub struct PooledLookup<'a> {
    service: &'a GeoIpService,
    data: LookupData,
}

impl PooledLookup<'_> {
    /// Runs [`GeoIpService::lookup_ip`] into this buffer.
    pub fn lookup(&mut self, ip: &str) -> Result<&LookupData> {
        self.service.lookup_ip(ip, &mut self.data)?;
        Ok(&self.data)
    }

    /// Detaches the buffer from the pool.
    pub fn into_inner(mut self) -> LookupData {
        let data = std::mem::take(&mut self.data);
        std::mem::forget(self);
        data
    }
}

impl Deref for PooledLookup<'_> {
    type Target = LookupData;

    fn deref(&self) -> &LookupData {
        &self.data
    }
}

impl DerefMut for PooledLookup<'_> {
    fn deref_mut(&mut self) -> &mut LookupData {
        &mut self.data
    }
}

impl Drop for PooledLookup<'_> {
    fn drop(&mut self) {
        self.service.release(std::mem::take(&mut self.data));
    }
}

#[cfg(all(test, feature = "builder"))]
mod tests {
    use super::*;
    use crate::builder::samples;
    use crate::capability::DatabaseVariant;

    fn service(variant: DatabaseVariant, options: ReaderOptions) -> GeoIpService {
        let bytes = samples::database(variant).unwrap().build().unwrap();
        GeoIpService::from_reader(Reader::from_bytes_with(bytes, options).unwrap())
    }

    #[test]
    fn reset_clears_every_field() {
        let mut data = LookupData {
            country: "United States".into(),
            city: "New York".into(),
            iso_code: "US".into(),
            timezone: "America/New_York".into(),
        };
        assert!(!data.is_empty());
        data.reset();
        assert_eq!(data, LookupData::default());
        assert!(data.is_empty());
    }

    #[test]
    fn fills_summary_from_city_record() {
        let svc = service(DatabaseVariant::City, ReaderOptions::default());
        let mut data = LookupData::default();
        svc.lookup_ip(samples::LONDON, &mut data).unwrap();
        assert_eq!(
            data,
            LookupData {
                country: "United Kingdom".into(),
                city: "London".into(),
                iso_code: "GB".into(),
                timezone: "Europe/London".into(),
            }
        );
    }

    #[test]
    fn names_follow_reader_locales() {
        let svc = service(
            DatabaseVariant::City,
            ReaderOptions::new().locales(["de", "en"]),
        );
        let mut data = LookupData::default();
        svc.lookup_ip(samples::LONDON, &mut data).unwrap();
        assert_eq!(data.country, "Vereinigtes Königreich");

        // Boxford has no German name; English is the fallback.
        svc.lookup_ip(samples::BOXFORD, &mut data).unwrap();
        assert_eq!(data.city, "Boxford");
    }

    #[test]
    fn invalid_ip_is_rejected_before_lookup() {
        let svc = service(DatabaseVariant::City, ReaderOptions::default());
        let mut data = LookupData {
            city: "untouched".into(),
            ..Default::default()
        };
        for bad in ["invalid", "", "256.1.1.1", "1.2.3"] {
            let err = svc.lookup_ip(bad, &mut data).unwrap_err();
            assert!(matches!(err, GeoIpError::InvalidIp(_)), "{bad}: {err}");
            assert_eq!(err.to_string(), "invalid IP address");
        }
        assert_eq!(data.city, "untouched");
    }

    #[test]
    fn absent_address_leaves_summary_empty() {
        let svc = service(DatabaseVariant::City, ReaderOptions::default());
        let mut data = LookupData {
            country: "stale".into(),
            ..Default::default()
        };
        svc.lookup_ip(samples::ABSENT, &mut data).unwrap();
        assert!(data.is_empty());
        svc.lookup_ip("2001:4860:4860::8888", &mut data).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn non_city_database_surfaces_invalid_method() {
        let svc = service(DatabaseVariant::Asn, ReaderOptions::default());
        let mut data = LookupData::default();
        let err = svc.lookup_ip(samples::NETWORK, &mut data).unwrap_err();
        assert!(err.is_invalid_method(), "{err}");
    }

    #[test]
    fn pooled_buffers_are_cleared_and_reused() {
        let svc = service(DatabaseVariant::City, ReaderOptions::default());
        {
            let mut guard = svc.acquire();
            assert_eq!(guard.lookup(samples::LONDON).unwrap().city, "London");
        }
        assert_eq!(svc.pooled(), 1);

        let guard = svc.acquire();
        assert!(guard.is_empty());
        assert_eq!(svc.pooled(), 0);
        drop(guard);
        assert_eq!(svc.pooled(), 1);
    }

    #[test]
    fn pool_is_bounded() {
        let svc = service(DatabaseVariant::City, ReaderOptions::default()).with_pool_capacity(2);
        let guards: Vec<_> = (0..5).map(|_| svc.acquire()).collect();
        drop(guards);
        assert_eq!(svc.pooled(), 2);
    }

    #[test]
    fn detached_buffers_do_not_return() {
        let svc = service(DatabaseVariant::City, ReaderOptions::default());
        let mut guard = svc.acquire();
        guard.lookup(samples::BOXFORD).unwrap();
        let data = guard.into_inner();
        assert_eq!(data.iso_code, "GB");
        assert_eq!(svc.pooled(), 0);
    }

    #[test]
    fn concurrent_requests() {
        let svc = service(DatabaseVariant::City, ReaderOptions::default());
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        let mut guard = svc.acquire();
                        assert_eq!(guard.lookup(samples::LONDON).unwrap().iso_code, "GB");
                    }
                });
            }
        });
        assert!(svc.pooled() <= 4);
        svc.close().unwrap();
    }
}
