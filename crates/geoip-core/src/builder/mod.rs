// crates/geoip-core/src/builder/mod.rs

//! # Database Builder
//!
//! Writes MaxMind DB files from `(network, value)` pairs. The output is read
//! back by the same decoder the [`Reader`](crate::Reader) uses, which makes
//! the builder the fixture factory for tests, benches and the CLI `build`
//! command.
//!
//! ```rust
//! use geoip_core::builder::{IpVersion, MmdbBuilder, Value};
//! use geoip_core::{HasData, Reader};
//!
//! let mut builder = MmdbBuilder::new("GeoLite2-ASN", IpVersion::V4);
//! builder
//!     .insert_cidr(
//!         "1.2.3.0/24",
//!         &Value::map([
//!             ("autonomous_system_number", Value::Uint32(64512)),
//!             ("autonomous_system_organization", Value::from("Example Net")),
//!         ]),
//!     )
//!     .unwrap();
//!
//! let reader = Reader::from_bytes(builder.build().unwrap()).unwrap();
//! let asn = reader.asn("1.2.3.4".parse().unwrap()).unwrap();
//! assert_eq!(asn.autonomous_system_number, 64512);
//! assert!(!reader.asn("9.9.9.9".parse().unwrap()).unwrap().has_data());
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::net::IpAddr;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{GeoIpError, Result};
use crate::loader::{DATA_SECTION_SEPARATOR_SIZE, METADATA_START_MARKER};

pub mod samples;
mod tree;
mod value;

use tree::SearchTree;
pub use value::Value;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Address family of the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    /// 32-bit tree, IPv4 networks only.
    V4,
    /// 128-bit tree; IPv4 networks live under `::/96`.
    V6,
}

impl IpVersion {
    fn key_bits(self) -> u32 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }

    fn number(self) -> u16 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

// -----------------------------------------------------------------------------
// BUILDER
// -----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MmdbBuilder {
    database_type: String,
    ip_version: IpVersion,
    record_size: u16,
    languages: Vec<String>,
    description: Vec<(String, String)>,
    build_epoch: u64,
    tree: SearchTree,
    data: Vec<u8>,
    /// Encoded value -> offset, so identical records are stored once.
    offsets: HashMap<Vec<u8>, usize>,
}

impl MmdbBuilder {
    pub fn new(database_type: impl Into<String>, ip_version: IpVersion) -> Self {
        let database_type = database_type.into();
        let build_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        MmdbBuilder {
            description: vec![("en".to_string(), format!("{database_type} database"))],
            database_type,
            ip_version,
            record_size: 28,
            languages: vec!["en".to_string()],
            build_epoch,
            tree: SearchTree::new(),
            data: Vec::new(),
            offsets: HashMap::new(),
        }
    }

    /// Record size in bits: 24, 28 or 32. Checked by [`MmdbBuilder::build`].
    pub fn record_size(mut self, bits: u16) -> Self {
        self.record_size = bits;
        self
    }

    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn description(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        let language = language.into();
        self.description.retain(|(l, _)| *l != language);
        self.description.push((language, text.into()));
        self
    }

    pub fn build_epoch(mut self, epoch: u64) -> Self {
        self.build_epoch = epoch;
        self
    }

    pub fn database_type(&self) -> &str {
        &self.database_type
    }

    /// Maps `addr/prefix_len` to `value`. Host bits beyond the prefix are ignored.
    pub fn insert(&mut self, addr: IpAddr, prefix_len: u8, value: &Value) -> Result<()> {
        let max = if addr.is_ipv4() { 32 } else { 128 };
        if prefix_len == 0 || prefix_len > max {
            return Err(GeoIpError::Build(format!(
                "invalid prefix length for {addr}: {prefix_len}"
            )));
        }

        let (key, tree_prefix_len) = match (addr, self.ip_version) {
            (IpAddr::V4(v4), IpVersion::V4) => (u32::from(v4) as u128, u32::from(prefix_len)),
            (IpAddr::V4(v4), IpVersion::V6) => (u32::from(v4) as u128, 96 + u32::from(prefix_len)),
            (IpAddr::V6(v6), IpVersion::V6) => (u128::from(v6), u32::from(prefix_len)),
            (IpAddr::V6(_), IpVersion::V4) => {
                return Err(GeoIpError::Build(format!(
                    "cannot insert IPv6 network {addr}/{prefix_len} into an IPv4 tree"
                )));
            }
        };

        let offset = self.store(value)?;
        self.tree
            .insert(key, self.ip_version.key_bits(), tree_prefix_len, offset);
        Ok(())
    }

    /// Parses `"address/prefix"` (a bare address is a host route) and inserts it.
    pub fn insert_cidr(&mut self, cidr: &str, value: &Value) -> Result<()> {
        let (addr, prefix_len) = parse_cidr(cidr)?;
        self.insert(addr, prefix_len, value)
    }

    fn store(&mut self, value: &Value) -> Result<usize> {
        let encoded = value.to_bytes()?;
        if let Some(offset) = self.offsets.get(&encoded) {
            return Ok(*offset);
        }
        let offset = self.data.len();
        self.data.extend_from_slice(&encoded);
        self.offsets.insert(encoded, offset);
        Ok(offset)
    }

    /// Assembles search tree, separator, data section and metadata.
    pub fn build(&self) -> Result<Vec<u8>> {
        if !matches!(self.record_size, 24 | 28 | 32) {
            return Err(GeoIpError::Build(format!(
                "unsupported record size {}",
                self.record_size
            )));
        }

        let mut out = self.tree.to_bytes(self.record_size, self.data.len())?;
        out.extend_from_slice(&[0u8; DATA_SECTION_SEPARATOR_SIZE]);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(METADATA_START_MARKER);
        self.metadata().encode(&mut out)?;

        log::debug!(
            "built {} database: {} nodes, {} data bytes",
            self.database_type,
            self.tree.node_count(),
            self.data.len()
        );
        Ok(out)
    }

    fn metadata(&self) -> Value {
        Value::map([
            ("binary_format_major_version", Value::Uint16(2)),
            ("binary_format_minor_version", Value::Uint16(0)),
            ("build_epoch", Value::Uint64(self.build_epoch)),
            ("database_type", Value::from(self.database_type.as_str())),
            (
                "description",
                Value::map(self.description.iter().map(|(l, t)| (l.as_str(), t.as_str()))),
            ),
            ("ip_version", Value::Uint16(self.ip_version.number())),
            ("languages", Value::array(self.languages.iter().map(String::as_str))),
            ("node_count", Value::Uint32(self.tree.node_count() as u32)),
            ("record_size", Value::Uint16(self.record_size)),
        ])
    }

    /// Builds and writes the database, optionally gzip-compressed.
    pub fn write_to_path(&self, path: impl AsRef<Path>, compression: CompressionMode) -> Result<()> {
        let bytes = self.build()?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        match compression {
            CompressionMode::None => writer.write_all(&bytes)?,
            #[cfg(feature = "compact")]
            CompressionMode::Gzip => {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                encoder.write_all(&bytes)?;
                writer = encoder.finish()?;
            }
            #[cfg(not(feature = "compact"))]
            CompressionMode::Gzip => {
                return Err(GeoIpError::Build(
                    "gzip output requires the `compact` feature".to_string(),
                ));
            }
        }
        writer.flush()?;
        Ok(())
    }
}

fn parse_cidr(cidr: &str) -> Result<(IpAddr, u8)> {
    let invalid = || GeoIpError::Build(format!("invalid network {cidr:?}"));
    let (addr, prefix_len) = match cidr.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (cidr, None),
    };
    let addr: IpAddr = addr.trim().parse().map_err(|_| invalid())?;
    let prefix_len = match prefix_len {
        Some(len) => len.trim().parse::<u8>().map_err(|_| invalid())?,
        None if addr.is_ipv4() => 32,
        None => 128,
    };
    Ok((addr, prefix_len))
}
