//! geoip-cli
//! =========
//!
//! Command-line interface for the `geoip-core` typed GeoIP2 reader.
//!
//! This crate primarily provides a binary (`geoip-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! geoip-cli --help
//! geoip-cli --db GeoIP2-City.mmdb info
//! geoip-cli --db GeoIP2-City.mmdb lookup 81.2.69.142 --kind country
//! geoip-cli --db GeoIP2-City.mmdb --locale de summary 81.2.69.142
//! geoip-cli build --input nets.json --out asn.mmdb --database-type GeoLite2-ASN
//! ```
//!
//! For programmatic access to the reader, use the [`geoip-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
