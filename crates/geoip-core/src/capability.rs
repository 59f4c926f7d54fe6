// crates/geoip-core/src/capability.rs

//! # Capability Classifier
//!
//! Maps the `database_type` string declared in a store's metadata to the
//! [`DatabaseVariant`] it encodes, and each variant to the [`CapabilitySet`]
//! of record categories it can answer.
//!
//! Matching is case-exact against a fixed registry. Anything else is an
//! [`GeoIpError::UnknownDatabaseType`].

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{GeoIpError, Result};

/// One record category a reader can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    City,
    Country,
    Enterprise,
    Asn,
    Isp,
    Domain,
    ConnectionType,
    AnonymousIp,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::City,
        Capability::Country,
        Capability::Enterprise,
        Capability::Asn,
        Capability::Isp,
        Capability::Domain,
        Capability::ConnectionType,
        Capability::AnonymousIp,
    ];

    /// Name of the reader method that requires this capability.
    pub const fn method_name(self) -> &'static str {
        match self {
            Capability::City => "City",
            Capability::Country => "Country",
            Capability::Enterprise => "Enterprise",
            Capability::Asn => "ASN",
            Capability::Isp => "ISP",
            Capability::Domain => "Domain",
            Capability::ConnectionType => "ConnectionType",
            Capability::AnonymousIp => "AnonymousIP",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// An immutable, order-irrelevant set of [`Capability`] tags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilitySet {
    bits: u8,
}

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet { bits: 0 };

    /// Returns a copy of the set with `capability` added.
    pub const fn with(self, capability: Capability) -> Self {
        CapabilitySet {
            bits: self.bits | capability.bit(),
        }
    }

    pub const fn contains(&self, capability: Capability) -> bool {
        self.bits & capability.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates the members in declaration order of [`Capability`].
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(CapabilitySet::EMPTY, CapabilitySet::with)
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// The schema family a store declares in its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DatabaseVariant {
    City,
    Country,
    Enterprise,
    Asn,
    Isp,
    Domain,
    ConnectionType,
    AnonymousIp,
}

impl DatabaseVariant {
    /// Record categories this variant can answer.
    ///
    /// Classification is by declared type, not by payload richness: a
    /// country-only file still answers City queries with a city-shaped record.
    pub const fn capabilities(self) -> CapabilitySet {
        use Capability as C;
        let set = CapabilitySet::EMPTY;
        match self {
            DatabaseVariant::City | DatabaseVariant::Country => {
                set.with(C::City).with(C::Country)
            }
            DatabaseVariant::Enterprise => set.with(C::Enterprise).with(C::City).with(C::Country),
            DatabaseVariant::Asn => set.with(C::Asn),
            DatabaseVariant::Isp => set.with(C::Isp).with(C::Asn),
            DatabaseVariant::Domain => set.with(C::Domain),
            DatabaseVariant::ConnectionType => set.with(C::ConnectionType),
            DatabaseVariant::AnonymousIp => set.with(C::AnonymousIp),
        }
    }
}

/// Every `database_type` identifier the reader accepts, with its variant.
pub const KNOWN_DATABASE_TYPES: &[(&str, DatabaseVariant)] = &[
    ("DBIP-ASN-Lite (compat=GeoLite2-ASN)", DatabaseVariant::Asn),
    ("GeoLite2-ASN", DatabaseVariant::Asn),
    ("GeoIP2-Anonymous-IP", DatabaseVariant::AnonymousIp),
    ("GeoIP2-Connection-Type", DatabaseVariant::ConnectionType),
    ("DBIP-City-Lite", DatabaseVariant::City),
    ("DBIP-Location (compat=City)", DatabaseVariant::City),
    ("GeoLite2-City", DatabaseVariant::City),
    ("GeoIP-City-Redacted-US", DatabaseVariant::City),
    ("GeoIP2-City", DatabaseVariant::City),
    ("GeoIP2-City-Africa", DatabaseVariant::City),
    ("GeoIP2-City-Asia-Pacific", DatabaseVariant::City),
    ("GeoIP2-City-Europe", DatabaseVariant::City),
    ("GeoIP2-City-North-America", DatabaseVariant::City),
    ("GeoIP2-City-South-America", DatabaseVariant::City),
    ("GeoIP2-Precision-City", DatabaseVariant::City),
    ("DBIP-Country-Lite", DatabaseVariant::Country),
    ("DBIP-Country", DatabaseVariant::Country),
    ("GeoLite2-Country", DatabaseVariant::Country),
    ("GeoIP2-Country", DatabaseVariant::Country),
    ("GeoIP2-Domain", DatabaseVariant::Domain),
    ("DBIP-ISP (compat=Enterprise)", DatabaseVariant::Enterprise),
    ("DBIP-Location-ISP (compat=Enterprise)", DatabaseVariant::Enterprise),
    ("GeoIP2-Enterprise", DatabaseVariant::Enterprise),
    ("GeoIP2-ISP", DatabaseVariant::Isp),
    ("GeoIP2-Precision-ISP", DatabaseVariant::Isp),
];

static REGISTRY: Lazy<HashMap<&'static str, DatabaseVariant>> =
    Lazy::new(|| KNOWN_DATABASE_TYPES.iter().copied().collect());

/// Resolves a declared `database_type` to its variant.
pub fn classify(database_type: &str) -> Result<DatabaseVariant> {
    REGISTRY
        .get(database_type)
        .copied()
        .ok_or_else(|| GeoIpError::UnknownDatabaseType(database_type.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Capability as C;

    fn set(items: &[Capability]) -> CapabilitySet {
        items.iter().copied().collect()
    }

    #[test]
    fn classifies_each_family() {
        let cases: &[(&str, &[Capability])] = &[
            ("GeoIP2-Anonymous-IP", &[C::AnonymousIp]),
            ("GeoLite2-ASN", &[C::Asn]),
            ("GeoIP2-City", &[C::City, C::Country]),
            ("GeoIP2-Country", &[C::City, C::Country]),
            ("GeoIP2-Connection-Type", &[C::ConnectionType]),
            ("GeoIP2-Domain", &[C::Domain]),
            ("GeoIP2-Enterprise", &[C::Enterprise, C::City, C::Country]),
            ("GeoIP2-ISP", &[C::Isp, C::Asn]),
        ];
        for (name, expected) in cases {
            let variant = classify(name).unwrap();
            assert_eq!(variant.capabilities(), set(expected), "{name}");
        }
    }

    #[test]
    fn every_registry_entry_classifies() {
        for (name, variant) in KNOWN_DATABASE_TYPES {
            assert_eq!(classify(name).unwrap(), *variant, "{name}");
            assert!(!variant.capabilities().is_empty());
        }
    }

    #[test]
    fn unknown_type_carries_the_string() {
        for name in ["Alien-Database", "geoip2-city", "GeoIP2-City ", ""] {
            match classify(name) {
                Err(GeoIpError::UnknownDatabaseType(got)) => assert_eq!(got, name),
                other => panic!("expected UnknownDatabaseType for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn capability_set_behaves_as_a_set() {
        let a = set(&[C::Country, C::City, C::City]);
        let b = set(&[C::City, C::Country]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(C::City));
        assert!(!a.contains(C::Asn));
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![C::City, C::Country]);
        assert!(CapabilitySet::EMPTY.is_empty());
        assert_eq!(format!("{a:?}"), "{City, Country}");
    }

    #[test]
    fn isp_is_superset_of_asn_and_enterprise_of_country() {
        let isp = DatabaseVariant::Isp.capabilities();
        let asn = DatabaseVariant::Asn.capabilities();
        assert!(asn.iter().all(|c| isp.contains(c)));

        let enterprise = DatabaseVariant::Enterprise.capabilities();
        let country = DatabaseVariant::Country.capabilities();
        assert!(country.iter().all(|c| enterprise.contains(c)));
    }
}
