// crates/geoip-core/src/builder/samples.rs

//! Small sample databases for every variant.
//!
//! Used by the demos, benches and tests; the values follow the shape of the
//! public GeoIP2 test data so records decode into fully populated types.

use super::{IpVersion, MmdbBuilder, Value};
use crate::capability::DatabaseVariant;
use crate::error::Result;

/// London, GB: complete City record with one subdivision.
pub const LONDON: &str = "81.2.69.142";
/// Boxford, GB: two subdivisions and a postal code.
pub const BOXFORD: &str = "2.125.160.216";
/// Linköping, SE: location with a latitude but no longitude.
pub const PARTIAL_LOCATION: &str = "89.160.20.112";
/// Mapped to an empty map: found, but nothing populated.
pub const EMPTY_RECORD: &str = "10.1.2.3";
/// Not present in any sample database.
pub const ABSENT: &str = "203.0.113.7";
/// Present in the ASN, ISP, Domain, Connection-Type and Anonymous-IP samples.
pub const NETWORK: &str = "1.128.0.1";
/// Present in the Enterprise sample.
pub const ENTERPRISE: &str = "74.209.24.1";

/// Declared `database_type` used for each variant's sample.
pub fn database_type(variant: DatabaseVariant) -> &'static str {
    match variant {
        DatabaseVariant::City => "GeoIP2-City",
        DatabaseVariant::Country => "GeoIP2-Country",
        DatabaseVariant::Enterprise => "GeoIP2-Enterprise",
        DatabaseVariant::Asn => "GeoLite2-ASN",
        DatabaseVariant::Isp => "GeoIP2-ISP",
        DatabaseVariant::Domain => "GeoIP2-Domain",
        DatabaseVariant::ConnectionType => "GeoIP2-Connection-Type",
        DatabaseVariant::AnonymousIp => "GeoIP2-Anonymous-IP",
    }
}

/// A populated builder for `variant`, ready to [`build`](MmdbBuilder::build).
pub fn database(variant: DatabaseVariant) -> Result<MmdbBuilder> {
    let mut builder = MmdbBuilder::new(database_type(variant), IpVersion::V6)
        .languages(["en", "de"])
        .build_epoch(1_700_000_000);

    let entries: Vec<(&str, Value)> = match variant {
        DatabaseVariant::City => vec![
            ("81.2.69.0/24", london()),
            ("2.125.160.0/24", boxford()),
            ("89.160.20.0/24", partial_location()),
            ("10.0.0.0/8", Value::Map(Vec::new())),
        ],
        DatabaseVariant::Country => vec![
            ("81.2.69.0/24", country_gb()),
            ("10.0.0.0/8", Value::Map(Vec::new())),
        ],
        DatabaseVariant::Enterprise => vec![("74.209.24.0/24", enterprise())],
        DatabaseVariant::Asn => vec![("1.128.0.0/11", asn())],
        DatabaseVariant::Isp => vec![("1.128.0.0/11", isp())],
        DatabaseVariant::Domain => vec![("1.128.0.0/11", Value::map([("domain", "telstra.net")]))],
        DatabaseVariant::ConnectionType => vec![(
            "1.128.0.0/11",
            Value::map([("connection_type", "Cellular")]),
        )],
        DatabaseVariant::AnonymousIp => vec![(
            "1.128.0.0/11",
            Value::map([
                ("is_anonymous", true),
                ("is_anonymous_vpn", true),
                ("is_public_proxy", false),
            ]),
        )],
    };

    for (cidr, value) in &entries {
        builder.insert_cidr(cidr, value)?;
    }
    Ok(builder)
}

fn names(en: &str, de: &str) -> Value {
    Value::map([("de", de), ("en", en)])
}

fn europe() -> Value {
    Value::map([
        ("code", Value::from("EU")),
        ("geoname_id", Value::Uint32(6_255_148)),
        ("names", names("Europe", "Europa")),
    ])
}

fn united_kingdom() -> Value {
    Value::map([
        ("geoname_id", Value::Uint32(2_635_167)),
        ("is_in_european_union", Value::Bool(false)),
        ("iso_code", Value::from("GB")),
        ("names", names("United Kingdom", "Vereinigtes Königreich")),
    ])
}

fn england() -> Value {
    Value::map([
        ("geoname_id", Value::Uint32(6_269_131)),
        ("iso_code", Value::from("ENG")),
        ("names", names("England", "England")),
    ])
}

fn london() -> Value {
    Value::map([
        (
            "city",
            Value::map([
                ("geoname_id", Value::Uint32(2_643_743)),
                ("names", names("London", "London")),
            ]),
        ),
        ("continent", europe()),
        ("country", united_kingdom()),
        (
            "location",
            Value::map([
                ("accuracy_radius", Value::Uint16(10)),
                ("latitude", Value::Double(51.5142)),
                ("longitude", Value::Double(-0.0931)),
                ("time_zone", Value::from("Europe/London")),
            ]),
        ),
        ("registered_country", united_kingdom()),
        ("subdivisions", Value::Array(vec![england()])),
    ])
}

fn boxford() -> Value {
    Value::map([
        (
            "city",
            Value::map([
                ("geoname_id", Value::Uint32(2_655_045)),
                ("names", Value::map([("en", "Boxford")])),
            ]),
        ),
        ("continent", europe()),
        ("country", united_kingdom()),
        (
            "location",
            Value::map([
                ("accuracy_radius", Value::Uint16(100)),
                ("latitude", Value::Double(51.75)),
                ("longitude", Value::Double(-1.25)),
                ("time_zone", Value::from("Europe/London")),
            ]),
        ),
        ("postal", Value::map([("code", "OX1")])),
        ("registered_country", united_kingdom()),
        (
            "subdivisions",
            Value::Array(vec![
                england(),
                Value::map([
                    ("geoname_id", Value::Uint32(3_333_217)),
                    ("iso_code", Value::from("WBK")),
                    ("names", Value::map([("en", "West Berkshire")])),
                ]),
            ]),
        ),
    ])
}

fn partial_location() -> Value {
    Value::map([
        (
            "country",
            Value::map([
                ("geoname_id", Value::Uint32(2_661_886)),
                ("is_in_european_union", Value::Bool(true)),
                ("iso_code", Value::from("SE")),
                ("names", names("Sweden", "Schweden")),
            ]),
        ),
        (
            "location",
            Value::map([
                ("latitude", Value::Double(58.4167)),
                ("time_zone", Value::from("Europe/Stockholm")),
            ]),
        ),
        ("subdivisions", Value::Array(vec![Value::Map(Vec::new())])),
    ])
}

fn country_gb() -> Value {
    Value::map([
        ("continent", europe()),
        ("country", united_kingdom()),
        ("registered_country", united_kingdom()),
    ])
}

fn enterprise() -> Value {
    let us = Value::map([
        ("confidence", Value::Uint16(99)),
        ("geoname_id", Value::Uint32(6_252_001)),
        ("iso_code", Value::from("US")),
        ("names", names("United States", "USA")),
    ]);
    Value::map([
        (
            "city",
            Value::map([
                ("confidence", Value::Uint16(11)),
                ("geoname_id", Value::Uint32(5_112_335)),
                ("names", Value::map([("en", "Chatham")])),
            ]),
        ),
        (
            "continent",
            Value::map([
                ("code", Value::from("NA")),
                ("geoname_id", Value::Uint32(6_255_149)),
                ("names", names("North America", "Nordamerika")),
            ]),
        ),
        ("country", us.clone()),
        (
            "location",
            Value::map([
                ("accuracy_radius", Value::Uint16(27)),
                ("latitude", Value::Double(42.3478)),
                ("longitude", Value::Double(-73.5549)),
                ("metro_code", Value::Uint16(532)),
                ("time_zone", Value::from("America/New_York")),
            ]),
        ),
        (
            "postal",
            Value::map([("code", Value::from("12037")), ("confidence", Value::Uint16(11))]),
        ),
        ("registered_country", us),
        (
            "subdivisions",
            Value::Array(vec![Value::map([
                ("confidence", Value::Uint16(93)),
                ("geoname_id", Value::Uint32(5_128_638)),
                ("iso_code", Value::from("NY")),
                ("names", Value::map([("en", "New York")])),
            ])]),
        ),
        (
            "traits",
            Value::map([
                ("autonomous_system_number", Value::Uint32(14_671)),
                ("autonomous_system_organization", Value::from("FairPoint Communications")),
                ("connection_type", Value::from("Cable/DSL")),
                ("domain", Value::from("frpt.net")),
                ("isp", Value::from("Fairpoint Communications")),
                ("organization", Value::from("Fairpoint Communications")),
                ("static_ip_score", Value::Double(0.34)),
                ("user_type", Value::from("residential")),
            ]),
        ),
    ])
}

fn asn() -> Value {
    Value::map([
        ("autonomous_system_number", Value::Uint32(1221)),
        ("autonomous_system_organization", Value::from("Telstra Pty Ltd")),
    ])
}

fn isp() -> Value {
    Value::map([
        ("autonomous_system_number", Value::Uint32(1221)),
        ("autonomous_system_organization", Value::from("Telstra Pty Ltd")),
        ("isp", Value::from("Telstra Internet")),
        ("mobile_country_code", Value::from("505")),
        ("mobile_network_code", Value::from("01")),
        ("organization", Value::from("Telstra Internet")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::classify;

    #[test]
    fn sample_types_classify_to_their_variant() {
        for (_, variant) in crate::capability::KNOWN_DATABASE_TYPES {
            assert_eq!(classify(database_type(*variant)).unwrap(), *variant);
        }
    }

    #[test]
    fn every_sample_builds() {
        for (_, variant) in crate::capability::KNOWN_DATABASE_TYPES {
            let bytes = database(*variant).unwrap().build().unwrap();
            assert!(!bytes.is_empty());
        }
    }
}
