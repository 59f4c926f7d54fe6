// crates/geoip-core/src/model/enterprise.rs

//! The Enterprise record: the City shape with per-field confidence scores
//! and the network traits only Enterprise databases carry.

use serde::{Deserialize, Serialize};

use super::{any_has_data, Continent, Location, Names, RepresentedCountry};
use crate::traits::{leaf_has_data, HasData};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseCityRecord {
    /// 0-100 confidence that the city is correct.
    pub confidence: u8,
    pub geoname_id: u32,
    pub names: Names,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseCountryRecord {
    pub confidence: u8,
    pub geoname_id: u32,
    pub is_in_european_union: bool,
    pub iso_code: String,
    pub names: Names,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterprisePostal {
    pub code: String,
    pub confidence: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseSubdivision {
    pub confidence: u8,
    pub geoname_id: u32,
    pub iso_code: String,
    pub names: Names,
}

/// ISP, organization, anonymizer and autonomous-system details.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterpriseTraits {
    pub autonomous_system_number: u32,
    pub autonomous_system_organization: String,
    pub connection_type: String,
    pub domain: String,
    pub is_anonymous_proxy: bool,
    pub is_anycast: bool,
    pub is_legitimate_proxy: bool,
    pub is_satellite_provider: bool,
    pub isp: String,
    pub mobile_country_code: String,
    pub mobile_network_code: String,
    pub organization: String,
    pub static_ip_score: f64,
    pub user_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enterprise {
    pub city: EnterpriseCityRecord,
    pub continent: Continent,
    pub country: EnterpriseCountryRecord,
    pub location: Location,
    pub postal: EnterprisePostal,
    pub registered_country: EnterpriseCountryRecord,
    pub represented_country: RepresentedCountry,
    pub subdivisions: Vec<EnterpriseSubdivision>,
    pub traits: EnterpriseTraits,
}

leaf_has_data!(EnterpriseCityRecord { confidence, geoname_id, names });
leaf_has_data!(EnterpriseCountryRecord { confidence, geoname_id, is_in_european_union, iso_code, names });
leaf_has_data!(EnterprisePostal { code, confidence });
leaf_has_data!(EnterpriseSubdivision { confidence, geoname_id, iso_code, names });
leaf_has_data!(EnterpriseTraits {
    autonomous_system_number,
    autonomous_system_organization,
    connection_type,
    domain,
    is_anonymous_proxy,
    is_anycast,
    is_legitimate_proxy,
    is_satellite_provider,
    isp,
    mobile_country_code,
    mobile_network_code,
    organization,
    static_ip_score,
    user_type,
});

impl HasData for Enterprise {
    fn has_data(&self) -> bool {
        self.city.has_data()
            || self.continent.has_data()
            || self.country.has_data()
            || self.location.has_data()
            || self.postal.has_data()
            || self.registered_country.has_data()
            || self.represented_country.has_data()
            || any_has_data(&self.subdivisions)
            || self.traits.has_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::assert_each_field_counts;

    fn names() -> Names {
        [("en", "Chatham")].into_iter().collect()
    }

    #[test]
    fn every_enterprise_field_counts() {
        assert_each_field_counts!(EnterpriseCityRecord {
            confidence: 11,
            geoname_id: 5_112_335,
            names: names(),
        });
        assert_each_field_counts!(EnterpriseCountryRecord {
            confidence: 99,
            geoname_id: 6_252_001,
            is_in_european_union: true,
            iso_code: "US".into(),
            names: names(),
        });
        assert_each_field_counts!(EnterprisePostal {
            code: "12037".into(),
            confidence: 11,
        });
        assert_each_field_counts!(EnterpriseSubdivision {
            confidence: 93,
            geoname_id: 5_128_638,
            iso_code: "NY".into(),
            names: names(),
        });
        assert_each_field_counts!(EnterpriseTraits {
            autonomous_system_number: 14_671,
            autonomous_system_organization: "FairPoint Communications".into(),
            connection_type: "Cable/DSL".into(),
            domain: "frpt.net".into(),
            is_anonymous_proxy: true,
            is_anycast: true,
            is_legitimate_proxy: true,
            is_satellite_provider: true,
            isp: "Fairpoint Communications".into(),
            mobile_country_code: "310".into(),
            mobile_network_code: "004".into(),
            organization: "Fairpoint Communications".into(),
            static_ip_score: 0.34,
            user_type: "residential".into(),
        });
        assert_each_field_counts!(Enterprise {
            city: EnterpriseCityRecord { confidence: 11, ..Default::default() },
            continent: Continent { code: "NA".into(), ..Default::default() },
            country: EnterpriseCountryRecord { iso_code: "US".into(), ..Default::default() },
            location: Location { metro_code: 532, ..Default::default() },
            postal: EnterprisePostal { code: "12037".into(), ..Default::default() },
            registered_country: EnterpriseCountryRecord { geoname_id: 1, ..Default::default() },
            represented_country: RepresentedCountry { represented_type: "military".into(), ..Default::default() },
            subdivisions: vec![EnterpriseSubdivision { iso_code: "NY".into(), ..Default::default() }],
            traits: EnterpriseTraits { user_type: "residential".into(), ..Default::default() },
        });
    }

    #[test]
    fn empty_parts_have_no_data() {
        assert!(!Enterprise::default().has_data());
        assert!(!EnterpriseCityRecord::default().has_data());
        assert!(!EnterpriseCountryRecord::default().has_data());
        assert!(!EnterprisePostal::default().has_data());
        assert!(!EnterpriseSubdivision::default().has_data());
        assert!(!EnterpriseTraits::default().has_data());
    }

    #[test]
    fn populated_parts_have_data() {
        assert!(EnterpriseCityRecord { geoname_id: 1, ..Default::default() }.has_data());
        assert!(EnterpriseCountryRecord { confidence: 99, ..Default::default() }.has_data());
        assert!(EnterprisePostal { code: "1".into(), ..Default::default() }.has_data());
        assert!(EnterpriseSubdivision { geoname_id: 1, ..Default::default() }.has_data());
        assert!(EnterpriseTraits { isp: "x".into(), ..Default::default() }.has_data());
        assert!(EnterpriseTraits { static_ip_score: 0.1, ..Default::default() }.has_data());

        let enterprise = Enterprise {
            city: EnterpriseCityRecord {
                geoname_id: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(enterprise.has_data());
    }

    #[test]
    fn subdivisions_count_only_when_populated() {
        let mut enterprise = Enterprise::default();
        enterprise.subdivisions = vec![EnterpriseSubdivision::default(), EnterpriseSubdivision::default()];
        assert!(!enterprise.has_data());

        enterprise.subdivisions = vec![
            EnterpriseSubdivision::default(),
            EnterpriseSubdivision {
                geoname_id: 1,
                ..Default::default()
            },
        ];
        assert!(enterprise.has_data());
    }
}
