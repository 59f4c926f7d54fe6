// crates/geoip-core/src/model/city.rs
use serde::{Deserialize, Serialize};

use super::{
    any_has_data, CityRecord, Continent, CountryRecord, Location, Postal, RepresentedCountry,
    Subdivision, Traits,
};
use crate::traits::HasData;

/// Result of a City query: the most detailed record a City database holds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub city: CityRecord,
    pub continent: Continent,
    pub country: CountryRecord,
    pub location: Location,
    pub postal: Postal,
    pub registered_country: CountryRecord,
    pub represented_country: RepresentedCountry,
    /// Ordered from largest to smallest administrative unit.
    pub subdivisions: Vec<Subdivision>,
    pub traits: Traits,
}

impl City {
    /// The smallest subdivision, e.g. a county rather than its state.
    pub fn most_specific_subdivision(&self) -> Option<&Subdivision> {
        self.subdivisions.last()
    }
}

impl HasData for City {
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

/// Result of a Country query. Carries no city, postal or location data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub continent: Continent,
    pub country: CountryRecord,
    pub registered_country: CountryRecord,
    pub represented_country: RepresentedCountry,
    pub traits: Traits,
}

impl HasData for Country {
    fn has_data(&self) -> bool {
        self.continent.has_data()
            || self.country.has_data()
            || self.registered_country.has_data()
            || self.represented_country.has_data()
            || self.traits.has_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::assert_each_field_counts;

    #[test]
    fn every_nested_part_counts() {
        assert_each_field_counts!(City {
            city: CityRecord { geoname_id: 2_643_743, ..Default::default() },
            continent: Continent { code: "EU".into(), ..Default::default() },
            country: CountryRecord { iso_code: "GB".into(), ..Default::default() },
            location: Location { time_zone: "Europe/London".into(), ..Default::default() },
            postal: Postal { code: "OX1".into() },
            registered_country: CountryRecord { geoname_id: 2_635_167, ..Default::default() },
            represented_country: RepresentedCountry { represented_type: "military".into(), ..Default::default() },
            subdivisions: vec![Subdivision { iso_code: "ENG".into(), ..Default::default() }],
            traits: Traits { is_anycast: true, ..Default::default() },
        });
        assert_each_field_counts!(Country {
            continent: Continent { code: "EU".into(), ..Default::default() },
            country: CountryRecord { iso_code: "GB".into(), ..Default::default() },
            registered_country: CountryRecord { geoname_id: 2_635_167, ..Default::default() },
            represented_country: RepresentedCountry { iso_code: "US".into(), ..Default::default() },
            traits: Traits { is_satellite_provider: true, ..Default::default() },
        });
    }

    #[test]
    fn empty_records_have_no_data() {
        assert!(!City::default().has_data());
        assert!(!Country::default().has_data());
    }

    #[test]
    fn nested_fields_propagate() {
        let city = City {
            postal: Postal { code: "123".into() },
            ..Default::default()
        };
        assert!(city.has_data());

        let country = Country {
            country: CountryRecord {
                iso_code: "US".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(country.has_data());

        let anycast = Country {
            traits: Traits {
                is_anycast: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(anycast.has_data());
    }

    #[test]
    fn empty_subdivisions_do_not_count() {
        let mut city = City::default();
        city.subdivisions = vec![Subdivision::default(), Subdivision::default()];
        assert!(!city.has_data());

        city.subdivisions = vec![
            Subdivision::default(),
            Subdivision {
                geoname_id: 1,
                ..Default::default()
            },
        ];
        assert!(city.has_data());
    }

    #[test]
    fn most_specific_subdivision_is_last() {
        let city = City {
            subdivisions: vec![
                Subdivision {
                    iso_code: "ENG".into(),
                    ..Default::default()
                },
                Subdivision {
                    iso_code: "WBK".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(city.most_specific_subdivision().unwrap().iso_code, "WBK");
        assert!(City::default().most_specific_subdivision().is_none());
    }
}
