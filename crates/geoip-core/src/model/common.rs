// crates/geoip-core/src/model/common.rs

//! Leaf substructures shared by the City and Country records.

use serde::{Deserialize, Serialize};

use super::Names;
use crate::traits::leaf_has_data;

/// Continent the network is located on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Continent {
    /// Two-letter continent code (`"EU"`, `"NA"`, ...).
    pub code: String,
    pub geoname_id: u32,
    pub names: Names,
}

/// Country the network is located in, or registered to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryRecord {
    pub geoname_id: u32,
    pub is_in_european_union: bool,
    /// ISO 3166-1 alpha-2 code.
    pub iso_code: String,
    pub names: Names,
}

/// Country represented by the users of the network, e.g. a military base abroad.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepresentedCountry {
    pub geoname_id: u32,
    pub is_in_european_union: bool,
    pub iso_code: String,
    pub names: Names,
    #[serde(rename = "type")]
    pub represented_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityRecord {
    pub geoname_id: u32,
    pub names: Names,
}

/// Approximate position of the network.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA time zone, e.g. `"Europe/Berlin"`.
    pub time_zone: String,
    /// Radius in kilometers around the coordinates.
    pub accuracy_radius: u16,
    pub metro_code: u16,
}

impl Location {
    /// Coordinates count only as a pair; one without the other is no position.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Postal {
    pub code: String,
}

/// One administrative subdivision (state, region, province...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subdivision {
    pub geoname_id: u32,
    /// ISO 3166-2 code without the country prefix.
    pub iso_code: String,
    pub names: Names,
}

/// Network flags carried by City and Country databases.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Traits {
    pub is_anonymous_proxy: bool,
    pub is_anycast: bool,
    pub is_satellite_provider: bool,
}

leaf_has_data!(Continent { code, geoname_id, names });
leaf_has_data!(CountryRecord { geoname_id, is_in_european_union, iso_code, names });
leaf_has_data!(RepresentedCountry { geoname_id, is_in_european_union, iso_code, names, represented_type });
leaf_has_data!(CityRecord { geoname_id, names });
leaf_has_data!(Location { latitude, longitude, time_zone, accuracy_radius, metro_code });
leaf_has_data!(Postal { code });
leaf_has_data!(Subdivision { geoname_id, iso_code, names });
leaf_has_data!(Traits { is_anonymous_proxy, is_anycast, is_satellite_provider });
