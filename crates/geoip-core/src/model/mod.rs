// crates/geoip-core/src/model/mod.rs

//! # Record Model
//!
//! Typed results of the reader's query methods. Every record derives
//! `Default` (the value returned for an absent address) and `Deserialize`
//! (materialized straight from the data section), and implements
//! [`HasData`](crate::HasData).
pub mod city;
pub mod common;
pub mod enterprise;
pub mod names;
pub mod network;

pub use city::{City, Country};
pub use common::{
    CityRecord, Continent, CountryRecord, Location, Postal, RepresentedCountry, Subdivision,
    Traits,
};
pub use enterprise::{
    Enterprise, EnterpriseCityRecord, EnterpriseCountryRecord, EnterprisePostal,
    EnterpriseSubdivision, EnterpriseTraits,
};
pub use names::Names;
pub use network::{AnonymousIp, Asn, ConnectionType, Domain, Isp};

use crate::traits::HasData;

/// A list counts only through its populated elements.
pub(crate) fn any_has_data<T: HasData>(items: &[T]) -> bool {
    items.iter().any(HasData::has_data)
}
