// crates/geoip-core/src/traits.rs
use serde::de::DeserializeOwned;

use crate::capability::Capability;
use crate::model;

/// Distinguishes "address found, but nothing populated" from real data.
///
/// A lookup for an address that is absent from the database returns the
/// record's `Default` value without an error; callers use this predicate to
/// tell the two cases apart.
///
/// Leaf records report `true` when at least one direct field differs from its
/// zero representation (empty string, zero number, unset option, `false`).
/// Aggregate records report `true` when any nested part does. A list of
/// nested records only counts when one of its elements has data itself.
///
/// # Examples
/// ```rust
/// use geoip_core::model::{Asn, Postal};
/// use geoip_core::HasData;
///
/// assert!(!Asn::default().has_data());
/// assert!(Postal { code: "10115".into() }.has_data());
/// ```
pub trait HasData {
    fn has_data(&self) -> bool;
}

/// A record category a [`Reader`](crate::Reader) can be queried for.
///
/// Ties each typed result to the [`Capability`] a database must carry before
/// the reader will try to decode it.
pub trait Record: DeserializeOwned + Default + HasData {
    const CAPABILITY: Capability;
}

macro_rules! impl_record {
    ($($ty:ty => $cap:ident),+ $(,)?) => {
        $(impl Record for $ty {
            const CAPABILITY: Capability = Capability::$cap;
        })+
    };
}

impl_record!(
    model::City => City,
    model::Country => Country,
    model::Enterprise => Enterprise,
    model::Asn => Asn,
    model::Isp => Isp,
    model::Domain => Domain,
    model::ConnectionType => ConnectionType,
    model::AnonymousIp => AnonymousIp,
);

/// Zero-value test for a single record field.
pub(crate) trait IsZero {
    fn is_zero(&self) -> bool;
}

impl IsZero for String {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for bool {
    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl<T> IsZero for Option<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_is_zero_for_numbers {
    ($($t:ty),*) => {
        $(impl IsZero for $t {
            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0 as $t
            }
        })*
    };
}

impl_is_zero_for_numbers!(u8, u16, u32, u64, f64);

/// Implements [`HasData`] for a leaf record: any direct field that is not
/// zero counts as data. Nested records listed here must implement `IsZero`.
macro_rules! leaf_has_data {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::traits::HasData for $ty {
            fn has_data(&self) -> bool {
                use $crate::traits::IsZero;
                $(!self.$field.is_zero())||+
            }
        }
    };
}

pub(crate) use leaf_has_data;

/// Asserts that each listed field, set alone on a default record, makes the
/// record report data.
#[cfg(test)]
macro_rules! assert_each_field_counts {
    ($ty:ident { $($field:ident: $value:expr),+ $(,)? }) => {
        $(
            #[allow(clippy::needless_update)]
            let record = $ty {
                $field: $value,
                ..Default::default()
            };
            assert!(
                $crate::traits::HasData::has_data(&record),
                concat!(stringify!($ty), " with only `", stringify!($field), "` set has no data")
            );
        )+
    };
}

#[cfg(test)]
pub(crate) use assert_each_field_counts;

#[cfg(test)]
mod tests {
    use super::IsZero;

    #[test]
    fn zero_values() {
        assert!(String::new().is_zero());
        assert!(!"x".to_string().is_zero());
        assert!(false.is_zero());
        assert!(!true.is_zero());
        assert!(None::<f64>.is_zero());
        assert!(!Some(0.0_f64).is_zero());
        assert!(0_u32.is_zero());
        assert!(!7_u16.is_zero());
        assert!(0.0_f64.is_zero());
        assert!(!0.5_f64.is_zero());
    }
}
