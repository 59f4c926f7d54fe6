// crates/geoip-core/src/model/names.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::traits::{HasData, IsZero};

/// Localized display names keyed by language code (`"en"`, `"de"`, `"pt-BR"`, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Names(BTreeMap<String, String>);

impl Names {
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn english(&self) -> Option<&str> {
        self.get("en")
    }

    /// First name available in the given preference order.
    pub fn localized<S: AsRef<str>>(&self, locales: &[S]) -> Option<&str> {
        locales.iter().find_map(|l| self.get(l.as_ref()))
    }

    pub fn insert(&mut self, language: impl Into<String>, name: impl Into<String>) {
        self.0.insert(language.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Names {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Names(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An empty name is the zero value for its language.
impl HasData for Names {
    fn has_data(&self) -> bool {
        self.0.values().any(|name| !name.is_empty())
    }
}

impl IsZero for Names {
    fn is_zero(&self) -> bool {
        !self.has_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_follows_preference_order() {
        let names: Names = [("en", "Munich"), ("de", "München")].into_iter().collect();
        assert_eq!(names.localized(&["fr", "de", "en"]), Some("München"));
        assert_eq!(names.localized(&["fr"]), None);
        assert_eq!(names.english(), Some("Munich"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn has_data_iff_some_name_is_non_empty() {
        assert!(!Names::default().has_data());
        let mut names = Names::default();
        names.insert("en", "A");
        assert!(names.has_data());
    }

    #[test]
    fn empty_names_are_zero() {
        let names: Names = [("en", ""), ("de", "")].into_iter().collect();
        assert!(!names.is_empty());
        assert!(!names.has_data());
        assert!(names.is_zero());

        let record = crate::model::CityRecord {
            names,
            ..Default::default()
        };
        assert!(!record.has_data());
    }
}
