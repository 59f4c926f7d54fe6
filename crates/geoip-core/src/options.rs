// crates/geoip-core/src/options.rs

//! Construction-time configuration for [`Reader`](crate::Reader).

/// One recognized construction option.
///
/// The set is open: new knobs may be added without breaking callers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReaderOption {
    /// Validate the file layout before accepting the store.
    StrictVerification,
    /// Preferred languages for resolving display names, most preferred first.
    Locales(Vec<String>),
}

/// The resolved configuration a reader is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    pub(crate) strict_verification: bool,
    pub(crate) locales: Vec<String>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            strict_verification: false,
            locales: vec!["en".to_string()],
        }
    }
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_verification(mut self, enabled: bool) -> Self {
        self.strict_verification = enabled;
        self
    }

    /// An empty list keeps the current locales.
    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        if !locales.is_empty() {
            self.locales = locales;
        }
        self
    }

    /// Applies one option; `None` is a no-op.
    pub fn apply(self, option: impl Into<Option<ReaderOption>>) -> Self {
        match option.into() {
            Some(ReaderOption::StrictVerification) => self.strict_verification(true),
            Some(ReaderOption::Locales(locales)) => self.locales(locales),
            None => self,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict_verification
    }

    pub fn preferred_locales(&self) -> &[String] {
        &self.locales
    }
}

impl<O: Into<Option<ReaderOption>>> FromIterator<O> for ReaderOptions {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        iter.into_iter().fold(ReaderOptions::default(), ReaderOptions::apply)
    }
}
