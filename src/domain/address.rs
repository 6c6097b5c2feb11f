//! Lowercase-normalized chain address.

use core::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;

/// The canonical identity of an account, token, or pool on the chain.
///
/// Indexers and wallets disagree on address casing (checksummed vs. plain
/// hex), so every address is lowercased at construction. Two addresses that
/// differ only in case compare equal and hash identically, which is what
/// makes event grouping case-insensitive throughout the crate.
///
/// # Examples
///
/// ```
/// use clmm_lens::domain::Address;
///
/// let a = Address::new("0xAbCd");
/// let b = Address::new("0xabcd");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "0xabcd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Creates an `Address`, lowercasing the input unconditionally.
    ///
    /// Construction is infallible: any string is accepted and normalized.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_lowercase())
    }

    /// The sentinel owner used when ownerless events are bucketed rather
    /// than dropped (see the aggregator's owner policy).
    #[must_use]
    pub fn unknown() -> Self {
        Self("unknown".to_owned())
    }

    /// Returns the normalized string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the address is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// Deserialization goes through `new` so wire data is normalized on entry.
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
