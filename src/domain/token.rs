//! Token identity and display metadata.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Address, Decimals};

/// A token as known to the presentation layer.
///
/// Carries the lowercase-normalized [`Address`] (the canonical identity),
/// display metadata (`symbol`, `name`), and [`Decimals`] for price
/// adjustment. Equality and hashing consider only the address: two records
/// for the same address are the same token even if the indexer returned
/// different metadata snapshots.
///
/// # Examples
///
/// ```
/// use clmm_lens::domain::{Address, Decimals, Token};
///
/// let usdc = Token::new(
///     Address::new("0xA0b8"),
///     "USDC",
///     "USD Coin",
///     Decimals::new(6).expect("valid decimals"),
/// );
/// assert_eq!(usdc.address.as_str(), "0xa0b8");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Lowercase-normalized contract address; the token's identity.
    pub address: Address,
    /// Ticker symbol, e.g. `"USDC"`.
    pub symbol: String,
    /// Full display name, e.g. `"USD Coin"`.
    pub name: String,
    /// On-chain decimal places.
    pub decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub fn new(
        address: Address,
        symbol: impl Into<String>,
        name: impl Into<String>,
        decimals: Decimals,
    ) -> Self {
        Self {
            address,
            symbol: symbol.into(),
            name: name.into(),
            decimals,
        }
    }
}

// Identity is the address alone; metadata snapshots may drift between
// indexer responses without changing which token this is.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.address)
    }
}
