use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Trading symbol used to look a coin up on a market, e.g. `ETHAUD`.
///
/// Only uppercase ASCII letters and digits are accepted, so a price keyed by
/// `Symbol` can always be matched against `Coin::symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> StoreResult<Self> {
        let symbol = symbol.into();
        let valid = !symbol.is_empty()
            && symbol
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if valid {
            Ok(Symbol(symbol))
        } else {
            Err(StoreError::InvalidSymbol(symbol))
        }
    }

    /// For literals known to be valid at compile time.
    pub(crate) fn from_static(symbol: &'static str) -> Self {
        debug_assert!(Symbol::new(symbol).is_ok(), "invalid literal symbol {symbol}");
        Symbol(symbol.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_market_symbols() {
        let symbol: Symbol = "ETHAUD".parse().expect("valid symbol");
        assert_eq!(symbol.as_str(), "ETHAUD");
        assert!(Symbol::new("BTC2USDT").is_ok());
    }

    #[test]
    fn rejects_empty_and_lowercase() {
        for bad in ["", "ethaud", "ETH-AUD", "ETH AUD"] {
            match Symbol::new(bad) {
                Err(StoreError::InvalidSymbol(s)) => assert_eq!(s, bad),
                other => panic!("expected InvalidSymbol for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn deserialize_validates() {
        let symbol: Symbol = serde_json::from_str("\"ADAAUD\"").expect("valid json symbol");
        assert_eq!(symbol, Symbol::from_static("ADAAUD"));
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"ADAAUD\"");

        assert!(serde_json::from_str::<Symbol>("\"adaaud\"").is_err());
    }
}
