//! A coin is a crypto currency denomination with a display name and a market symbol.
//! `symbol` is used to look up market data e.g. `ETHAUD`, `name` is shown to users e.g. `Ethereum`.
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{is_default, symbol::Symbol};

/// Display name of a coin, used by transactions to point back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinName(String);

impl CoinName {
    pub fn new(name: impl Into<String>) -> Self {
        CoinName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CoinName {
    fn from(name: &str) -> Self {
        CoinName(name.to_string())
    }
}

impl fmt::Display for CoinName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry with its last known price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub name: CoinName,
    pub symbol: Symbol,
    pub price: f64,
}

impl Coin {
    pub fn new(name: impl Into<String>, symbol: Symbol, price: f64) -> Self {
        Coin {
            name: CoinName::new(name),
            symbol,
            price,
        }
    }
}

/// A coin together with a quantity, as held by a user.
/// The name is omitted from json when empty and defaults to empty when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinBalance {
    #[serde(skip_serializing_if = "is_default", default)]
    pub name: CoinName,
    pub symbol: Symbol,
    pub price: f64,
    pub amount: f64,
}

/// Value side of a symbol keyed listing
/// e.g. ETHAUD: CoinPrice{name: "Ethereum", price: 4500.50}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinPrice {
    pub name: CoinName,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinsPutRequest {
    pub coins: Vec<CoinPutRequest>,
}

/// The symbol is kept as a raw string so that a bad symbol surfaces as a
/// `StoreError` when the request is applied rather than as a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinPutRequest {
    pub name: String,
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn balance_omits_empty_name() {
        let balance = CoinBalance {
            name: CoinName::default(),
            symbol: Symbol::from_static("ETHAUD"),
            price: 0.0,
            amount: 1.5,
        };
        let value = serde_json::to_value(&balance).unwrap();
        assert_eq!(value, json!({"symbol": "ETHAUD", "price": 0.0, "amount": 1.5}));

        let parsed: CoinBalance = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, balance);
    }

    #[test]
    fn coin_rejects_bad_symbol() {
        let bad = json!({"name": "Ethereum", "symbol": "eth", "price": 0});
        assert!(serde_json::from_value::<Coin>(bad).is_err());
    }
}
