//! Record types held by the stores, split by domain
use std::collections::HashMap;

pub mod coin;
pub mod holder;
pub mod order_book;
pub mod symbol;
pub mod user;

pub use coin::{Coin, CoinBalance, CoinName, CoinPrice, CoinPutRequest, CoinsPutRequest};
pub use holder::{Holder, Transaction, TransactionRequest};
pub use order_book::OrderBookSnapshot;
pub use symbol::Symbol;
pub use user::{User, UserPutRequest};

/// Current price per trading symbol.
pub type PriceMap = HashMap<Symbol, f64>;

/// Catalog listed by symbol, with display name and price.
pub type PriceListing = HashMap<Symbol, CoinPrice>;

/// Used to skip serialization if the value is default e.g. 0 or ""
pub fn is_default<T: Default + PartialEq>(t: &T) -> bool {
    t == &T::default()
}
