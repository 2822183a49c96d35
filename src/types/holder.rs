//! A holder owns the list of purchases they made. Transactions are append only.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::coin::{Coin, CoinBalance, CoinName};

/// One purchase of `buy` units of `coin` at `price` each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub coin: CoinName,
    pub buy: f64,
    pub price: f64,
}

impl Transaction {
    pub fn new(coin: impl Into<CoinName>, buy: f64, price: f64) -> Self {
        Transaction {
            coin: coin.into(),
            buy,
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holder {
    pub name: String,
    pub transactions: Vec<Transaction>,
}

impl Holder {
    pub fn new(name: impl Into<String>, transactions: Vec<Transaction>) -> Self {
        Holder {
            name: name.into(),
            transactions,
        }
    }

    /// Total quantity bought per coin, in catalog order. Coins never bought are left out
    /// and transactions naming a coin missing from `catalog` are ignored.
    pub fn balances(&self, catalog: &[Coin]) -> Vec<CoinBalance> {
        let mut totals: HashMap<&CoinName, f64> = HashMap::new();
        for transaction in &self.transactions {
            *totals.entry(&transaction.coin).or_insert(0.0) += transaction.buy;
        }

        catalog
            .iter()
            .filter_map(|coin| {
                totals.get(&coin.name).map(|amount| CoinBalance {
                    name: coin.name.clone(),
                    symbol: coin.symbol.clone(),
                    price: coin.price,
                    amount: *amount,
                })
            })
            .collect()
    }
}

/// Body for adding a transaction to an existing holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub username: String,
    pub coin: CoinName,
    pub amount: f64,
    pub price: f64,
}
