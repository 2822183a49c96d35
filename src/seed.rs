//! Initial contents of every store.
//!
//! [`Seed::builtin`] holds the demo portfolio the front-end starts with. A seed can
//! also be loaded from json; sections left out of the file start empty.
use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    constant::pages::LANDING,
    error::{StoreError, StoreResult},
    types::{Coin, Holder, PriceMap, Symbol, Transaction, User},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default = "default_page")]
    pub page: String,
    #[serde(default)]
    pub prices: PriceMap,
    #[serde(default)]
    pub coins: Vec<Coin>,
    #[serde(default)]
    pub holders: Vec<Holder>,
    #[serde(default)]
    pub users: Vec<User>,
}

fn default_page() -> String {
    LANDING.to_string()
}

impl Default for Seed {
    fn default() -> Self {
        Seed {
            page: default_page(),
            prices: PriceMap::new(),
            coins: Vec::new(),
            holders: Vec::new(),
            users: Vec::new(),
        }
    }
}

impl Seed {
    pub fn builtin() -> Self {
        let coins = vec![
            Coin::new("Ethereum", Symbol::from_static("ETHAUD"), 0.0),
            Coin::new("Cardano", Symbol::from_static("ADAAUD"), 0.0),
        ];

        let first_buys = || {
            vec![
                Transaction::new("Ethereum", 0.0088044, 5694.36),
                Transaction::new("Cardano", 27.586521622, 1.71),
            ]
        };
        let with_dip = || {
            let mut transactions = first_buys();
            transactions.push(Transaction::new("Ethereum", 0.01298147, 3815.99));
            transactions
        };

        let holders = vec![
            Holder::new("Aria", first_buys()),
            Holder::new("Archer", first_buys()),
            Holder::new("Benji", first_buys()),
            Holder::new("Max", with_dip()),
            Holder::new("Cooper", with_dip()),
        ];

        Seed {
            coins,
            holders,
            ..Seed::default()
        }
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[instrument]
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let seed = Seed::from_json(&json)?;
        info!(
            coins = seed.coins.len(),
            holders = seed.holders.len(),
            users = seed.users.len(),
            "Loaded seed file"
        );
        Ok(seed)
    }

    /// Catalog symbols and names are unique, holder names are unique, every
    /// transaction names a catalog coin and usernames are non-empty and unique.
    pub fn validate(&self) -> StoreResult<()> {
        let mut symbols = HashSet::new();
        let mut names = HashSet::new();
        for coin in &self.coins {
            if !symbols.insert(&coin.symbol) {
                return Err(StoreError::DuplicateSymbol(coin.symbol.to_string()));
            }
            if !names.insert(&coin.name) {
                return Err(StoreError::DuplicateCoinName(coin.name.to_string()));
            }
        }

        let mut holders = HashSet::new();
        for holder in &self.holders {
            if !holders.insert(holder.name.as_str()) {
                return Err(StoreError::DuplicateHolder(holder.name.clone()));
            }
            for transaction in &holder.transactions {
                if !self.coins.iter().any(|coin| coin.name == transaction.coin) {
                    return Err(StoreError::UnknownCoin(transaction.coin.to_string()));
                }
            }
        }

        let mut usernames = HashSet::new();
        for user in &self.users {
            if user.username.is_empty() {
                return Err(StoreError::EmptyUsername);
            }
            if !usernames.insert(user.username.as_str()) {
                return Err(StoreError::DuplicateUsername(user.username.clone()));
            }
        }
        Ok(())
    }
}
