use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    constant::store_names::{COINS, HOLDERS, PAGE, PRICES, USERS},
    error::{StoreError, StoreResult},
    seed::Seed,
    types::{
        Coin, CoinBalance, CoinPrice, CoinPutRequest, CoinsPutRequest, Holder, OrderBookSnapshot,
        PriceListing, PriceMap, Symbol, Transaction, TransactionRequest, User, UserPutRequest,
    },
};

use super::Writable;

/// Every store of the application, built once at startup and handed to consumers.
#[derive(Debug, Clone)]
pub struct AppStore {
    page: Writable<String>,
    prices: Writable<PriceMap>,
    coins: Writable<Vec<Coin>>,
    holders: Writable<Vec<Holder>>,
    users: Writable<Vec<User>>,
}

/// Point in time copy of every store.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub taken_at: DateTime<Utc>,
    pub page: String,
    pub prices: PriceMap,
    pub coins: Vec<Coin>,
    pub holders: Vec<Holder>,
    pub users: Vec<User>,
}

impl AppStore {
    pub fn new(seed: Seed) -> StoreResult<Self> {
        seed.validate()?;
        info!(
            page = %seed.page,
            coins = seed.coins.len(),
            holders = seed.holders.len(),
            users = seed.users.len(),
            "Creating stores"
        );
        Ok(AppStore {
            page: Writable::new(PAGE, seed.page),
            prices: Writable::new(PRICES, seed.prices),
            coins: Writable::new(COINS, seed.coins),
            holders: Writable::new(HOLDERS, seed.holders),
            users: Writable::new(USERS, seed.users),
        })
    }

    pub fn page(&self) -> &Writable<String> {
        &self.page
    }

    pub fn prices(&self) -> &Writable<PriceMap> {
        &self.prices
    }

    pub fn coins(&self) -> &Writable<Vec<Coin>> {
        &self.coins
    }

    pub fn holders(&self) -> &Writable<Vec<Holder>> {
        &self.holders
    }

    pub fn users(&self) -> &Writable<Vec<User>> {
        &self.users
    }

    pub fn navigate(&self, page: impl Into<String>) {
        let page = page.into();
        info!("Navigating to {}", page);
        self.page.set(page);
    }

    pub fn set_price(&self, symbol: Symbol, price: f64) {
        self.prices.update(|prices| {
            prices.insert(symbol, price);
        });
    }

    /// Replace the catalog entry with the same symbol, or append.
    ///
    /// A name belongs to at most one symbol, and a coin named by any holder
    /// transaction keeps its name so those transactions still resolve.
    pub fn put_coin(&self, coin: Coin) -> StoreResult<()> {
        let renamed = self.coins.with(|coins| {
            if coins
                .iter()
                .any(|other| other.name == coin.name && other.symbol != coin.symbol)
            {
                return Err(StoreError::DuplicateCoinName(coin.name.to_string()));
            }
            Ok(coins
                .iter()
                .find(|existing| existing.symbol == coin.symbol && existing.name != coin.name)
                .map(|existing| existing.name.clone()))
        });
        let renamed = match renamed {
            Ok(renamed) => renamed,
            Err(e) => {
                warn!("Rejected coin {}: {}", coin.symbol, e);
                return Err(e);
            }
        };

        if let Some(old) = renamed {
            let bought = self.holders.with(|holders| {
                holders
                    .iter()
                    .flat_map(|holder| &holder.transactions)
                    .any(|transaction| transaction.coin == old)
            });
            if bought {
                warn!("Refusing to rename {} to {}", old, coin.name);
                return Err(StoreError::CoinInUse(old.to_string()));
            }
        }

        self.coins.update(|coins| {
            match coins.iter_mut().find(|existing| existing.symbol == coin.symbol) {
                Some(existing) => *existing = coin,
                None => coins.push(coin),
            }
        });
        Ok(())
    }

    /// Catalog keyed by symbol, carrying each coin's name and catalog price.
    pub fn price_listing(&self) -> PriceListing {
        self.coins.with(|coins| {
            coins
                .iter()
                .map(|coin| {
                    let price = CoinPrice {
                        name: coin.name.clone(),
                        price: coin.price,
                    };
                    (coin.symbol.clone(), price)
                })
                .collect()
        })
    }

    /// Price a coin from an order book snapshot: the average ask becomes the
    /// catalog price and the price map entry for the symbol.
    #[instrument(skip(self, book), fields(last_update_id = book.last_update_id))]
    pub fn apply_order_book(
        &self,
        request: &CoinPutRequest,
        book: &OrderBookSnapshot,
    ) -> StoreResult<CoinPrice> {
        let symbol = Symbol::new(request.symbol.as_str())?;
        let price = book.average_ask()?;

        let coin = Coin::new(request.name.as_str(), symbol.clone(), price);
        let listing = CoinPrice {
            name: coin.name.clone(),
            price,
        };
        self.put_coin(coin)?;
        self.set_price(symbol, price);
        info!("Priced {} at {}", request.symbol, price);
        Ok(listing)
    }

    /// Price every coin of the request from the order book of its symbol, in
    /// request order, then list the catalog.
    ///
    /// Stops at the first coin that fails. Coins before it stay applied.
    #[instrument(skip_all, fields(coins = request.coins.len()))]
    pub fn apply_coins_put(
        &self,
        request: &CoinsPutRequest,
        books: &HashMap<Symbol, OrderBookSnapshot>,
    ) -> StoreResult<PriceListing> {
        for coin in &request.coins {
            let symbol = Symbol::new(coin.symbol.as_str())?;
            let book = books
                .get(&symbol)
                .ok_or_else(|| StoreError::MissingOrderBook(symbol.to_string()))?;
            self.apply_order_book(coin, book)?;
        }
        Ok(self.price_listing())
    }

    /// Append a purchase to an existing holder. The coin must be in the catalog.
    #[instrument(skip(self))]
    pub fn post_transaction(&self, request: TransactionRequest) -> StoreResult<()> {
        let known = self
            .coins
            .with(|coins| coins.iter().any(|coin| coin.name == request.coin));
        if !known {
            warn!("Rejected transaction for unknown coin {}", request.coin);
            return Err(StoreError::UnknownCoin(request.coin.to_string()));
        }

        let transaction = Transaction {
            coin: request.coin,
            buy: request.amount,
            price: request.price,
        };
        let added = self.holders.update_if(|holders| {
            match holders.iter_mut().find(|holder| holder.name == request.username) {
                Some(holder) => {
                    holder.transactions.push(transaction);
                    true
                }
                None => false,
            }
        });

        if added {
            info!("Added transaction for {}", request.username);
            Ok(())
        } else {
            warn!("Rejected transaction for unknown holder {}", request.username);
            Err(StoreError::UnknownHolder(request.username))
        }
    }

    /// Add a user, or update the names of an existing one keeping their coins.
    #[instrument(skip(self))]
    pub fn put_user(&self, request: UserPutRequest) -> StoreResult<()> {
        if request.username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }

        self.users.update(|users| {
            match users
                .iter_mut()
                .find(|user| user.username == request.username)
            {
                Some(user) => {
                    info!("Updating user {}", request.username);
                    user.first_name = request.first_name;
                    user.last_name = request.last_name;
                }
                None => {
                    info!("Adding user {}", request.username);
                    users.push(User::from(request));
                }
            }
        });
        Ok(())
    }

    /// Quantity held per coin for one holder, joined against the current catalog.
    pub fn holdings(&self, holder: &str) -> StoreResult<Vec<CoinBalance>> {
        let coins = self.coins.get();
        self.holders.with(|holders| {
            holders
                .iter()
                .find(|h| h.name == holder)
                .map(|h| h.balances(&coins))
                .ok_or_else(|| StoreError::UnknownHolder(holder.to_string()))
        })
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            taken_at: Utc::now(),
            page: self.page.get(),
            prices: self.prices.get(),
            coins: self.coins.get(),
            holders: self.holders.get(),
            users: self.users.get(),
        }
    }
}
