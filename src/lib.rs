//! Reactive stores for a crypto portfolio tracker: navigation, prices, the coin
//! catalog, holders with their purchases and users with their balances.

pub mod config;
pub mod constant;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use seed::Seed;
pub use store::{
    app::{AppStore, StoreSnapshot},
    derived, Readable, StoreReceiver, Subscribe, Writable,
};
