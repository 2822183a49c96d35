use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid symbol {0:?}: expected uppercase letters and digits")]
    InvalidSymbol(String),

    #[error("Unknown coin: {0}")]
    UnknownCoin(String),

    #[error("Unknown holder: {0}")]
    UnknownHolder(String),

    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Username {0} already exists")]
    DuplicateUsername(String),

    #[error("Symbol {0} appears more than once in the coin catalog")]
    DuplicateSymbol(String),

    #[error("Coin name {0} is already used by another symbol")]
    DuplicateCoinName(String),

    #[error("Coin {0} is named by holder transactions and cannot be renamed")]
    CoinInUse(String),

    #[error("Holder {0} appears more than once")]
    DuplicateHolder(String),

    #[error("No order book supplied for {0}")]
    MissingOrderBook(String),

    #[error("Order book has no asks")]
    EmptyOrderBook,

    #[error("Failed to read seed file: {0}")]
    SeedRead(#[from] std::io::Error),

    #[error("Failed to parse seed: {0}")]
    SeedParse(#[from] serde_json::Error),
}
