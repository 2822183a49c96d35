pub mod pages {
    pub const LANDING: &str = "landing";
}

pub mod store_names {
    pub const PAGE: &str = "page";
    pub const PRICES: &str = "prices";
    pub const COINS: &str = "coins";
    pub const HOLDERS: &str = "holders";
    pub const USERS: &str = "users";
}

pub mod env_keys {
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const SEED_PATH: &str = "SEED_PATH";
}
