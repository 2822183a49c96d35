//! Represents an owner of crypto assets by current balance rather than purchase history
use serde::{Deserialize, Serialize};

use super::coin::CoinBalance;

/// Each user carries how much of each coin they own, with the display name and price
/// already joined in so readers don't have to look anything up.
///
/// `coins` only comes from a seed: no store operation adds balances to a user, and
/// `AppStore::put_user` leaves existing balances untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub coins: Vec<CoinBalance>,
}

/// Adds a user, or updates first_name and last_name when the username already exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPutRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserPutRequest> for User {
    fn from(request: UserPutRequest) -> Self {
        User {
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            coins: Vec::new(),
        }
    }
}
