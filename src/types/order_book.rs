//! Market depth snapshot used to price a coin
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::error::{StoreError, StoreResult};

/// `(price, quantity)`
pub type Level = (f64, f64);

/// Order book as returned by the exchange depth endpoint. Levels arrive as
/// `[["4500.10", "0.25"], ...]`; plain numbers are accepted as well.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    #[serde(rename = "lastUpdateId")]
    pub last_update_id: i64,
    #[serde_as(as = "Vec<(PickFirst<(_, DisplayFromStr)>, PickFirst<(_, DisplayFromStr)>)>")]
    pub bids: Vec<Level>,
    #[serde_as(as = "Vec<(PickFirst<(_, DisplayFromStr)>, PickFirst<(_, DisplayFromStr)>)>")]
    pub asks: Vec<Level>,
}

impl OrderBookSnapshot {
    /// Mean of the ask prices, unweighted by quantity.
    pub fn average_ask(&self) -> StoreResult<f64> {
        if self.asks.is_empty() {
            return Err(StoreError::EmptyOrderBook);
        }
        let sum: f64 = self.asks.iter().map(|(price, _)| price).sum();
        Ok(sum / self.asks.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_exchange_depth_payload() {
        let payload = json!({
            "lastUpdateId": 1027024,
            "bids": [["4.00000000", "431.00000000"]],
            "asks": [["4.00000200", "12.00000000"], ["4.00000400", "3.00000000"]]
        });

        let book: OrderBookSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(book.last_update_id, 1027024);
        assert_eq!(book.bids, vec![(4.0, 431.0)]);
        assert_eq!(book.asks.len(), 2);
        assert_eq!(book.asks[1], (4.000004, 3.0));
    }

    #[test]
    fn parses_numeric_levels() {
        let payload = json!({"lastUpdateId": 7, "bids": [], "asks": [[10.0, 1.0], [20.0, 2.0]]});
        let book: OrderBookSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(book.average_ask().unwrap(), 15.0);
    }

    #[test]
    fn average_ask_of_empty_book_fails() {
        let book = OrderBookSnapshot {
            last_update_id: 1,
            bids: vec![(1.0, 1.0)],
            asks: vec![],
        };
        assert!(matches!(book.average_ask(), Err(StoreError::EmptyOrderBook)));
    }
}
