//! Market data values returned by the gateway. Built per reply and discarded after formatting.

use serde::{Deserialize, Serialize};

/// Snapshot of one asset quoted in the gateway's quote currency.
/// Numeric fields the provider leaves out are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    /// Canonical uppercase symbol, e.g. `BTC`.
    pub symbol: String,
    pub name: String,
    pub rank: u32,
    pub price: f64,
    pub market_cap: f64,
    pub circulating_supply: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
}

/// One line of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub symbol: String,
    pub price: f64,
}

/// Top-N ranking, ascending by rank, at most `limit` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedList {
    pub limit: u32,
    pub entries: Vec<RankedEntry>,
}

impl RankedList {
    /// Orders `entries` by rank and keeps at most `limit` of them.
    pub fn new(limit: u32, mut entries: Vec<RankedEntry>) -> Self {
        entries.sort_by_key(|e| e.rank);
        entries.truncate(limit as usize);
        Self { limit, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
