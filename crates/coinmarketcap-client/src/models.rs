//! Wire types of the CoinMarketCap API responses.

use cmcbot_core::{RankedEntry, TickerSnapshot};
use serde::Deserialize;
use std::collections::HashMap;

/// `status` block present in every response, success or not.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct Status {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Response envelope: `{"status": {...}, "data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub status: Option<Status>,
    pub data: Option<T>,
}

/// Quote of an asset in one currency. Any field may be null.
#[derive(Debug, Deserialize, Default, Clone)]
pub(crate) struct Quote {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
}

/// Asset entry of both endpoints.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Asset {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub cmc_rank: Option<u32>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub quote: HashMap<String, Quote>,
}

/// Quotes endpoint data: one object per symbol (v1) or a list per symbol (v2 and later).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum QuoteData {
    One(Asset),
    Many(Vec<Asset>),
}

impl QuoteData {
    /// First asset listed for the symbol (v2 orders duplicates by rank).
    pub fn into_first(self) -> Option<Asset> {
        match self {
            QuoteData::One(asset) => Some(asset),
            QuoteData::Many(assets) => assets.into_iter().next(),
        }
    }
}

impl Asset {
    fn quote_in(&self, convert: &str) -> Quote {
        self.quote.get(convert).cloned().unwrap_or_default()
    }

    pub fn into_snapshot(self, convert: &str) -> TickerSnapshot {
        let quote = self.quote_in(convert);
        TickerSnapshot {
            symbol: self.symbol.to_uppercase(),
            name: self.name,
            rank: self.cmc_rank.unwrap_or(0),
            price: quote.price.unwrap_or(0.0),
            market_cap: quote.market_cap.unwrap_or(0.0),
            circulating_supply: self.circulating_supply.unwrap_or(0.0),
            percent_change_24h: quote.percent_change_24h.unwrap_or(0.0),
            percent_change_7d: quote.percent_change_7d.unwrap_or(0.0),
        }
    }

    pub fn into_ranked_entry(self, convert: &str) -> RankedEntry {
        let price = self.quote_in(convert).price.unwrap_or(0.0);
        RankedEntry {
            rank: self.cmc_rank.unwrap_or(0),
            symbol: self.symbol,
            price,
        }
    }
}
