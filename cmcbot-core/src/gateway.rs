//! Market-data gateway: the two lookups the bot performs against a price provider.
//!
//! [`MarketDataProvider`] is the raw provider seam (one request shape per endpoint);
//! [`MarketDataGateway`] fixes the quote currency and offset, canonicalizes symbols and orders rankings.
//! No caching, no retry; a provider failure is returned as-is.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::ProviderError;
use crate::types::{RankedEntry, RankedList, TickerSnapshot};

/// Currency every quote is converted to.
pub const QUOTE_CURRENCY: &str = "USD";

/// Single-symbol quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub symbol: String,
    pub convert: String,
}

/// Top-N ranked request. `start` is a zero-based offset into the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsRequest {
    pub start: u32,
    pub limit: u32,
    pub convert: String,
}

/// Price-data provider. Implementations map to one HTTP API (e.g. CoinMarketCap).
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Quote for one symbol.
    async fn quote(&self, request: &QuoteRequest) -> Result<TickerSnapshot, ProviderError>;
    /// Ranked assets, in any order; the gateway sorts and truncates.
    async fn listings(&self, request: &ListingsRequest) -> Result<Vec<RankedEntry>, ProviderError>;
}

/// Gateway over a [`MarketDataProvider`]. Cheap to clone.
#[derive(Clone)]
pub struct MarketDataGateway {
    provider: Arc<dyn MarketDataProvider>,
}

impl MarketDataGateway {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Snapshot for `symbol` in USD. The symbol is trimmed and uppercased before the request.
    #[instrument(skip(self))]
    pub async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, ProviderError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ProviderError::UnknownSymbol(symbol));
        }
        let request = QuoteRequest {
            symbol,
            convert: QUOTE_CURRENCY.to_string(),
        };
        let ticker = self.provider.quote(&request).await?;
        debug!(symbol = %ticker.symbol, rank = ticker.rank, "step: ticker fetched");
        Ok(ticker)
    }

    /// Top `limit` assets in USD from offset 0, ascending by rank.
    #[instrument(skip(self))]
    pub async fn fetch_top(&self, limit: u32) -> Result<RankedList, ProviderError> {
        let request = ListingsRequest {
            start: 0,
            limit,
            convert: QUOTE_CURRENCY.to_string(),
        };
        let entries = self.provider.listings(&request).await?;
        let list = RankedList::new(limit, entries);
        debug!(limit, count = list.len(), "step: top list fetched");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records requests and answers from canned data.
    struct FakeProvider {
        quotes: Mutex<Vec<QuoteRequest>>,
        listings: Mutex<Vec<ListingsRequest>>,
        fail: bool,
    }

    impl FakeProvider {
        fn new(fail: bool) -> Self {
            Self {
                quotes: Mutex::new(Vec::new()),
                listings: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for FakeProvider {
        async fn quote(&self, request: &QuoteRequest) -> Result<TickerSnapshot, ProviderError> {
            self.quotes.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(ProviderError::Http("connection refused".to_string()));
            }
            Ok(TickerSnapshot {
                symbol: request.symbol.clone(),
                name: "Bitcoin".to_string(),
                rank: 1,
                price: 1.0,
                market_cap: 2.0,
                circulating_supply: 3.0,
                percent_change_24h: 4.0,
                percent_change_7d: 5.0,
            })
        }

        async fn listings(
            &self,
            request: &ListingsRequest,
        ) -> Result<Vec<RankedEntry>, ProviderError> {
            self.listings.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(ProviderError::Decode("unexpected end of input".to_string()));
            }
            // Deliberately unordered and longer than asked for.
            Ok((1..=request.limit + 2)
                .rev()
                .map(|rank| RankedEntry {
                    rank,
                    symbol: format!("C{}", rank),
                    price: rank as f64,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_fetch_ticker_uppercases_and_converts_to_usd() {
        let provider = Arc::new(FakeProvider::new(false));
        let gateway = MarketDataGateway::new(provider.clone());

        let ticker = gateway.fetch_ticker(" btc ").await.unwrap();

        assert_eq!(ticker.symbol, "BTC");
        let requests = provider.quotes.lock().unwrap();
        assert_eq!(
            *requests,
            vec![QuoteRequest {
                symbol: "BTC".to_string(),
                convert: "USD".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_fetch_ticker_failure_is_provider_error() {
        let gateway = MarketDataGateway::new(Arc::new(FakeProvider::new(true)));
        let err = gateway.fetch_ticker("xyz").await.unwrap_err();
        assert!(matches!(err, ProviderError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_ticker_blank_symbol_skips_provider() {
        let provider = Arc::new(FakeProvider::new(false));
        let gateway = MarketDataGateway::new(provider.clone());
        assert!(gateway.fetch_ticker("   ").await.is_err());
        assert!(provider.quotes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_top_sorted_and_bounded() {
        let provider = Arc::new(FakeProvider::new(false));
        let gateway = MarketDataGateway::new(provider.clone());

        for limit in [5u32, 10, 50, 100] {
            let list = gateway.fetch_top(limit).await.unwrap();
            assert_eq!(list.limit, limit);
            assert!(list.len() <= limit as usize);
            assert!(list.entries.windows(2).all(|w| w[0].rank < w[1].rank));
            assert_eq!(list.entries[0].rank, 1);
        }

        let requests = provider.listings.lock().unwrap();
        assert!(requests.iter().all(|r| r.start == 0 && r.convert == "USD"));
    }

    #[tokio::test]
    async fn test_fetch_top_failure_is_provider_error() {
        let gateway = MarketDataGateway::new(Arc::new(FakeProvider::new(true)));
        assert!(matches!(
            gateway.fetch_top(10).await,
            Err(ProviderError::Decode(_))
        ));
    }
}
