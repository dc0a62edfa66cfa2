//! HTTP client for the CoinMarketCap API.

use async_trait::async_trait;
use cmcbot_core::{
    ListingsRequest, MarketDataProvider, ProviderError, QuoteRequest, RankedEntry, TickerSnapshot,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::models::{Asset, Envelope, QuoteData};

pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

const QUOTES_PATH: &str = "/v1/cryptocurrency/quotes/latest";
const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";

/// CoinMarketCap client. Cheap to clone (shares the reqwest connection pool).
#[derive(Debug, Clone)]
pub struct CoinMarketCapClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CoinMarketCapClient {
    /// Client against the public CoinMarketCap endpoint. An empty key sends no key header.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Client against another base URL (sandbox or mock server). A trailing `/` is ignored.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `path` with `query` and decodes the envelope's `data`.
    /// Non-2xx statuses and non-zero `status.error_code` become [`ProviderError::Api`].
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).query(query);
        if !self.api_key.is_empty() {
            request = request.header(API_KEY_HEADER, &self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.status)
                .and_then(|s| s.error_message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        if let Some(s) = &envelope.status {
            if s.error_code.unwrap_or(0) != 0 {
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: s.error_message.clone().unwrap_or_default(),
                });
            }
        }

        envelope
            .data
            .ok_or_else(|| ProviderError::Decode("response has no data".to_string()))
    }
}

#[async_trait]
impl MarketDataProvider for CoinMarketCapClient {
    async fn quote(&self, request: &QuoteRequest) -> Result<TickerSnapshot, ProviderError> {
        info!(symbol = %request.symbol, convert = %request.convert, "step: CoinMarketCap quote request");

        let mut data: HashMap<String, QuoteData> = self
            .get(
                QUOTES_PATH,
                &[
                    ("symbol", request.symbol.clone()),
                    ("convert", request.convert.clone()),
                ],
            )
            .await?;

        let asset = data
            .remove(&request.symbol)
            .and_then(QuoteData::into_first)
            .ok_or_else(|| ProviderError::UnknownSymbol(request.symbol.clone()))?;

        debug!(symbol = %asset.symbol, rank = ?asset.cmc_rank, "step: CoinMarketCap quote done");
        Ok(asset.into_snapshot(&request.convert))
    }

    async fn listings(&self, request: &ListingsRequest) -> Result<Vec<RankedEntry>, ProviderError> {
        info!(
            start = request.start,
            limit = request.limit,
            convert = %request.convert,
            "step: CoinMarketCap listings request"
        );

        // The API's `start` is 1-based.
        let data: Vec<Asset> = self
            .get(
                LISTINGS_PATH,
                &[
                    ("start", (request.start + 1).to_string()),
                    ("limit", request.limit.to_string()),
                    ("convert", request.convert.clone()),
                ],
            )
            .await?;

        debug!(count = data.len(), "step: CoinMarketCap listings done");
        Ok(data
            .into_iter()
            .map(|asset| asset.into_ranked_entry(&request.convert))
            .collect())
    }
}
