//! Exchange rate lookup abstractions.

use anyhow::Result;
use async_trait::async_trait;

/// A single exchange rate quote for a currency pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub rate: f64,
    pub source: String,
    pub target: String,
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rate(&self, source: &str, target: &str) -> Result<ExchangeRate>;
}
