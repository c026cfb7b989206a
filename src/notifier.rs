//! Outbound notification abstractions.

use crate::rate_provider::ExchangeRate;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RateNotifier: Send + Sync {
    async fn notify(&self, rate: &ExchangeRate) -> Result<()>;
}
