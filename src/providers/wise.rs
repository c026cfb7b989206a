use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::{REQUEST_TIMEOUT, USER_AGENT};
use crate::rate_provider::{ExchangeRate, RateProvider};

// WiseRateProvider implementation for RateProvider
pub struct WiseRateProvider {
    base_url: String,
    api_key: String,
}

impl WiseRateProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        WiseRateProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RateRecord {
    rate: f64,
    source: String,
    target: String,
}

#[async_trait]
impl RateProvider for WiseRateProvider {
    #[instrument(
        name = "WiseRateFetch",
        skip(self),
        fields(source = %source, target = %target)
    )]
    async fn fetch_rate(&self, source: &str, target: &str) -> Result<ExchangeRate> {
        let url = format!(
            "{}/v1/rates?source={}&target={}",
            self.base_url, source, target
        );
        debug!("Requesting exchange rate from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for currency pair {}/{}", e, source, target))?;

        // The rates endpoint answers 200 on success, nothing else counts.
        if response.status() != StatusCode::OK {
            return Err(anyhow!(
                "HTTP error: {} from exchange rate API",
                response.status()
            ));
        }

        let text = response.text().await?;

        let mut records: Vec<RateRecord> = serde_json::from_str(&text).map_err(|e| {
            anyhow!(
                "Failed to parse exchange rate response for {}/{}: {}",
                source,
                target,
                e
            )
        })?;

        if records.len() != 1 {
            return Err(anyhow!(
                "Expected one exchange rate, received {}",
                records.len()
            ));
        }
        let record = records.remove(0);

        debug!(rate = record.rate, "Received exchange rate");

        Ok(ExchangeRate {
            rate: record.rate,
            source: record.source,
            target: record.target,
        })
    }
}
