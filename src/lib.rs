pub mod config;
pub mod log;
pub mod notifier;
pub mod providers;
pub mod rate_provider;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::{AppConfig, SOURCE_CURRENCY, TARGET_CURRENCY};
use crate::notifier::RateNotifier;
use crate::providers::slack::{MessageOptions, SlackNotifier};
use crate::providers::wise::WiseRateProvider;
use crate::rate_provider::RateProvider;

pub async fn run(config: &AppConfig) -> Result<()> {
    info!("Exchange rate notifier starting...");

    let provider = WiseRateProvider::new(&config.rates_base_url, &config.api_key);
    let notifier = SlackNotifier::new(&config.webhook_url, MessageOptions::default());

    fetch_and_notify(&provider, &notifier).await
}

/// Runs one fetch-then-notify sequence. A failed fetch returns immediately,
/// the notifier is only reached with a rate in hand.
pub async fn fetch_and_notify(
    provider: &dyn RateProvider,
    notifier: &dyn RateNotifier,
) -> Result<()> {
    let rate = provider.fetch_rate(SOURCE_CURRENCY, TARGET_CURRENCY).await?;
    debug!(
        rate = rate.rate,
        source = %rate.source,
        target = %rate.target,
        "Fetched exchange rate"
    );

    notifier.notify(&rate).await
}
