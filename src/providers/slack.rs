use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::{REQUEST_TIMEOUT, USER_AGENT};
use crate::notifier::RateNotifier;
use crate::rate_provider::ExchangeRate;

/// Presentation metadata attached to every webhook message.
#[derive(Debug, Clone)]
pub struct MessageOptions {
    pub username: String,
    pub icon_emoji: String,
    pub channel: String,
}

impl Default for MessageOptions {
    fn default() -> Self {
        MessageOptions {
            username: "TransferwiseBot".to_string(),
            icon_emoji: ":moneybag:".to_string(),
            channel: "transferwise".to_string(),
        }
    }
}

/// Incoming-webhook payload. Unset fields are left out of the JSON body.
#[derive(Debug, Serialize)]
struct SlackMessage {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    /// URL for the bot avatar, mutually exclusive with `icon_emoji`
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,
    /// Emoji for the bot avatar, i.e. `:ghost:`
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    /// Text summary of attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
    /// Appears above formatted data
    #[serde(skip_serializing_if = "Option::is_none")]
    pretext: Option<String>,
    /// Attachment color, i.e. `#36a64f`, `good`, `warning`, `danger`
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    /// Displayed in a table on the message
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<SlackMessageField>,
}

#[derive(Debug, Serialize)]
struct SlackMessageField {
    title: String,
    value: String,
    short: bool,
}

fn format_rate_message(rate: f64) -> String {
    format!("The exchange rate is {rate:.5}")
}

// SlackNotifier implementation for RateNotifier
pub struct SlackNotifier {
    webhook_url: String,
    options: MessageOptions,
}

impl SlackNotifier {
    pub fn new(webhook_url: &str, options: MessageOptions) -> Self {
        SlackNotifier {
            webhook_url: webhook_url.to_string(),
            options,
        }
    }

    fn build_message(&self, rate: &ExchangeRate) -> SlackMessage {
        SlackMessage {
            text: format_rate_message(rate.rate),
            username: Some(self.options.username.clone()),
            icon_url: None,
            icon_emoji: Some(self.options.icon_emoji.clone()),
            channel: Some(self.options.channel.clone()),
            fallback: None,
            pretext: None,
            color: None,
            fields: Vec::new(),
        }
    }
}

#[async_trait]
impl RateNotifier for SlackNotifier {
    #[instrument(name = "SlackNotify", skip(self, rate))]
    async fn notify(&self, rate: &ExchangeRate) -> Result<()> {
        let message = self.build_message(rate);
        let body =
            serde_json::to_string(&message).context("Failed to serialize Slack message")?;
        debug!("Posting message to Slack webhook");

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for Slack webhook", e))?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!(
                "HTTP error: {} from Slack webhook",
                response.status()
            ));
        }

        debug!("Slack webhook accepted the message");
        Ok(())
    }
}
