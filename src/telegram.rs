use std::time::Duration;

use serde_json::json;
use tracing::{debug, instrument};

use crate::error::{Result, ScoutError};

const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Notification delivery gives up after this long.
pub const NOTIFIER_TIMEOUT: Duration = Duration::from_secs(20);

/// Sends Markdown-formatted messages to a fixed Telegram chat.
///
/// Delivery is best-effort: the caller logs failures and moves on; the
/// run's exit status is never affected by a failed send.
pub struct TelegramNotifier {
    http: reqwest::Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a notifier with [`NOTIFIER_TIMEOUT`] applied.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(NOTIFIER_TIMEOUT)
            .build()
            .map_err(ScoutError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: TELEGRAM_BASE_URL.to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    /// Point the notifier at a different API root. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Deliver `text` to the configured chat.
    #[instrument(skip(self, text))]
    pub async fn send(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        // Keep the bot token out of error text and logs.
        let display_url = format!("{}/bot***/sendMessage", self.base_url);
        let payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ScoutError::Http {
                url: display_url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::UnexpectedStatus {
                url: display_url,
                status,
            });
        }
        debug!(chars = text.chars().count(), "notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_send_posts_markdown_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/botsecret-token/sendMessage")
            .match_body(Matcher::Json(json!({
                "chat_id": "-100123",
                "text": "📊 report",
                "parse_mode": "Markdown",
            })))
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let notifier = TelegramNotifier::new("secret-token", "-100123")
            .unwrap()
            .with_base_url(server.url());
        notifier.send("📊 report").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_surfaces_delivery_failure_without_token() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/botsecret-token/sendMessage")
            .with_status(403)
            .create_async()
            .await;

        let notifier = TelegramNotifier::new("secret-token", "-100123")
            .unwrap()
            .with_base_url(server.url());
        let err = notifier.send("report").await.unwrap_err();

        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(!text.contains("secret-token"));
    }
}
