use sig_core::DEFAULT_INTERVAL_SECS;
use teloxide::types::ChatId;
use url::Url;

/// Runtime configuration loaded from environment variables
pub struct BotConfig {
    /// Group chat that receives the periodic signals
    pub group: ChatId,
    /// Interval the emitter starts with, in seconds
    pub default_interval_secs: i64,
    /// When set, the bot receives updates over a webhook instead of polling
    pub webhook_url: Option<Url>,
    /// Port the webhook/health server binds to
    pub port: u16,
}

impl BotConfig {
    /// Load configuration from the environment.
    ///
    /// `GROUP_ID` is required. `DEFAULT_INTERVAL` falls back to 300 seconds
    /// and `PORT` to 8080 when unset or unparseable. Setting `WEBHOOK_URL`
    /// switches update delivery from long polling to a webhook.
    pub fn from_env() -> anyhow::Result<Self> {
        let group_raw =
            std::env::var("GROUP_ID").map_err(|_| anyhow::anyhow!("GROUP_ID environment variable is not set"))?;
        let group = group_raw
            .trim()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|err| anyhow::anyhow!("Failed to parse GROUP_ID {group_raw:?}: {err}"))?;

        let default_interval_secs =
            std::env::var("DEFAULT_INTERVAL").ok().and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_INTERVAL_SECS);

        let webhook_url = match std::env::var("WEBHOOK_URL") {
            Ok(raw) => {
                Some(Url::parse(&raw).map_err(|err| anyhow::anyhow!("Failed to parse WEBHOOK_URL {raw:?}: {err}"))?)
            }
            Err(_) => None,
        };

        let port = std::env::var("PORT").ok().and_then(|s| s.parse().ok()).unwrap_or(8080);

        Ok(Self { group, default_interval_secs, webhook_url, port })
    }
}
