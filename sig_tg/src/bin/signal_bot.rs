use std::sync::Arc;

use sig_core::Emitter;
use sig_core::IntervalStore;
use sig_tg::BotConfig;
use sig_tg::Command;
use sig_tg::TelegramSink;
use sig_tg::handle_command;
use sig_tg::webhook_listener;
use teloxide::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialise bot
    let bot = Bot::from_env();
    let config = BotConfig::from_env()?;
    let store = Arc::new(IntervalStore::new(config.default_interval_secs)?);
    tracing::info!("Signal bot initialised, target group {}, default interval {}s", config.group, store.secs());

    // Spawn the signal emitter
    let sink = TelegramSink::new(bot.clone(), config.group);
    tokio::spawn(Emitter::new(sink, store.clone()).run());

    // Build command handler
    let handler = Update::filter_message().filter_command::<Command>().endpoint({
        let store = store.clone();
        let group = config.group;
        move |bot: Bot, msg: Message, cmd: Command| {
            let store = store.clone();
            async move { handle_command(bot, msg, cmd, store, group).await }
        }
    });

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler).enable_ctrlc_handler().build();

    match config.webhook_url {
        Some(url) => {
            tracing::info!("Starting dispatcher on webhook {url}");
            let listener = webhook_listener(bot, url, config.port).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            tracing::info!("WEBHOOK_URL not set, starting dispatcher with long polling");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
