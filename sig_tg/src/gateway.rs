use std::convert::Infallible;
use std::net::SocketAddr;

use axum::routing::get;
use teloxide::prelude::*;
use teloxide::update_listeners::UpdateListener;
use teloxide::update_listeners::webhooks;
use tokio::net::TcpListener;
use url::Url;

/// Answered on `GET /` so hosting platforms can probe the process.
pub const HEALTH_TEXT: &str = "Elite Quotex Signal Bot is running.";

/// Register the webhook with Telegram and serve it together with the
/// health route.
///
/// The axum server runs in a background task; its graceful shutdown is
/// tied to the listener's stop flag, so stopping the dispatcher also
/// stops the server. `url` must be the public HTTPS address Telegram
/// should deliver updates to, path included.
pub async fn webhook_listener(
    bot: Bot,
    url: Url,
    port: u16,
) -> anyhow::Result<impl UpdateListener<Err = Infallible>> {
    let address = SocketAddr::from(([0, 0, 0, 0], port));

    let (mut listener, stop_flag, bot_router) = webhooks::axum_to_router(bot, webhooks::Options::new(address, url)).await?;
    let router = bot_router.route("/", get(|| async { HEALTH_TEXT }));

    let stop_token = listener.stop_token();
    tokio::spawn(async move {
        let tcp_listener = match TcpListener::bind(address).await {
            Ok(tcp_listener) => tcp_listener,
            Err(err) => {
                tracing::error!("Failed to bind webhook server to {address}: {err}");
                stop_token.stop();
                return;
            }
        };

        tracing::info!("Webhook server listening on {address}");
        if let Err(err) = axum::serve(tcp_listener, router).with_graceful_shutdown(stop_flag).await {
            tracing::error!("Webhook server error: {err}");
            stop_token.stop();
        }
    });

    Ok(listener)
}
