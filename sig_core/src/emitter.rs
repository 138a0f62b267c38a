use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::time::sleep;

use crate::errors::SinkError;
use crate::interval::IntervalStore;
use crate::signal::Signal;

/// Outbound channel delivering one rendered signal message.
///
/// Delivery is best effort: the loop reports failures and moves on, it
/// never retries. The implementation owns its destination; the loop does
/// not know where messages go.
#[async_trait]
pub trait SignalSink: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<(), SinkError>;
}

/// The background emission loop.
///
/// Launched once at startup and coupled to the process lifetime: there is
/// no cooperative stop, only process shutdown ends it. Each cycle composes
/// a fresh random signal, hands it to the sink and waits for the current
/// interval. A `set` on the store interrupts the wait; the loop re-enters
/// the compose step immediately, and the new period governs the following
/// wait rather than the one just cut short.
pub struct Emitter<S> {
    sink: S,
    store: Arc<IntervalStore>,
}

impl<S: SignalSink> Emitter<S> {
    pub fn new(sink: S, store: Arc<IntervalStore>) -> Self {
        Self { sink, store }
    }

    pub async fn run(self) {
        tracing::info!("Signal loop started, interval {}s", self.store.secs());

        loop {
            let signal = Signal::draw(&mut rand::rng(), OffsetDateTime::now_utc());
            let text = signal.to_message();

            tracing::info!("Emitting signal: {} {}", signal.asset, signal.direction);
            if let Err(err) = self.sink.deliver(&text).await {
                tracing::error!("Failed to deliver signal: {err}");
            }

            let interval = self.store.get();
            tokio::select! {
                () = sleep(interval) => {}
                () = self.store.changed() => {
                    tracing::info!("Interval changed to {}s mid-wait, rescheduling", self.store.secs());
                }
            }
        }
    }
}
