use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tokio::sync::Notify;

use crate::errors::IntervalError;

/// Single source of truth for the emission period.
///
/// Read by the emitter loop once per cycle, written by command handlers,
/// potentially concurrently. Updates are last-write-wins. Every successful
/// `set` raises a wake signal so a wait already in flight is abandoned
/// early. The signal is a single stored permit: a `set` with nobody waiting
/// leaves the permit for the next wait (no lost wakeup), repeated `set`s
/// collapse into one permit, and a wait consumes the permit exactly once,
/// so one update never leaks into later, unrelated waits.
#[derive(Debug)]
pub struct IntervalStore {
    seconds: AtomicU64,
    wake: Notify,
}

impl IntervalStore {
    /// Creates a store seeded with the startup default, validated like any
    /// later update.
    pub fn new(seconds: i64) -> Result<Self, IntervalError> {
        if seconds <= 0 {
            return Err(IntervalError::NotPositive(seconds));
        }

        Ok(Self { seconds: AtomicU64::new(seconds as u64), wake: Notify::new() })
    }

    /// Current wait duration between emissions.
    pub fn get(&self) -> Duration {
        Duration::from_secs(self.secs())
    }

    /// Current period in whole seconds.
    pub fn secs(&self) -> u64 {
        self.seconds.load(Ordering::Relaxed)
    }

    /// Replaces the period and wakes the emitter if it is mid-wait.
    ///
    /// Rejects non-positive values and leaves the store untouched. The new
    /// value governs the next wait; an in-flight send is never cancelled.
    pub fn set(&self, seconds: i64) -> Result<(), IntervalError> {
        if seconds <= 0 {
            return Err(IntervalError::NotPositive(seconds));
        }

        self.seconds.store(seconds as u64, Ordering::Relaxed);
        self.wake.notify_one();
        Ok(())
    }

    /// Resolves once a `set` has landed since the last consumed wake.
    pub async fn changed(&self) {
        self.wake.notified().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::time::timeout;

    use super::*;

    #[test]
    fn test_new_rejects_non_positive_default() {
        assert_eq!(IntervalStore::new(0).unwrap_err(), IntervalError::NotPositive(0));
        assert_eq!(IntervalStore::new(-30).unwrap_err(), IntervalError::NotPositive(-30));
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let store = IntervalStore::new(300).unwrap();

        store.set(30).unwrap();

        assert_eq!(store.secs(), 30);
        assert_eq!(store.get(), Duration::from_secs(30));
    }

    #[test]
    fn test_rejected_set_leaves_value_unchanged() {
        let store = IntervalStore::new(300).unwrap();

        assert!(store.set(0).is_err());
        assert!(store.set(-5).is_err());

        assert_eq!(store.secs(), 300);
    }

    #[tokio::test]
    async fn test_set_before_wait_is_not_lost() {
        let store = IntervalStore::new(300).unwrap();

        store.set(60).unwrap();

        // The pending permit must complete a wait that only starts afterwards.
        timeout(Duration::from_millis(100), store.changed()).await.expect("wake signal was lost");
    }

    #[tokio::test]
    async fn test_wake_signal_consumed_exactly_once() {
        let store = IntervalStore::new(300).unwrap();

        // Two sets with no waiter collapse into a single permit.
        store.set(60).unwrap();
        store.set(90).unwrap();

        timeout(Duration::from_millis(100), store.changed()).await.expect("wake signal was lost");

        // No further set happened: the next wait must block.
        let second = timeout(Duration::from_millis(100), store.changed()).await;
        assert!(second.is_err(), "wake signal leaked into an unrelated wait");
    }

    #[tokio::test]
    async fn test_set_wakes_parked_waiter() {
        let store = Arc::new(IntervalStore::new(300).unwrap());

        let waiter = {
            let store = store.clone();
            tokio::spawn(async move { store.changed().await })
        };

        // Let the waiter park before signalling.
        tokio::time::sleep(Duration::from_millis(50)).await;
        store.set(1).unwrap();

        timeout(Duration::from_secs(1), waiter).await.expect("waiter never woke").unwrap();
    }

    #[test]
    fn test_concurrent_sets_settle_on_one_written_value() {
        let store = Arc::new(IntervalStore::new(300).unwrap());

        let handles: Vec<_> = (1..=8)
            .map(|n| {
                let store = store.clone();
                std::thread::spawn(move || store.set(n * 10).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let secs = store.secs() as i64;
        assert!((1..=8).map(|n| n * 10).any(|v| v == secs), "unexpected value {secs}");
    }
}
