//! Janitor Task
//!
//! Background task that periodically sweeps expired cache entries, bounding
//! the cost of lazy expiration checks on the hot read path.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::cache::{current_timestamp_ms, CacheStore};

// == Janitor ==
/// Long-lived sweeper with an explicit start/stop lifecycle.
///
/// `start` is idempotent; `stop` signals termination and waits for the
/// current iteration to finish, so no sweep is left half-applied after
/// shutdown.
pub struct Janitor {
    /// Shared cache handle, same lock discipline as the HTTP handlers
    cache: Arc<RwLock<CacheStore>>,
    /// Interval between sweeps
    interval: Duration,
    /// Handle of the running sweep loop, if any
    handle: Option<JoinHandle<()>>,
    /// Stop signal for the running loop
    stop_tx: Option<watch::Sender<bool>>,
}

impl Janitor {
    // == Constructor ==
    /// Creates a janitor for the given store. Does not start sweeping.
    pub fn new(cache: Arc<RwLock<CacheStore>>, interval: Duration) -> Self {
        Self {
            cache,
            interval,
            handle: None,
            stop_tx: None,
        }
    }

    // == Start ==
    /// Launches the sweep loop. No-op if the loop is already running.
    pub fn start(&mut self) {
        if self.handle.as_ref().is_some_and(|handle| !handle.is_finished()) {
            debug!("Janitor already running, start ignored");
            return;
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        let cache = self.cache.clone();
        let interval = self.interval;

        info!("Starting janitor with sweep interval of {:?}", interval);
        self.stop_tx = Some(stop_tx);
        self.handle = Some(tokio::spawn(sweep_loop(cache, interval, stop_rx)));
    }

    // == Stop ==
    /// Signals the loop to terminate and waits for it to quiesce.
    ///
    /// Safe to call when the janitor was never started. A loop that died
    /// abnormally is surfaced here rather than swallowed.
    pub async fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }

        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                error!("Janitor task terminated abnormally: {err}");
            } else {
                info!("Janitor stopped");
            }
        }
    }

    // == Is Running ==
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

// == Sweep Loop ==
/// Ticks until the stop signal fires, sweeping once per interval.
async fn sweep_loop(
    cache: Arc<RwLock<CacheStore>>,
    interval: Duration,
    mut stop_rx: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = stop_rx.changed() => {
                debug!("Janitor received stop signal");
                return;
            }
        }

        let removed = sweep(&cache).await;
        if removed > 0 {
            info!("Sweep removed {} expired entries", removed);
        } else {
            debug!("Sweep found no expired entries");
        }
    }
}

// == Sweep ==
/// One sweep iteration: scan under the read lock, remove under the write
/// lock.
///
/// The scan collects candidates as of a snapshot instant; each removal
/// re-validates expiration at removal time, so a key refreshed by a
/// concurrent `set` between the two phases is never discarded.
async fn sweep(cache: &Arc<RwLock<CacheStore>>) -> usize {
    let asof = current_timestamp_ms();

    let candidates = {
        let store = cache.read().await;
        store.expired_keys(asof)
    };

    if candidates.is_empty() {
        return 0;
    }

    let mut store = cache.write().await;
    candidates
        .into_iter()
        .filter(|key| store.remove_if_expired(key))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_store() -> Arc<RwLock<CacheStore>> {
        Arc::new(RwLock::new(CacheStore::new(100)))
    }

    #[tokio::test]
    async fn test_janitor_removes_expired_entries() {
        let cache = shared_store();

        {
            let mut store = cache.write().await;
            store
                .set("expire_soon".to_string(), "value".to_string(), Some(0.1))
                .unwrap();
        }

        let mut janitor = Janitor::new(cache.clone(), Duration::from_millis(200));
        janitor.start();

        // Entry expires within one sweep interval even with no reads
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(cache.read().await.len(), 0);

        janitor.stop().await;
    }

    #[tokio::test]
    async fn test_janitor_preserves_valid_entries() {
        let cache = shared_store();

        {
            let mut store = cache.write().await;
            store
                .set("long_lived".to_string(), "value".to_string(), Some(3600.0))
                .unwrap();
            store
                .set("forever".to_string(), "value".to_string(), None)
                .unwrap();
        }

        let mut janitor = Janitor::new(cache.clone(), Duration::from_millis(100));
        janitor.start();

        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(cache.read().await.len(), 2);

        janitor.stop().await;
    }

    #[tokio::test]
    async fn test_janitor_start_is_idempotent() {
        let cache = shared_store();
        let mut janitor = Janitor::new(cache, Duration::from_millis(100));

        janitor.start();
        assert!(janitor.is_running());

        // Second start must not spawn a second loop or disturb the first
        janitor.start();
        assert!(janitor.is_running());

        janitor.stop().await;
        assert!(!janitor.is_running());
    }

    #[tokio::test]
    async fn test_janitor_stop_waits_for_quiescence() {
        let cache = shared_store();
        let mut janitor = Janitor::new(cache, Duration::from_millis(50));

        janitor.start();
        tokio::time::sleep(Duration::from_millis(120)).await;

        janitor.stop().await;
        assert!(!janitor.is_running());
    }

    #[tokio::test]
    async fn test_janitor_stop_without_start() {
        let cache = shared_store();
        let mut janitor = Janitor::new(cache, Duration::from_millis(50));

        // Must be a no-op, not a hang or panic
        janitor.stop().await;
        assert!(!janitor.is_running());
    }

    #[tokio::test]
    async fn test_janitor_restart_after_stop() {
        let cache = shared_store();
        let mut janitor = Janitor::new(cache.clone(), Duration::from_millis(100));

        janitor.start();
        janitor.stop().await;

        {
            let mut store = cache.write().await;
            store
                .set("expire_soon".to_string(), "value".to_string(), Some(0.1))
                .unwrap();
        }

        janitor.start();
        assert!(janitor.is_running());

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(cache.read().await.len(), 0);

        janitor.stop().await;
    }

    #[tokio::test]
    async fn test_sweep_spares_key_refreshed_after_scan() {
        let cache = shared_store();

        {
            let mut store = cache.write().await;
            store
                .set("key".to_string(), "old".to_string(), Some(0.1))
                .unwrap();
        }
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Scan snapshot flags the key as expired
        let asof = current_timestamp_ms();
        let candidates = cache.read().await.expired_keys(asof);
        assert_eq!(candidates, vec!["key".to_string()]);

        // A writer refreshes it before the removal phase runs
        {
            let mut store = cache.write().await;
            store
                .set("key".to_string(), "fresh".to_string(), Some(60.0))
                .unwrap();
        }

        // Removal re-validates and leaves the refreshed value alone
        let mut store = cache.write().await;
        assert!(!store.remove_if_expired("key"));
        assert_eq!(store.get("key"), Some("fresh".to_string()));
    }
}
