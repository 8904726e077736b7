//! Short-lived read-through cache of lobby views keyed by access code.
//!
//! Entries expire a fixed time after they were written. Any writer may
//! overwrite any key; nothing invalidates an entry early.

use std::sync::{Arc, Weak};
use std::time::Duration;

use moka::future::Cache;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::CacheSettings;
use crate::domain::LobbyView;

#[derive(Clone)]
pub struct LobbyViewCache {
    inner: Arc<Cache<String, LobbyView>>,
}

impl LobbyViewCache {
    pub fn new(settings: &CacheSettings) -> Self {
        let inner = Cache::builder()
            .max_capacity(settings.max_entries)
            .time_to_live(settings.ttl)
            .build();
        Self {
            inner: Arc::new(inner),
        }
    }

    pub async fn get(&self, access_code: &str) -> Option<LobbyView> {
        self.inner.get(access_code).await
    }

    pub async fn put(&self, access_code: &str, view: LobbyView) {
        self.inner.insert(access_code.to_string(), view).await;
    }

    /// Approximate number of live entries.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Evict expired entries now.
    pub async fn sweep(&self) {
        self.inner.run_pending_tasks().await;
    }

    /// Sweep on a fixed period until every handle to the cache is dropped.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let weak: Weak<Cache<String, LobbyView>> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(cache) = weak.upgrade() else {
                    debug!("lobby view cache dropped, sweeper exiting");
                    break;
                };
                cache.run_pending_tasks().await;
                debug!(entries = cache.entry_count(), "lobby view cache swept");
            }
        })
    }
}
