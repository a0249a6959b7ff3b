//! Expiration Reaper Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically removes expired entries.
///
/// The task sleeps for `sweep_interval` between runs, then takes the write
/// lock and performs a full-scan sweep. Unread entries may therefore live
/// up to one interval past their deadline; `get` closes that gap for
/// accessed keys by purging eagerly.
///
/// The returned handle is the stop mechanism: the owning cache aborts it
/// on teardown so the loop never outlives its cache.
pub(crate) fn spawn_reaper<K, V>(
    store: Arc<RwLock<CacheStore<K, V>>>,
    sweep_interval: Duration,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(?sweep_interval, "expiration reaper started");

        loop {
            tokio::time::sleep(sweep_interval).await;

            let removed = {
                let mut store = store.write().await;
                store.sweep_expired()
            };

            if removed > 0 {
                info!("reaper sweep removed {} expired entries", removed);
            } else {
                debug!("reaper sweep found no expired entries");
            }
        }
    })
}
