//! Recurring prayer refresh.
//!
//! Long-lived sessions cross bucket boundaries without anyone touching the
//! terrain, so the prayer is re-derived on a fixed interval.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, trace};

use crate::store::{CovenantStore, StoreError};

/// Default refresh interval (one hour).
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3600);

/// Owns the background task that keeps the prayer current.
pub struct PrayerRefresher {
    /// Store to refresh
    store: Arc<CovenantStore>,
    /// Time between refreshes
    interval: Duration,
    /// Running task, if started
    task: Mutex<Option<JoinHandle<()>>>,
}

impl PrayerRefresher {
    /// Create a refresher with the default hourly interval.
    pub fn new(store: Arc<CovenantStore>) -> Self {
        Self::with_interval(store, DEFAULT_REFRESH_INTERVAL)
    }

    /// Create a refresher with a custom interval.
    pub fn with_interval(store: Arc<CovenantStore>, interval: Duration) -> Self {
        Self {
            store,
            interval,
            task: Mutex::new(None),
        }
    }

    /// Refresh interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start refreshing. The first refresh happens one interval from now.
    pub async fn start(&self) -> Result<(), StoreError> {
        let period = self.interval;
        let first = Instant::now()
            .checked_add(period)
            .filter(|_| !period.is_zero())
            .ok_or(StoreError::InvalidInterval(period))?;

        let mut task = self.task.lock().await;
        if matches!(&*task, Some(handle) if !handle.is_finished()) {
            return Err(StoreError::AlreadyRunning);
        }

        let store = Arc::clone(&self.store);
        *task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let changed = store.recompute_prayer().await;
                trace!(changed, "Prayer refresh tick");
            }
        }));

        info!(interval_secs = period.as_secs(), "Prayer refresher started");
        Ok(())
    }

    /// Stop refreshing. Safe to call when not running.
    pub async fn stop(&self) {
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
            info!("Prayer refresher stopped");
        }
    }

    /// Whether the refresh task is running.
    pub async fn is_running(&self) -> bool {
        let task = self.task.lock().await;
        matches!(&*task, Some(handle) if !handle.is_finished())
    }
}

impl Drop for PrayerRefresher {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use covenant::{PrayerBucket, Terrain};

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_bucket_change() {
        let clock = Arc::new(FixedClock::new(9));
        let store = Arc::new(CovenantStore::with_clock(clock.clone()));
        let refresher = PrayerRefresher::new(store.clone());
        let mut rx = store.subscribe_prayer();

        refresher.start().await.unwrap();
        clock.set_hour(10);

        // Paused time auto-advances to the next refresh.
        rx.changed().await.unwrap();
        assert_eq!(store.current_prayer().bucket, PrayerBucket::Midday);
        assert_eq!(store.current_prayer().terrain, Terrain::Desert);

        refresher.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_refresh_before_interval() {
        let clock = Arc::new(FixedClock::new(9));
        let store = Arc::new(CovenantStore::with_clock(clock.clone()));
        let refresher = PrayerRefresher::with_interval(store.clone(), Duration::from_secs(60));

        refresher.start().await.unwrap();
        clock.set_hour(20);
        tokio::time::advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;

        assert_eq!(store.current_prayer().bucket, PrayerBucket::Sunrise);
        refresher.stop().await;
    }

    #[tokio::test]
    async fn test_start_stop() {
        let store = Arc::new(CovenantStore::with_clock(Arc::new(FixedClock::new(12))));
        let refresher = PrayerRefresher::new(store);

        assert!(!refresher.is_running().await);
        refresher.start().await.unwrap();
        assert!(refresher.is_running().await);
        assert_eq!(refresher.start().await, Err(StoreError::AlreadyRunning));

        refresher.stop().await;
        assert!(!refresher.is_running().await);
        refresher.stop().await;
    }

    #[tokio::test]
    async fn test_unschedulable_interval_rejected() {
        let store = Arc::new(CovenantStore::with_clock(Arc::new(FixedClock::new(12))));

        for interval in [Duration::ZERO, Duration::from_secs(u64::MAX)] {
            let refresher = PrayerRefresher::with_interval(store.clone(), interval);
            assert_eq!(refresher.start().await, Err(StoreError::InvalidInterval(interval)));
            assert!(!refresher.is_running().await);
        }
    }
}
