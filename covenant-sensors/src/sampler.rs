//! Sampler - a timer-driven reading generator.
//!
//! A sampler owns exactly one reading. Each tick reads the previous value,
//! builds the complete next value and publishes it with a single `watch`
//! send, so stopping a sampler never leaves a half-updated reading. Ticks for
//! one sampler are serialised through its random-source lock.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, trace};

use crate::field::FieldSpec;
use crate::random::{RandomSource, SeededRandom};
use crate::types::{Result, SensorError};

/// Inputs available to a single tick.
pub struct TickContext<'a> {
    /// Random source owned by the sampler
    pub rng: &'a mut dyn RandomSource,
    /// Wall-clock time of the tick
    pub now: DateTime<Utc>,
}

/// A reading that can advance itself by one tick.
pub trait Reading: Clone + Send + Sync + 'static {
    /// Sampler name used in logs and errors
    const NAME: &'static str;

    /// Cadence used when none is configured
    const DEFAULT_CADENCE: Duration;

    /// Compute the next reading from this one.
    fn next(&self, ctx: &mut TickContext<'_>) -> Self;

    /// Bounded fields and their current values.
    fn bounded_fields(&self) -> Vec<(FieldSpec, f64)> {
        Vec::new()
    }
}

struct SamplerInner<R: Reading> {
    reading: watch::Sender<R>,
    rng: Mutex<Box<dyn RandomSource>>,
    ticks: AtomicU64,
}

impl<R: Reading> SamplerInner<R> {
    async fn tick(&self) -> R {
        let mut rng = self.rng.lock().await;
        let previous = self.reading.borrow().clone();
        let next = previous.next(&mut TickContext {
            rng: &mut **rng,
            now: Utc::now(),
        });
        self.reading.send_replace(next.clone());
        let count = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(sampler = R::NAME, tick = count, "Sampler tick");
        next
    }
}

/// Timer-driven generator for one reading.
pub struct Sampler<R: Reading> {
    /// Shared with the background task
    inner: Arc<SamplerInner<R>>,
    /// Time between ticks
    cadence: Duration,
    /// Running task, if started
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<R: Reading> Sampler<R> {
    /// Create a sampler with the default cadence and an entropy-seeded RNG.
    pub fn new(initial: R) -> Self {
        Self::builder(initial).build()
    }

    /// Create a builder for custom cadence or randomness.
    pub fn builder(initial: R) -> SamplerBuilder<R> {
        SamplerBuilder::new(initial)
    }

    /// Sampler name.
    pub fn name(&self) -> &'static str {
        R::NAME
    }

    /// Time between ticks.
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Start ticking. The first tick happens one cadence from now.
    pub async fn start(&self) -> Result<()> {
        let period = self.cadence;
        let first = Instant::now()
            .checked_add(period)
            .filter(|_| !period.is_zero())
            .ok_or(SensorError::InvalidCadence(R::NAME))?;

        let mut task = self.task.lock().await;
        if matches!(&*task, Some(handle) if !handle.is_finished()) {
            return Err(SensorError::AlreadyRunning(R::NAME));
        }

        let inner = Arc::clone(&self.inner);
        *task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                inner.tick().await;
            }
        }));

        info!(
            sampler = R::NAME,
            cadence_ms = period.as_millis() as u64,
            "Sampler started"
        );
        Ok(())
    }

    /// Stop future ticks. Safe to call when not running.
    pub async fn stop(&self) {
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
            info!(sampler = R::NAME, ticks = self.ticks(), "Sampler stopped");
        }
    }

    /// Whether the background task is running.
    pub async fn is_running(&self) -> bool {
        let task = self.task.lock().await;
        matches!(&*task, Some(handle) if !handle.is_finished())
    }

    /// Advance one tick immediately, independent of the timer.
    pub async fn tick(&self) -> R {
        self.inner.tick().await
    }

    /// Current reading.
    pub fn snapshot(&self) -> R {
        self.inner.reading.borrow().clone()
    }

    /// Replace the reading, e.g. to restore a known state.
    ///
    /// Waits for an in-flight tick so the reset is never overwritten by it.
    pub async fn reset(&self, reading: R) {
        let _rng = self.inner.rng.lock().await;
        self.inner.reading.send_replace(reading);
        debug!(sampler = R::NAME, "Sampler reset");
    }

    /// Receiver notified on every published reading.
    pub fn subscribe(&self) -> watch::Receiver<R> {
        self.inner.reading.subscribe()
    }

    /// Readings as a stream, starting with the current one.
    pub fn stream(&self) -> WatchStream<R> {
        WatchStream::new(self.subscribe())
    }

    /// Ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.inner.ticks.load(Ordering::Relaxed)
    }
}

impl<R: Reading> Drop for Sampler<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.task.get_mut().take() {
            handle.abort();
        }
    }
}

/// Builder for Sampler configuration.
pub struct SamplerBuilder<R: Reading> {
    initial: R,
    cadence: Duration,
    rng: Option<Box<dyn RandomSource>>,
}

impl<R: Reading> SamplerBuilder<R> {
    /// Create a new builder.
    pub fn new(initial: R) -> Self {
        Self {
            initial,
            cadence: R::DEFAULT_CADENCE,
            rng: None,
        }
    }

    /// Set time between ticks.
    pub fn cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    /// Use a specific random source.
    pub fn random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Use a seeded RNG.
    pub fn seed(self, seed: u64) -> Self {
        self.random(SeededRandom::from_seed(seed))
    }

    /// Build the sampler.
    pub fn build(self) -> Sampler<R> {
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(SeededRandom::from_entropy()));
        let (reading, _) = watch::channel(self.initial);

        Sampler {
            inner: Arc::new(SamplerInner {
                reading,
                rng: Mutex::new(rng),
                ticks: AtomicU64::new(0),
            }),
            cadence: self.cadence,
            task: Mutex::new(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;
    use tokio_stream::StreamExt;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(f64);

    const COUNTER: FieldSpec = FieldSpec::new("counter", 0.0, 10.0, 2.0);

    impl Reading for Counter {
        const NAME: &'static str = "counter";
        const DEFAULT_CADENCE: Duration = Duration::from_secs(1);

        fn next(&self, ctx: &mut TickContext<'_>) -> Self {
            Counter(COUNTER.perturb(self.0, ctx.rng))
        }

        fn bounded_fields(&self) -> Vec<(FieldSpec, f64)> {
            vec![(COUNTER, self.0)]
        }
    }

    #[tokio::test]
    async fn test_manual_tick() {
        let sampler = Sampler::builder(Counter(5.0))
            .random(FixedRandom::with_offset(0.5))
            .build();

        assert_eq!(sampler.tick().await, Counter(6.0));
        assert_eq!(sampler.snapshot(), Counter(6.0));
        assert_eq!(sampler.ticks(), 1);
    }

    #[tokio::test]
    async fn test_zero_offset_is_idempotent() {
        let sampler = Sampler::builder(Counter(5.0))
            .random(FixedRandom::with_offset(0.0))
            .build();

        for _ in 0..5 {
            assert_eq!(sampler.tick().await, Counter(5.0));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_ticks_at_cadence() {
        let sampler = Sampler::builder(Counter(0.0))
            .cadence(Duration::from_millis(100))
            .random(FixedRandom::with_offset(0.5))
            .build();
        let mut rx = sampler.subscribe();

        sampler.start().await.unwrap();
        for expected in 1..=3 {
            rx.changed().await.unwrap();
            assert_eq!(rx.borrow_and_update().0, expected as f64);
        }
        sampler.stop().await;

        assert_eq!(sampler.ticks(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticks() {
        let sampler = Sampler::builder(Counter(0.0))
            .cadence(Duration::from_millis(100))
            .random(FixedRandom::with_offset(0.5))
            .build();

        sampler.start().await.unwrap();
        sampler.stop().await;
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(sampler.ticks(), 0);
        assert!(!sampler.is_running().await);
    }

    #[tokio::test]
    async fn test_double_start_rejected() {
        let sampler = Sampler::new(Counter(0.0));
        sampler.start().await.unwrap();

        assert_eq!(
            sampler.start().await,
            Err(SensorError::AlreadyRunning("counter"))
        );
        sampler.stop().await;
    }

    #[tokio::test]
    async fn test_zero_cadence_rejected() {
        let sampler = Sampler::builder(Counter(0.0))
            .cadence(Duration::ZERO)
            .build();

        assert_eq!(sampler.start().await, Err(SensorError::InvalidCadence("counter")));
    }

    #[tokio::test]
    async fn test_unschedulable_cadence_rejected() {
        let sampler = Sampler::builder(Counter(0.0))
            .cadence(Duration::from_secs(u64::MAX))
            .build();

        assert_eq!(sampler.start().await, Err(SensorError::InvalidCadence("counter")));
        assert!(!sampler.is_running().await);
    }

    #[tokio::test]
    async fn test_reset_waits_for_in_flight_tick() {
        let sampler = Arc::new(
            Sampler::builder(Counter(5.0))
                .random(FixedRandom::with_offset(0.5))
                .build(),
        );

        // Hold the tick lock as a running tick would.
        let guard = sampler.inner.rng.lock().await;
        let reset = tokio::spawn({
            let sampler = Arc::clone(&sampler);
            async move { sampler.reset(Counter(1.0)).await }
        });
        tokio::task::yield_now().await;
        assert_eq!(sampler.snapshot(), Counter(5.0));

        drop(guard);
        reset.await.unwrap();
        assert_eq!(sampler.snapshot(), Counter(1.0));
        assert_eq!(sampler.tick().await, Counter(2.0));
    }

    #[tokio::test]
    async fn test_bounds_hold_under_seeded_walk() {
        let sampler = Sampler::builder(Counter(5.0)).seed(3).build();
        for _ in 0..500 {
            let reading = sampler.tick().await;
            for (spec, value) in reading.bounded_fields() {
                assert!(spec.contains(value));
            }
        }
    }

    #[tokio::test]
    async fn test_stream_yields_current_then_updates() {
        let sampler = Sampler::builder(Counter(5.0))
            .random(FixedRandom::with_offset(-0.5))
            .build();
        let mut stream = sampler.stream();

        assert_eq!(stream.next().await, Some(Counter(5.0)));
        sampler.tick().await;
        assert_eq!(stream.next().await, Some(Counter(4.0)));
    }
}
