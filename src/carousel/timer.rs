//! Repeating tick timer with an owned handle.
//!
//! - One armed timer per scheduler; arming again replaces the old one
//! - Each timer is tagged with a generation so queued ticks from a replaced
//!   timer can be told apart by the receiver
//! - Ticks are delivered over a flume channel to the single event loop
//! - Late ticks are delayed, never fired in a burst

use std::fmt;
use std::time::Duration;

use flume::Sender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::error::{CarouselError, Result};

/// One firing of a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick<K> {
    /// Which timer fired.
    pub key: K,
    /// Generation the timer was armed with.
    pub generation: u64,
}

/// Something that can arm and cancel a repeating tick.
pub trait TickScheduler {
    /// Arm a repeating tick every `period`, first firing one full period from
    /// now. Any previously armed tick is cancelled first.
    fn start(&mut self, period: Duration, generation: u64) -> Result<()>;

    /// Cancel the armed tick, if any.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Owned handle to a spawned tick task. Aborts the task when dropped.
struct TimerHandle {
    task: JoinHandle<()>,
    generation: u64,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Tokio-backed [`TickScheduler`] sending [`Tick`]s into a channel.
pub struct TokioTicker<K> {
    key: K,
    tx: Sender<Tick<K>>,
    handle: Option<TimerHandle>,
}

impl<K: fmt::Debug> fmt::Debug for TokioTicker<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioTicker")
            .field("key", &self.key)
            .field("generation", &self.handle.as_ref().map(|h| h.generation))
            .finish()
    }
}

impl<K> TokioTicker<K>
where
    K: Copy + fmt::Debug + Send + 'static,
{
    pub fn new(key: K, tx: Sender<Tick<K>>) -> Self {
        Self {
            key,
            tx,
            handle: None,
        }
    }

    /// Generation of the armed timer, if any.
    pub fn generation(&self) -> Option<u64> {
        self.handle.as_ref().map(|h| h.generation)
    }
}

impl<K> TickScheduler for TokioTicker<K>
where
    K: Copy + fmt::Debug + Send + 'static,
{
    fn start(&mut self, period: Duration, generation: u64) -> Result<()> {
        // Clear first so two tasks never tick concurrently, and so a failed
        // start leaves nothing armed.
        self.stop();

        if period.is_zero() {
            return Err(CarouselError::InvalidPeriod(period));
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| CarouselError::NoRuntime)?;

        let key = self.key;
        let tx = self.tx.clone();
        let first = Instant::now() + period;
        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                trace!(?key, generation, "Tick");
                if tx.send_async(Tick { key, generation }).await.is_err() {
                    debug!(?key, "Tick receiver dropped, stopping timer");
                    break;
                }
            }
        });

        debug!(?key, generation, period_ms = period.as_millis() as u64, "Timer armed");
        self.handle = Some(TimerHandle { task, generation });
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(key = ?self.key, generation = handle.generation, "Timer cancelled");
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Scheduler that records calls instead of spawning tasks.
    #[derive(Debug, Default)]
    pub struct RecordingScheduler {
        pub armed: Option<(Duration, u64)>,
        pub starts: usize,
        pub stops: usize,
    }

    impl TickScheduler for RecordingScheduler {
        fn start(&mut self, period: Duration, generation: u64) -> Result<()> {
            self.armed = Some((period, generation));
            self.starts += 1;
            Ok(())
        }

        fn stop(&mut self) {
            if self.armed.take().is_some() {
                self.stops += 1;
            }
        }

        fn is_running(&self) -> bool {
            self.armed.is_some()
        }
    }
}
