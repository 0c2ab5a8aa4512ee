//! Scheduled tick source for a running focus session.
//!
//! A [`Ticker`] owns one spawned tokio task that sends a [`TickSignal`]
//! every period until it is cancelled. Each ticker is stamped with a
//! generation number; the receiver compares it with the ticker it currently
//! holds and drops anything older, so a tick queued just before a pause or
//! stop never reaches the next session.
//!
//! Dropping the handle aborts the task. The driver relies on that for every
//! exit from `Running`: pause, stop, reset, completion and its own teardown.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSignal {
    pub generation: u64,
}

#[derive(Debug)]
pub struct Ticker {
    generation: u64,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawns the tick task. The first tick fires one full `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration, generation: u64, tx: UnboundedSender<TickSignal>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            // Never burst missed ticks after a stall
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(TickSignal { generation }).is_err() {
                    break;
                }
            }
        });
        trace!(generation, period_ms = period.as_millis() as u64, "tick source started");

        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stops tick delivery. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        trace!(generation = self.generation, "tick source cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        let _ticker = Ticker::spawn(Duration::from_secs(1), 3, tx);

        assert_eq!(rx.recv().await, Some(TickSignal { generation: 3 }));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(1) && elapsed < Duration::from_secs(2), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_millis(10), 7, tx);
        assert_eq!(rx.recv().await, Some(TickSignal { generation: 7 }));

        drop(ticker);

        // The aborted task releases its sender without sending again
        let next = time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert_eq!(next, Ok(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_drop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_millis(10), 1, tx);

        ticker.cancel();

        let next = time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert_eq!(next, Ok(None));
    }
}
