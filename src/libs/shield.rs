//! Focus session driver.
//!
//! `FocusShield` owns everything a running focus session touches: the
//! [`FocusTimer`], the point store it credits, the reward catalog, the
//! blocked-site list, the session statistics and the [`Ticker`] that feeds
//! it. Controls delegate to
//! the timer and then start or cancel the tick source to match the new state.
//!
//! ```text
//!  Ticker task ──TickSignal{gen}──▶ channel ──▶ recv_tick()
//!                                                 │ gen == current?
//!                                                 ├─ no  → dropped
//!                                                 └─ yes → FocusTimer::tick
//! ```
//!
//! Every transition away from `Running` drops the ticker, and dropping the
//! driver drops it too, so no countdown outlives its session.

use super::blocklist::BlockList;
use super::config::FocusConfig;
use super::error::FocusResult;
use super::points::{PointBalance, PointStore};
use super::preset::Preset;
use super::rewards::{Reward, RewardCatalog};
use super::stats::SessionStats;
use super::ticker::{TickSignal, Ticker};
use super::timer::{FocusTimer, SessionState, TickOutcome};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Duration;
use tracing::{debug, info, trace};

/// Snapshot of the session for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusStatus {
    pub state: SessionState,
    pub preset: Preset,
    pub remaining_seconds: u32,
    pub configured_seconds: u32,
    pub balance: u64,
    /// Distraction blocking is shown as active while a countdown is in progress.
    pub blocking: bool,
    pub progress: f64,
}

pub struct FocusShield<S: PointStore = PointBalance> {
    timer: FocusTimer,
    store: S,
    catalog: RewardCatalog,
    blocklist: BlockList,
    stats: SessionStats,
    period: Duration,
    ticker: Option<Ticker>,
    generation: u64,
    tick_tx: UnboundedSender<TickSignal>,
    tick_rx: UnboundedReceiver<TickSignal>,
}

impl FocusShield<PointBalance> {
    /// Driver with a fresh in-memory balance of `settings.starting_points`.
    pub fn from_config(settings: &FocusConfig, catalog: RewardCatalog) -> FocusResult<Self> {
        Self::new(settings, PointBalance::new(settings.starting_points), catalog)
    }
}

impl<S: PointStore> FocusShield<S> {
    pub fn new(settings: &FocusConfig, store: S, catalog: RewardCatalog) -> FocusResult<Self> {
        let timer = FocusTimer::with_reward(settings.preset()?, settings.completion_reward);
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();

        Ok(Self {
            timer,
            store,
            catalog,
            blocklist: BlockList::default(),
            stats: SessionStats::default(),
            period: settings.tick_interval(),
            ticker: None,
            generation: 0,
            tick_tx,
            tick_rx,
        })
    }

    /// Replaces the built-in list of blocked sites.
    pub fn with_blocklist(mut self, blocklist: BlockList) -> Self {
        self.blocklist = blocklist;
        self
    }

    pub fn select_preset(&mut self, preset: Preset) -> FocusResult<()> {
        self.timer.select_preset(preset)
    }

    /// Starts a session of `preset` length and begins ticking.
    pub fn start(&mut self, preset: Preset) -> FocusResult<()> {
        self.start_seconds(preset.seconds())
    }

    /// Starts a session of `duration_seconds`, which must match a preset.
    pub fn start_seconds(&mut self, duration_seconds: u32) -> FocusResult<()> {
        self.timer.start(duration_seconds)?;
        self.spawn_ticker();
        Ok(())
    }

    /// Starts a session with the selected preset.
    pub fn start_selected(&mut self) -> FocusResult<()> {
        self.start_seconds(self.timer.preset().seconds())
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.timer.pause();
        if paused {
            self.cancel_ticker();
        }
        paused
    }

    pub fn resume(&mut self) -> bool {
        let resumed = self.timer.resume();
        if resumed {
            self.spawn_ticker();
        }
        resumed
    }

    pub fn stop(&mut self) -> bool {
        let abandoned = self.timer.state().is_active();
        self.cancel_ticker();
        let stopped = self.timer.stop();
        if abandoned {
            self.stats.record_stop();
        }
        stopped
    }

    pub fn reset(&mut self) -> bool {
        self.cancel_ticker();
        self.timer.reset()
    }

    /// Waits for the next tick of the current source and applies it.
    ///
    /// Ticks stamped by a cancelled source are discarded. While nothing is
    /// ticking this future stays pending, which makes it safe to poll inside
    /// `tokio::select!` next to user input.
    pub async fn recv_tick(&mut self) -> TickOutcome {
        loop {
            let Some(signal) = self.tick_rx.recv().await else {
                return TickOutcome::Ignored;
            };
            if !self.is_live(signal) {
                trace!(generation = signal.generation, "stale tick dropped");
                continue;
            }
            return self.apply_tick();
        }
    }

    /// Applies one tick to the timer and updates statistics.
    pub fn apply_tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick(&mut self.store);
        match outcome {
            TickOutcome::Counted { .. } => self.stats.record_tick(),
            TickOutcome::Completed { credited, balance } => {
                self.stats.record_tick();
                self.stats.record_completion(credited);
                self.cancel_ticker();
                info!(credited, balance, "focus reward credited");
            }
            TickOutcome::Ignored => {}
        }
        outcome
    }

    /// Redeems a reward from the catalog against the current balance.
    pub fn claim(&mut self, reward_id: &str) -> FocusResult<Reward> {
        let reward = self.catalog.redeem(reward_id, &mut self.store)?;
        self.stats.record_claim(reward.points);
        Ok(reward)
    }

    pub fn status(&self) -> FocusStatus {
        let state = self.timer.state();
        FocusStatus {
            state,
            preset: self.timer.preset(),
            remaining_seconds: self.timer.remaining_seconds(),
            configured_seconds: self.timer.configured_seconds(),
            balance: self.store.balance(),
            blocking: state.is_active(),
            progress: self.timer.progress(),
        }
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn balance(&self) -> u64 {
        self.store.balance()
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    pub fn blocklist(&self) -> &BlockList {
        &self.blocklist
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// `true` while a tick source is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    fn is_live(&self, signal: TickSignal) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| ticker.generation() == signal.generation)
    }

    fn spawn_ticker(&mut self) {
        self.cancel_ticker();
        self.generation += 1;
        self.ticker = Some(Ticker::spawn(self.period, self.generation, self.tick_tx.clone()));
        debug!(generation = self.generation, "tick source scheduled");
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
