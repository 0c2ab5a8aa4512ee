//! Focus session countdown state machine.
//!
//! `FocusTimer` holds a single session and moves it through
//! `Idle -> Running <-> Paused -> Completed`. It has no notion of wall-clock
//! time: each call to [`FocusTimer::tick`] is one second of focus. The
//! scheduling of ticks belongs to [`crate::libs::ticker`] and the driver in
//! [`crate::libs::shield`].
//!
//! ## Transitions
//!
//! | From           | Event      | To        |
//! |----------------|------------|-----------|
//! | Idle           | `start`    | Running   |
//! | Running        | `tick`     | Running, or Completed when the count hits 0 |
//! | Running        | `pause`    | Paused    |
//! | Paused         | `resume`   | Running   |
//! | any but Idle   | `stop`     | Idle      |
//! | Completed      | `reset`    | Idle      |
//!
//! The completion reward is credited by the tick that reaches zero and by
//! no other call: `points_awarded` stays set until the session is cleared,
//! so a tick re-delivered after completion cannot pay twice.
//!
//! ## Example
//!
//! ```rust
//! use focus_shield::libs::points::{PointBalance, PointStore};
//! use focus_shield::libs::preset::Preset;
//! use focus_shield::libs::timer::{FocusTimer, SessionState};
//!
//! let mut points = PointBalance::new(1250);
//! let mut timer = FocusTimer::new(Preset::Pomodoro);
//! timer.start(25 * 60).unwrap();
//! for _ in 0..1500 {
//!     timer.tick(&mut points);
//! }
//! assert_eq!(timer.state(), SessionState::Completed);
//! assert_eq!(points.balance(), 1300);
//! ```

use super::error::{FocusError, FocusResult};
use super::points::PointStore;
use super::preset::Preset;
use std::fmt;
use tracing::{debug, info};

/// Points credited for every completed session, whatever its length.
pub const COMPLETION_REWARD: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

impl SessionState {
    /// Running or paused: a countdown is in progress.
    pub fn is_active(self) -> bool {
        matches!(self, SessionState::Running | SessionState::Paused)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Result of delivering one tick to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second consumed, session still running.
    Counted { remaining: u32 },
    /// The last second was consumed and the reward credited.
    Completed { credited: u64, balance: u64 },
    /// The session was not running; nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct FocusTimer {
    preset: Preset,
    configured_seconds: u32,
    remaining_seconds: u32,
    state: SessionState,
    points_awarded: bool,
    reward: u64,
}

impl FocusTimer {
    pub fn new(preset: Preset) -> Self {
        Self::with_reward(preset, COMPLETION_REWARD)
    }

    pub fn with_reward(preset: Preset, reward: u64) -> Self {
        Self {
            preset,
            configured_seconds: preset.seconds(),
            remaining_seconds: 0,
            state: SessionState::Idle,
            points_awarded: false,
            reward,
        }
    }

    /// Chooses the duration of the next session. Only allowed while idle.
    pub fn select_preset(&mut self, preset: Preset) -> FocusResult<()> {
        self.require_idle("select a preset")?;
        self.preset = preset;
        self.configured_seconds = preset.seconds();
        debug!(preset = %preset, "focus preset selected");
        Ok(())
    }

    /// Starts a session of `duration_seconds`, which must match a preset.
    pub fn start(&mut self, duration_seconds: u32) -> FocusResult<()> {
        self.require_idle("start a session")?;
        let preset = Preset::from_seconds(duration_seconds)?;

        self.preset = preset;
        self.configured_seconds = duration_seconds;
        self.remaining_seconds = duration_seconds;
        self.points_awarded = false;
        self.state = SessionState::Running;
        debug!(seconds = duration_seconds, "focus session started");
        Ok(())
    }

    /// Starts a session with the currently selected preset.
    pub fn start_selected(&mut self) -> FocusResult<()> {
        self.start(self.preset.seconds())
    }

    /// Returns `true` if the session went from running to paused.
    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.state = SessionState::Paused;
        debug!(remaining = self.remaining_seconds, "focus session paused");
        true
    }

    /// Returns `true` if the session went from paused to running.
    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Running;
        debug!(remaining = self.remaining_seconds, "focus session resumed");
        true
    }

    /// Abandons the session without a reward. Returns `false` when already idle.
    pub fn stop(&mut self) -> bool {
        if self.state == SessionState::Idle {
            return false;
        }
        debug!(state = %self.state, remaining = self.remaining_seconds, "focus session stopped");
        self.clear();
        true
    }

    /// Clears a completed session. Other states are left untouched.
    pub fn reset(&mut self) -> bool {
        if self.state != SessionState::Completed {
            return false;
        }
        self.clear();
        true
    }

    /// Consumes one second of a running session.
    ///
    /// The tick that brings the count to zero completes the session and
    /// credits the reward to `store`. Ticks in any other state are ignored.
    pub fn tick(&mut self, store: &mut dyn PointStore) -> TickOutcome {
        if self.state != SessionState::Running {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counted {
                remaining: self.remaining_seconds,
            };
        }

        self.state = SessionState::Completed;
        if self.points_awarded {
            return TickOutcome::Ignored;
        }
        self.points_awarded = true;
        let balance = store.credit(self.reward);
        info!(credited = self.reward, balance, "focus session completed");

        TickOutcome::Completed {
            credited: self.reward,
            balance,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn configured_seconds(&self) -> u32 {
        self.configured_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Seconds of focus consumed by the current session.
    pub fn elapsed_seconds(&self) -> u32 {
        match self.state {
            SessionState::Idle => 0,
            _ => self.configured_seconds - self.remaining_seconds,
        }
    }

    /// Remaining share of the session in `0.0..=1.0`; `0.0` once nothing is left.
    pub fn progress(&self) -> f64 {
        if self.configured_seconds == 0 {
            return 0.0;
        }
        self.remaining_seconds as f64 / self.configured_seconds as f64
    }

    pub fn points_awarded(&self) -> bool {
        self.points_awarded
    }

    pub fn reward(&self) -> u64 {
        self.reward
    }

    fn require_idle(&self, operation: &'static str) -> FocusResult<()> {
        if self.state != SessionState::Idle {
            return Err(FocusError::InvalidState {
                operation,
                state: self.state,
            });
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.state = SessionState::Idle;
        self.remaining_seconds = 0;
        self.configured_seconds = self.preset.seconds();
        self.points_awarded = false;
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(Preset::default())
    }
}
