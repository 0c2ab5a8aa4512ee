//! Domain errors raised by the focus timer and the reward catalog.
//!
//! Out-of-contract `pause`/`resume` calls are not errors; they map to
//! disabled controls and are reported as "no transition" instead.

use super::timer::SessionState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// An operation that needs an idle session was called on an active one.
    #[error("cannot {operation} while the session is {state}")]
    InvalidState { operation: &'static str, state: SessionState },

    /// Duration (in seconds) outside the preset set.
    #[error("{} is not a focus preset (choose 15, 25, 45 or 60 minutes)", describe_seconds(.0))]
    InvalidPreset(u32),

    #[error("not enough points: balance is {balance}, reward costs {cost}")]
    InsufficientPoints { balance: u64, cost: u64 },

    #[error("reward '{0}' does not exist")]
    UnknownReward(String),

    #[error("reward '{0}' is still locked")]
    RewardLocked(String),
}

pub type FocusResult<T> = Result<T, FocusError>;

fn describe_seconds(seconds: &u32) -> String {
    let seconds = *seconds;
    if seconds % 60 == 0 {
        format!("{} minutes", seconds / 60)
    } else {
        format!("{} seconds", seconds)
    }
}
