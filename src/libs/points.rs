//! Point balance credited by completed sessions and spent on rewards.

use super::error::{FocusError, FocusResult};
use tracing::debug;

/// Store the timer credits and the reward catalog debits.
///
/// Passed explicitly to whoever mutates it so the timer can be driven
/// against any balance in isolation.
pub trait PointStore {
    fn balance(&self) -> u64;

    /// Adds `amount` and returns the new balance.
    fn credit(&mut self, amount: u64) -> u64;

    /// Removes `amount` and returns the new balance, or fails without
    /// touching the balance when it is lower than `amount`.
    fn debit(&mut self, amount: u64) -> FocusResult<u64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointBalance {
    points: u64,
}

impl PointBalance {
    pub fn new(points: u64) -> Self {
        Self { points }
    }
}

impl PointStore for PointBalance {
    fn balance(&self) -> u64 {
        self.points
    }

    fn credit(&mut self, amount: u64) -> u64 {
        self.points = self.points.saturating_add(amount);
        debug!(amount, balance = self.points, "points credited");
        self.points
    }

    fn debit(&mut self, amount: u64) -> FocusResult<u64> {
        if amount > self.points {
            return Err(FocusError::InsufficientPoints {
                balance: self.points,
                cost: amount,
            });
        }
        self.points -= amount;
        debug!(amount, balance = self.points, "points debited");
        Ok(self.points)
    }
}
