//! Rewards that focus points can be spent on.
//!
//! The catalog is read-only during a run. Redeeming a reward debits its cost
//! from a [`PointStore`]; a locked reward or a short balance leaves the
//! store unchanged.

use super::error::{FocusError, FocusResult};
use super::points::PointStore;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Cost in points.
    pub points: u64,
    #[serde(default = "default_unlocked")]
    pub unlocked: bool,
}

fn default_unlocked() -> bool {
    true
}

impl Reward {
    pub fn new(id: &str, name: &str, description: &str, points: u64, unlocked: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            points,
            unlocked,
        }
    }

    pub fn can_claim(&self, balance: u64) -> bool {
        self.unlocked && balance >= self.points
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardCatalog {
    rewards: Vec<Reward>,
}

impl RewardCatalog {
    pub fn new(rewards: Vec<Reward>) -> Self {
        Self { rewards }
    }

    pub fn get(&self, id: &str) -> FocusResult<&Reward> {
        self.rewards
            .iter()
            .find(|reward| reward.id == id)
            .ok_or_else(|| FocusError::UnknownReward(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reward> {
        self.rewards.iter()
    }

    /// Rewards that could be claimed right now with `balance`.
    pub fn affordable(&self, balance: u64) -> impl Iterator<Item = &Reward> {
        self.rewards.iter().filter(move |reward| reward.can_claim(balance))
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// Spends the reward's cost from `store` and returns the claimed reward.
    pub fn redeem(&self, id: &str, store: &mut dyn PointStore) -> FocusResult<Reward> {
        let reward = self.get(id)?;
        if !reward.unlocked {
            return Err(FocusError::RewardLocked(reward.id.clone()));
        }
        let balance = store.debit(reward.points)?;
        info!(reward = %reward.name, cost = reward.points, balance, "reward claimed");
        Ok(reward.clone())
    }
}

impl Default for RewardCatalog {
    fn default() -> Self {
        Self::new(vec![
            Reward::new("1", "30-min Break", "Unlock a guilt-free 30-minute break", 100, true),
            Reward::new("2", "Favorite Snack", "Treat yourself to your favorite snack", 200, true),
            Reward::new("3", "Movie Night", "Watch a movie of your choice", 500, true),
            Reward::new("4", "Gaming Session", "2-hour gaming session", 750, true),
            Reward::new("5", "Weekend Outing", "Go out with friends this weekend", 1000, true),
            Reward::new("6", "New Book", "Buy that book you've been wanting", 1500, false),
        ])
    }
}
