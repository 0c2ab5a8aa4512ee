//! In-process counters behind the "today's stats" panel.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub sessions_completed: u32,
    pub sessions_stopped: u32,
    /// Seconds of countdown consumed across all sessions, stopped ones included.
    pub focus_seconds: u64,
    pub points_earned: u64,
    pub points_spent: u64,
    pub rewards_claimed: u32,
}

impl SessionStats {
    pub fn record_tick(&mut self) {
        self.focus_seconds = self.focus_seconds.saturating_add(1);
    }

    pub fn record_completion(&mut self, credited: u64) {
        self.sessions_completed = self.sessions_completed.saturating_add(1);
        self.points_earned = self.points_earned.saturating_add(credited);
    }

    pub fn record_stop(&mut self) {
        self.sessions_stopped = self.sessions_stopped.saturating_add(1);
    }

    pub fn record_claim(&mut self, cost: u64) {
        self.rewards_claimed = self.rewards_claimed.saturating_add(1);
        self.points_spent = self.points_spent.saturating_add(cost);
    }
}
