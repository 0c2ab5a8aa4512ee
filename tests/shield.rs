#[cfg(test)]
mod tests {
    use focus_shield::libs::blocklist::{BlockList, BlockedSite};
    use focus_shield::libs::config::FocusConfig;
    use focus_shield::libs::error::{FocusError, FocusResult};
    use focus_shield::libs::points::PointStore;
    use focus_shield::libs::preset::Preset;
    use focus_shield::libs::rewards::RewardCatalog;
    use focus_shield::libs::shield::FocusShield;
    use focus_shield::libs::timer::{SessionState, TickOutcome};
    use tokio::time::{self, Duration, Instant};

    fn shield() -> FocusShield {
        FocusShield::from_config(&FocusConfig::default(), RewardCatalog::default()).unwrap()
    }

    /// Receives ticks until the session completes and returns how many were counted.
    async fn run_to_completion<S: PointStore>(shield: &mut FocusShield<S>) -> u32 {
        let mut counted = 0;
        loop {
            match shield.recv_tick().await {
                TickOutcome::Counted { .. } => counted += 1,
                TickOutcome::Completed { .. } => return counted + 1,
                TickOutcome::Ignored => {}
            }
        }
    }

    /// Store that remembers every credit, to check the reward is paid once.
    #[derive(Default)]
    struct Ledger {
        balance: u64,
        credits: Vec<u64>,
    }

    impl PointStore for Ledger {
        fn balance(&self) -> u64 {
            self.balance
        }

        fn credit(&mut self, amount: u64) -> u64 {
            self.credits.push(amount);
            self.balance += amount;
            self.balance
        }

        fn debit(&mut self, amount: u64) -> FocusResult<u64> {
            if amount > self.balance {
                return Err(FocusError::InsufficientPoints {
                    balance: self.balance,
                    cost: amount,
                });
            }
            self.balance -= amount;
            Ok(self.balance)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_pomodoro_session_runs_to_completion() {
        let mut shield = shield();
        assert_eq!(shield.balance(), 1250);

        shield.start(Preset::Pomodoro).unwrap();
        assert!(shield.is_ticking());

        let counted = run_to_completion(&mut shield).await;

        assert_eq!(counted, 1500);
        assert_eq!(shield.timer().state(), SessionState::Completed);
        assert_eq!(shield.balance(), 1300);
        assert!(!shield.is_ticking());

        let stats = shield.stats();
        assert_eq!(stats.sessions_completed, 1);
        assert_eq!(stats.focus_seconds, 1500);
        assert_eq!(stats.points_earned, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_once_per_period() {
        let mut shield = shield();
        let started = Instant::now();
        shield.start(Preset::Quick).unwrap();

        for expected in (890..900).rev() {
            assert_eq!(shield.recv_tick().await, TickOutcome::Counted { remaining: expected });
        }

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(10), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(11), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_suspends_tick_delivery() {
        let mut shield = shield();
        shield.start(Preset::Quick).unwrap();

        for _ in 0..100 {
            shield.recv_tick().await;
        }
        assert!(shield.pause());
        assert!(!shield.is_ticking());

        // Fifty seconds pass while paused
        time::sleep(Duration::from_secs(50)).await;
        assert!(time::timeout(Duration::from_secs(60), shield.recv_tick()).await.is_err());
        assert_eq!(shield.timer().remaining_seconds(), 800);

        assert!(shield.resume());
        let rest = run_to_completion(&mut shield).await;

        assert_eq!(100 + rest, 900);
        assert_eq!(shield.stats().focus_seconds, 900);
        assert_eq!(shield.balance(), 1300);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_ticks_without_reward() {
        let mut shield = shield();
        shield.start(Preset::Deep).unwrap();
        for _ in 0..10 {
            shield.recv_tick().await;
        }

        assert!(shield.stop());
        assert!(!shield.is_ticking());
        assert_eq!(shield.timer().state(), SessionState::Idle);
        assert_eq!(shield.timer().remaining_seconds(), 0);

        assert!(time::timeout(Duration::from_secs(3600), shield.recv_tick()).await.is_err());
        assert_eq!(shield.balance(), 1250);
        assert_eq!(shield.stats().sessions_stopped, 1);
        assert_eq!(shield.stats().sessions_completed, 0);
        assert_eq!(shield.stats().focus_seconds, 10);

        // Stopping again changes nothing
        assert!(!shield.stop());
        assert_eq!(shield.stats().sessions_stopped, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_active_keeps_single_countdown() {
        let mut shield = shield();
        let started = Instant::now();
        shield.start(Preset::Quick).unwrap();

        assert!(matches!(shield.start(Preset::Hour), Err(FocusError::InvalidState { .. })));
        assert!(matches!(shield.start_seconds(900), Err(FocusError::InvalidState { .. })));

        for _ in 0..5 {
            shield.recv_tick().await;
        }
        assert_eq!(shield.timer().remaining_seconds(), 895);
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_allows_next_session() {
        let mut shield = shield();
        shield.start(Preset::Quick).unwrap();
        run_to_completion(&mut shield).await;

        assert!(matches!(shield.start_selected(), Err(FocusError::InvalidState { .. })));
        assert!(shield.reset());

        shield.start(Preset::Quick).unwrap();
        run_to_completion(&mut shield).await;
        assert_eq!(shield.balance(), 1350);
        assert_eq!(shield.stats().sessions_completed, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_store_is_credited_once() {
        let settings = FocusConfig::default();
        let mut shield = FocusShield::new(&settings, Ledger::default(), RewardCatalog::default()).unwrap();

        shield.start(Preset::Quick).unwrap();
        run_to_completion(&mut shield).await;
        // A tick applied by hand after completion is ignored
        assert_eq!(shield.apply_tick(), TickOutcome::Ignored);

        assert_eq!(shield.store().credits, vec![50]);
    }

    #[tokio::test]
    async fn test_claim_updates_balance_and_stats() {
        let mut shield = shield();

        let reward = shield.claim("5").unwrap();
        assert_eq!(reward.name, "Weekend Outing");
        assert_eq!(shield.balance(), 250);

        assert_eq!(shield.claim("3"), Err(FocusError::InsufficientPoints { balance: 250, cost: 500 }));
        assert_eq!(shield.claim("6"), Err(FocusError::RewardLocked("6".to_string())));
        assert_eq!(shield.balance(), 250);

        let stats = shield.stats();
        assert_eq!(stats.rewards_claimed, 1);
        assert_eq!(stats.points_spent, 1000);
    }

    #[tokio::test]
    async fn test_status_reports_blocking_while_active() {
        let mut shield = shield();
        let idle = shield.status();
        assert_eq!(idle.state, SessionState::Idle);
        assert_eq!(idle.configured_seconds, 1500);
        assert!(!idle.blocking);

        shield.start(Preset::Quick).unwrap();
        let running = shield.status();
        assert!(running.blocking);
        assert_eq!(running.remaining_seconds, 900);
        assert_eq!(running.preset, Preset::Quick);

        shield.pause();
        assert!(shield.status().blocking);

        shield.stop();
        assert!(!shield.status().blocking);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_completion_reward_saturates_stats() {
        let settings = FocusConfig {
            completion_reward: u64::MAX,
            tick_interval_ms: 10,
            ..Default::default()
        };
        let mut shield = FocusShield::from_config(&settings, RewardCatalog::default()).unwrap();

        for _ in 0..2 {
            shield.start(Preset::Quick).unwrap();
            run_to_completion(&mut shield).await;
            assert!(shield.reset());
        }

        assert_eq!(shield.balance(), u64::MAX);
        assert_eq!(shield.stats().sessions_completed, 2);
        assert_eq!(shield.stats().points_earned, u64::MAX);
    }

    #[test]
    fn test_default_blocklist_is_attached() {
        let shield = shield();
        assert_eq!(shield.blocklist(), &BlockList::default());

        let custom = shield.with_blocklist(BlockList::new(vec![BlockedSite::new("news.example", "News/Forum", 4)]));
        assert_eq!(custom.blocklist().len(), 1);
        assert_eq!(custom.blocklist().total_blocks(), 4);
    }

    #[test]
    fn test_invalid_default_preset_is_rejected() {
        let settings = FocusConfig {
            default_preset_minutes: 30,
            ..Default::default()
        };
        let result = FocusShield::from_config(&settings, RewardCatalog::default());
        assert!(matches!(result, Err(FocusError::InvalidPreset(1800))));
    }
}
