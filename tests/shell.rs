#[cfg(test)]
mod tests {
    use focus_shield::commands::focus::{execute, run, ShellCommand};
    use focus_shield::libs::config::FocusConfig;
    use focus_shield::libs::messages::Message;
    use focus_shield::libs::preset::Preset;
    use focus_shield::libs::rewards::RewardCatalog;
    use focus_shield::libs::shield::FocusShield;
    use focus_shield::libs::timer::SessionState;
    use std::ops::ControlFlow;

    #[test]
    fn test_parse_commands() {
        assert_eq!("start".parse::<ShellCommand>(), Ok(ShellCommand::Start(None)));
        assert_eq!("start 45".parse::<ShellCommand>(), Ok(ShellCommand::Start(Some(45))));
        assert_eq!("START 15m".parse::<ShellCommand>(), Ok(ShellCommand::Start(Some(15))));
        assert_eq!("preset 60".parse::<ShellCommand>(), Ok(ShellCommand::Preset(60)));
        assert_eq!("  pause ".parse::<ShellCommand>(), Ok(ShellCommand::Pause));
        assert_eq!("resume".parse::<ShellCommand>(), Ok(ShellCommand::Resume));
        assert_eq!("stop".parse::<ShellCommand>(), Ok(ShellCommand::Stop));
        assert_eq!("reset".parse::<ShellCommand>(), Ok(ShellCommand::Reset));
        assert_eq!("claim 3".parse::<ShellCommand>(), Ok(ShellCommand::Claim("3".to_string())));
        assert_eq!("rewards".parse::<ShellCommand>(), Ok(ShellCommand::Rewards));
        assert_eq!("stats".parse::<ShellCommand>(), Ok(ShellCommand::Stats));
        assert_eq!("blocked".parse::<ShellCommand>(), Ok(ShellCommand::Blocked));
        assert_eq!("?".parse::<ShellCommand>(), Ok(ShellCommand::Help));
        assert_eq!("exit".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
    }

    #[test]
    fn test_empty_line_shows_status() {
        assert_eq!("".parse::<ShellCommand>(), Ok(ShellCommand::Status));
        assert_eq!("   ".parse::<ShellCommand>(), Ok(ShellCommand::Status));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("dance".parse::<ShellCommand>(), Err(Message::ShellUnknownCommand("dance".to_string())));
        assert_eq!("claim".parse::<ShellCommand>(), Err(Message::ShellMissingArgument("claim".to_string())));
        assert_eq!("preset".parse::<ShellCommand>(), Err(Message::ShellMissingArgument("preset".to_string())));
        assert_eq!("start soon".parse::<ShellCommand>(), Err(Message::ShellInvalidMinutes("soon".to_string())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_drives_the_session() {
        let mut shield = FocusShield::from_config(&FocusConfig::default(), RewardCatalog::default()).unwrap();

        assert_eq!(execute(&mut shield, ShellCommand::Preset(15)), ControlFlow::Continue(()));
        assert_eq!(shield.status().configured_seconds, 900);

        execute(&mut shield, ShellCommand::Start(None));
        assert_eq!(shield.timer().state(), SessionState::Running);
        assert_eq!(shield.timer().remaining_seconds(), 900);

        // Invalid commands for the current state leave it untouched
        execute(&mut shield, ShellCommand::Start(Some(25)));
        execute(&mut shield, ShellCommand::Resume);
        execute(&mut shield, ShellCommand::Reset);
        assert_eq!(shield.timer().state(), SessionState::Running);

        execute(&mut shield, ShellCommand::Pause);
        assert_eq!(shield.timer().state(), SessionState::Paused);

        execute(&mut shield, ShellCommand::Stop);
        assert_eq!(shield.timer().state(), SessionState::Idle);
        assert!(!shield.is_ticking());

        execute(&mut shield, ShellCommand::Claim("1".to_string()));
        assert_eq!(shield.balance(), 1150);
        execute(&mut shield, ShellCommand::Claim("6".to_string()));
        assert_eq!(shield.balance(), 1150);

        assert_eq!(execute(&mut shield, ShellCommand::Blocked), ControlFlow::Continue(()));
        assert_eq!(execute(&mut shield, ShellCommand::Quit), ControlFlow::Break(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_skips_lines_that_are_not_utf8() {
        let mut shield = FocusShield::from_config(&FocusConfig::default(), RewardCatalog::default()).unwrap();
        let input: &[u8] = b"\xff\xfe\npreset 45\nstart\npause\nquit\n";

        run(&mut shield, input).await;

        // Every command after the bad line still ran; quitting stops the session
        assert_eq!(shield.timer().preset(), Preset::Deep);
        assert_eq!(shield.timer().state(), SessionState::Idle);
        assert_eq!(shield.stats().sessions_stopped, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_ends_when_input_closes_while_idle() {
        let mut shield = FocusShield::from_config(&FocusConfig::default(), RewardCatalog::default()).unwrap();
        let input: &[u8] = b"preset 15\n";

        run(&mut shield, input).await;

        assert_eq!(shield.timer().preset(), Preset::Quick);
        assert!(!shield.is_ticking());
    }
}
