//! Display implementation for focus-shield messages.
//!
//! All user-facing text lives here so command code only deals with typed
//! [`Message`] values. Parameterised variants interpolate their fields.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === SESSION MESSAGES ===
            Message::SessionStarted { preset, clock } => format!("Focus session started ({}), {} to go. Stay focused!", preset, clock),
            Message::SessionPaused(clock) => format!("Session paused with {} left", clock),
            Message::SessionResumed(clock) => format!("Session resumed, {} left", clock),
            Message::SessionStopped => "Session stopped. No points this time".to_string(),
            Message::SessionReset => "Session cleared, ready for the next one".to_string(),
            Message::SessionCompleted { credited, balance, at } => {
                format!("Focus session completed at {}! +{} points, balance {}", at, credited, balance)
            }
            Message::SessionRemaining(clock) => format!("{} remaining", clock),
            Message::SessionStatus { state, clock, bar, balance } => format!("{} {} {} | {} points", clock, bar, state, balance),
            Message::NothingToPause => "No running session to pause".to_string(),
            Message::NothingToResume => "No paused session to resume".to_string(),
            Message::NothingToStop => "No session to stop".to_string(),
            Message::NothingToReset => "Only a completed session can be reset".to_string(),
            Message::PresetSelected(preset) => format!("Preset set to {}", preset),

            // === BLOCKING MESSAGES ===
            Message::BlockingActive => "Blocking Mode Active: distracting websites are off limits. Stay focused!".to_string(),
            Message::BlockingInactive => "Blocking Mode Inactive: start a focus session to activate it".to_string(),
            Message::BlockedSitesTitle => "Blocked Sites Today".to_string(),

            // === POINTS & REWARDS MESSAGES ===
            Message::PointsBalance(points) => format!("{} points", points),
            Message::RewardClaimed { name, balance } => format!("Reward claimed: {}! Enjoy! Balance {}", name, balance),
            Message::RewardStatusClaimable => "Claim Reward".to_string(),
            Message::RewardStatusNotEnoughPoints => "Not enough points".to_string(),
            Message::RewardStatusLocked => "Locked".to_string(),
            Message::RewardsTitle => "Available Rewards".to_string(),
            Message::PresetsTitle => "Focus Presets".to_string(),
            Message::StatsTitle => "Today's Stats".to_string(),

            // === SHELL MESSAGES ===
            Message::ShellWelcome(app) => format!("{} focus shell. Type 'help' for commands", app),
            Message::ShellHelp => [
                "start [minutes]  start a session (15, 25, 45 or 60)",
                "preset <minutes> choose the next session length",
                "pause | resume   hold or continue the countdown",
                "stop             abandon the session without points",
                "reset            clear a completed session",
                "status           show the clock and balance",
                "rewards          list rewards",
                "claim <id>       spend points on a reward",
                "stats            show today's stats",
                "blocked          list blocked sites",
                "quit             leave the shell",
            ]
            .join("\n"),
            Message::ShellUnknownCommand(command) => format!("Unknown command '{}'", command),
            Message::ShellMissingArgument(command) => format!("'{}' needs an argument", command),
            Message::ShellInvalidMinutes(value) => format!("'{}' is not a number of minutes", value),
            Message::ShellGoodbye => "Bye! Keep the streak going".to_string(),
            Message::ShellInputError(error) => format!("Could not read input: {}", error),
            Message::FocusFailed(error) => error.clone(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigParseError(path) => format!("Failed to parse configuration at {}", path),
            Message::ConfigModuleFocus => "Focus timer settings".to_string(),
            Message::ConfigModuleRewards => "Reward catalog settings".to_string(),
            Message::ConfigRewardsReset => "Reward catalog reset to defaults".to_string(),
            Message::ConfigModuleBlockedSites => "Blocked sites settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDefaultPreset => "Default session length".to_string(),
            Message::PromptStartingPoints => "Starting points balance".to_string(),
            Message::PromptCompletionReward => "Points per completed session".to_string(),
            Message::PromptTickInterval => "Tick interval (ms)".to_string(),
            Message::PromptResetRewards => "Reset the reward catalog to the built-in rewards?".to_string(),
            Message::PromptBlockedSites => "Blocked sites (comma separated)".to_string(),
        };
        write!(f, "{}", s)
    }
}
