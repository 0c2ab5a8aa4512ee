//! Interactive focus shell.
//!
//! Opens a line-oriented prompt on stdin while the countdown runs in the
//! background. User input and ticks are multiplexed with `tokio::select!`,
//! so the clock keeps moving while the shell waits for a command.
//!
//! The point balance starts from the configured `starting_points` and lives
//! only for the duration of the shell.
//!
//! # Examples
//!
//! ```bash
//! # Open the shell with the configured default preset
//! focus-shield focus
//!
//! # Start a 45 minute session right away
//! focus-shield focus --minutes 45 --start
//! ```

use crate::libs::config::Config;
use crate::libs::data_storage::APP_NAME;
use crate::libs::formatter::{format_clock, format_progress_bar};
use crate::libs::messages::Message;
use crate::libs::points::PointStore;
use crate::libs::preset::Preset;
use crate::libs::shield::FocusShield;
use crate::libs::timer::{SessionState, TickOutcome};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_debug, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::io::ErrorKind;
use std::ops::ControlFlow;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const PROGRESS_BAR_WIDTH: usize = 20;

#[derive(Debug, Args)]
pub struct FocusArgs {
    /// Session length in minutes
    ///
    /// Must be one of the presets: 15, 25, 45 or 60. Overrides the
    /// configured default for this shell.
    #[arg(long, short, help = "Session length in minutes (15, 25, 45 or 60)")]
    minutes: Option<u32>,

    /// Start the countdown as soon as the shell opens
    #[arg(long, short, help = "Start the countdown immediately")]
    start: bool,
}

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Optional length in minutes; the selected preset otherwise.
    Start(Option<u32>),
    Preset(u32),
    Pause,
    Resume,
    Stop,
    Reset,
    Status,
    Rewards,
    Claim(String),
    Stats,
    Blocked,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = Message;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        // An empty line just shows the clock
        let Some(command) = parts.next() else {
            return Ok(ShellCommand::Status);
        };
        let command = command.to_lowercase();
        let argument = parts.next();

        match command.as_str() {
            "start" => Ok(ShellCommand::Start(argument.map(parse_minutes).transpose()?)),
            "preset" => {
                let minutes = argument.ok_or_else(|| Message::ShellMissingArgument(command.clone()))?;
                Ok(ShellCommand::Preset(parse_minutes(minutes)?))
            }
            "pause" => Ok(ShellCommand::Pause),
            "resume" => Ok(ShellCommand::Resume),
            "stop" => Ok(ShellCommand::Stop),
            "reset" => Ok(ShellCommand::Reset),
            "status" => Ok(ShellCommand::Status),
            "rewards" => Ok(ShellCommand::Rewards),
            "claim" => {
                let id = argument.ok_or_else(|| Message::ShellMissingArgument(command.clone()))?;
                Ok(ShellCommand::Claim(id.to_string()))
            }
            "stats" => Ok(ShellCommand::Stats),
            "blocked" | "sites" => Ok(ShellCommand::Blocked),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(Message::ShellUnknownCommand(other.to_string())),
        }
    }
}

fn parse_minutes(value: &str) -> Result<u32, Message> {
    value
        .trim_end_matches('m')
        .parse::<u32>()
        .map_err(|_| Message::ShellInvalidMinutes(value.to_string()))
}

pub async fn cmd(args: FocusArgs) -> Result<()> {
    let config = Config::read()?;
    let mut shield = FocusShield::from_config(&config.focus(), config.catalog())
        .map_err(|e| msg_error_anyhow!(Message::FocusFailed(e.to_string())))?
        .with_blocklist(config.blocklist());

    if let Some(minutes) = args.minutes {
        match Preset::from_minutes(minutes) {
            Ok(preset) => shield.select_preset(preset)?,
            Err(e) => msg_bail_anyhow!(Message::FocusFailed(e.to_string())),
        }
    }

    msg_print!(Message::ShellWelcome(APP_NAME.to_string()), true);
    print_status(&shield);
    if args.start && execute(&mut shield, ShellCommand::Start(None)).is_break() {
        msg_print!(Message::ShellGoodbye);
        return Ok(());
    }

    run(&mut shield, BufReader::new(tokio::io::stdin())).await;
    Ok(())
}

/// Reads commands from `input` until `quit`, or until input ends and no
/// countdown is running. Ticks are applied while waiting for a line.
pub async fn run<S, R>(shield: &mut FocusShield<S>, input: R)
where
    S: PointStore,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => match line.parse::<ShellCommand>() {
                        Ok(command) => {
                            if execute(shield, command).is_break() {
                                break;
                            }
                        }
                        Err(message) => msg_warning!(message),
                    },
                    Ok(None) => stdin_open = false,
                    // A line that is not UTF-8 is skipped; any other read error closes input
                    Err(e) => {
                        msg_warning!(Message::ShellInputError(e.to_string()));
                        if e.kind() != ErrorKind::InvalidData {
                            stdin_open = false;
                        }
                    }
                }
            }
            outcome = shield.recv_tick() => report_tick(outcome),
        }

        // Without input only a running countdown can make progress
        if !stdin_open && shield.timer().state() != SessionState::Running {
            break;
        }
    }

    shield.stop();
    msg_print!(Message::ShellGoodbye);
}

/// Applies one shell command. `Break` leaves the shell.
pub fn execute<S: PointStore>(shield: &mut FocusShield<S>, command: ShellCommand) -> ControlFlow<()> {
    match command {
        ShellCommand::Start(minutes) => {
            let started = match minutes {
                Some(minutes) => Preset::from_minutes(minutes).and_then(|preset| shield.start(preset)),
                None => shield.start_selected(),
            };
            match started {
                Ok(()) => {
                    let status = shield.status();
                    msg_success!(Message::SessionStarted {
                        preset: status.preset.to_string(),
                        clock: format_clock(status.remaining_seconds),
                    });
                    msg_info!(Message::BlockingActive);
                }
                Err(e) => msg_error!(Message::FocusFailed(e.to_string())),
            }
        }
        ShellCommand::Preset(minutes) => match Preset::from_minutes(minutes).and_then(|preset| shield.select_preset(preset)) {
            Ok(()) => msg_success!(Message::PresetSelected(shield.timer().preset().to_string())),
            Err(e) => msg_error!(Message::FocusFailed(e.to_string())),
        },
        ShellCommand::Pause => {
            if shield.pause() {
                msg_success!(Message::SessionPaused(format_clock(shield.timer().remaining_seconds())));
            } else {
                msg_warning!(Message::NothingToPause);
            }
        }
        ShellCommand::Resume => {
            if shield.resume() {
                msg_success!(Message::SessionResumed(format_clock(shield.timer().remaining_seconds())));
            } else {
                msg_warning!(Message::NothingToResume);
            }
        }
        ShellCommand::Stop => {
            let was_completed = shield.timer().state() == SessionState::Completed;
            if !shield.stop() {
                msg_warning!(Message::NothingToStop);
            } else if was_completed {
                msg_success!(Message::SessionReset);
            } else {
                msg_success!(Message::SessionStopped);
                msg_info!(Message::BlockingInactive);
            }
        }
        ShellCommand::Reset => {
            if shield.reset() {
                msg_success!(Message::SessionReset);
            } else {
                msg_warning!(Message::NothingToReset);
            }
        }
        ShellCommand::Status => print_status(shield),
        ShellCommand::Rewards => {
            msg_print!(Message::RewardsTitle, true);
            View::rewards(shield.catalog(), shield.balance());
            msg_print!(Message::PointsBalance(shield.balance()));
        }
        ShellCommand::Claim(id) => match shield.claim(&id) {
            Ok(reward) => msg_success!(Message::RewardClaimed {
                name: reward.name,
                balance: shield.balance(),
            }),
            Err(e) => msg_error!(Message::FocusFailed(e.to_string())),
        },
        ShellCommand::Stats => {
            msg_print!(Message::StatsTitle, true);
            View::stats(shield.stats(), shield.blocklist());
        }
        ShellCommand::Blocked => {
            msg_print!(Message::BlockedSitesTitle, true);
            View::blocked_sites(shield.blocklist());
            if shield.status().blocking {
                msg_info!(Message::BlockingActive);
            } else {
                msg_info!(Message::BlockingInactive);
            }
        }
        ShellCommand::Help => msg_print!(Message::ShellHelp, true),
        ShellCommand::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}

fn report_tick(outcome: TickOutcome) {
    match outcome {
        TickOutcome::Counted { remaining } => {
            msg_debug!(format!("tick, {} s remaining", remaining));
            if remaining % 60 == 0 {
                msg_info!(Message::SessionRemaining(format_clock(remaining)));
            }
        }
        TickOutcome::Completed { credited, balance } => {
            msg_success!(
                Message::SessionCompleted {
                    credited,
                    balance,
                    at: Local::now().format("%H:%M").to_string(),
                },
                true
            );
        }
        TickOutcome::Ignored => {}
    }
}

fn print_status<S: PointStore>(shield: &FocusShield<S>) {
    let status = shield.status();
    // Idle shows the length of the session about to start
    let clock = match status.state {
        SessionState::Idle => format_clock(status.configured_seconds),
        _ => format_clock(status.remaining_seconds),
    };

    msg_print!(Message::SessionStatus {
        state: status.state.to_string(),
        clock,
        bar: format_progress_bar(status.progress, PROGRESS_BAR_WIDTH),
        balance: status.balance,
    });
    if status.blocking {
        msg_info!(Message::BlockingActive);
    } else {
        msg_info!(Message::BlockingInactive);
    }
}
