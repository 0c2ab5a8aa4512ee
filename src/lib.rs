//! # Focus Shield
//!
//! A command-line focus timer. Sessions run Pomodoro-style countdowns from
//! a fixed set of presets; finishing one credits points that can be spent on
//! rewards.
//!
//! ## Features
//!
//! - **Focus Sessions**: 15, 25, 45 or 60 minute countdowns with pause, resume and stop
//! - **Points**: a fixed reward for every completed session, credited exactly once
//! - **Rewards**: a catalog of treats bought with earned points
//! - **Stats**: completed sessions, focus time and points for the current run
//!
//! ## Usage
//!
//! ```rust,no_run
//! use focus_shield::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
