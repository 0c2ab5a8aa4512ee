//! Core library modules for focus-shield.
//!
//! ## Layout
//!
//! - **Session core**: [`timer`] state machine, [`preset`] durations,
//!   [`ticker`] tick source and the [`shield`] driver tying them together
//! - **Points**: [`points`] balance store, [`rewards`] catalog, [`stats`]
//! - **Blocking**: [`blocklist`] of distracting sites shown while focusing
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`], [`error`]
//! - **Presentation**: [`formatter`], [`view`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use focus_shield::libs::config::FocusConfig;
//! use focus_shield::libs::preset::Preset;
//! use focus_shield::libs::rewards::RewardCatalog;
//! use focus_shield::libs::shield::FocusShield;
//!
//! # async fn run() -> Result<(), focus_shield::libs::error::FocusError> {
//! let mut shield = FocusShield::from_config(&FocusConfig::default(), RewardCatalog::default())?;
//! shield.start(Preset::Pomodoro)?;
//! let outcome = shield.recv_tick().await;
//! # Ok(())
//! # }
//! ```

pub mod blocklist;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod points;
pub mod preset;
pub mod rewards;
pub mod shield;
pub mod stats;
pub mod ticker;
pub mod timer;
pub mod view;
