//! Configuration management for focus-shield.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory resolved by [`DataStorage`]. A missing file is not
//! an error: every section falls back to its defaults, so the timer works
//! without any setup.
//!
//! ## Sections
//!
//! - **focus**: default preset, starting balance, completion reward and tick
//!   period
//! - **rewards**: replacement reward catalog; the built-in one is used when
//!   absent
//! - **blocked_sites**: distracting sites listed on the focus panel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use focus_shield::libs::config::Config;
//!
//! let config = Config::read()?;
//! let focus = config.focus();
//! println!("Sessions start with {} points", focus.starting_points);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::blocklist::{BlockList, BlockedSite};
use super::data_storage::DataStorage;
use super::error::FocusResult;
use super::preset::Preset;
use super::rewards::{Reward, RewardCatalog};
use super::timer::COMPLETION_REWARD;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Selectable section in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FocusConfig {
    /// Preset selected when the focus shell opens, in minutes.
    pub default_preset_minutes: u32,

    /// Balance the in-memory point store starts from on every run.
    pub starting_points: u64,

    /// Points credited per completed session. Not scaled by duration.
    pub completion_reward: u64,

    /// Length of one countdown tick in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        FocusConfig {
            default_preset_minutes: Preset::default().minutes(),
            starting_points: 1250,
            completion_reward: COMPLETION_REWARD,
            tick_interval_ms: 1000,
        }
    }
}

impl FocusConfig {
    pub fn preset(&self) -> FocusResult<Preset> {
        Preset::from_minutes(self.default_preset_minutes)
    }

    /// Tick period, never shorter than one millisecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Vec<Reward>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_sites: Option<Vec<BlockedSite>>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError(config_file_path.display().to_string()).to_string())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn focus(&self) -> FocusConfig {
        self.focus.clone().unwrap_or_default()
    }

    pub fn catalog(&self) -> RewardCatalog {
        match &self.rewards {
            Some(rewards) => RewardCatalog::new(rewards.clone()),
            None => RewardCatalog::default(),
        }
    }

    pub fn blocklist(&self) -> BlockList {
        match &self.blocked_sites {
            Some(sites) => BlockList::new(sites.clone()),
            None => BlockList::default(),
        }
    }

    /// Interactive setup wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "focus".to_string(),
                name: "Focus timer".to_string(),
            },
            ConfigModule {
                key: "rewards".to_string(),
                name: "Rewards".to_string(),
            },
            ConfigModule {
                key: "blocked_sites".to_string(),
                name: "Blocked sites".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "focus" => {
                    let default = config.focus();
                    msg_print!(Message::ConfigModuleFocus);

                    let presets: Vec<String> = Preset::ALL.iter().map(|preset| preset.to_string()).collect();
                    let current = Preset::ALL
                        .iter()
                        .position(|preset| preset.minutes() == default.default_preset_minutes)
                        .unwrap_or(1);
                    let preset_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPreset.to_string())
                        .items(&presets)
                        .default(current)
                        .interact()?;

                    config.focus = Some(FocusConfig {
                        default_preset_minutes: Preset::ALL[preset_index].minutes(),
                        starting_points: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStartingPoints.to_string())
                            .default(default.starting_points)
                            .interact_text()?,
                        completion_reward: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCompletionReward.to_string())
                            .default(default.completion_reward)
                            .interact_text()?,
                        tick_interval_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickInterval.to_string())
                            .default(default.tick_interval_ms)
                            .interact_text()?,
                    });
                }
                "rewards" => {
                    msg_print!(Message::ConfigModuleRewards);
                    let reset = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptResetRewards.to_string())
                        .default(config.rewards.is_some())
                        .interact()?;
                    if reset {
                        config.rewards = None;
                        msg_print!(Message::ConfigRewardsReset);
                    }
                }
                "blocked_sites" => {
                    msg_print!(Message::ConfigModuleBlockedSites);
                    let current: Vec<String> = config.blocklist().iter().map(|site| site.url.clone()).collect();
                    let sites: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptBlockedSites.to_string())
                        .default(current.join(", "))
                        .interact_text()?;
                    let previous = config.blocklist();
                    config.blocked_sites = Some(
                        sites
                            .split(',')
                            .map(str::trim)
                            .filter(|url| !url.is_empty())
                            .map(|url| match previous.iter().find(|site| site.url == url) {
                                Some(site) => site.clone(),
                                None => BlockedSite::new(url, "Other", 0),
                            })
                            .collect(),
                    );
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
