//! Fixed focus durations offered before a session starts.

use super::error::{FocusError, FocusResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// 15 minutes
    Quick,
    /// 25 minutes, the classic Pomodoro
    #[default]
    Pomodoro,
    /// 45 minutes
    Deep,
    /// 60 minutes
    Hour,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Quick, Preset::Pomodoro, Preset::Deep, Preset::Hour];

    pub fn minutes(self) -> u32 {
        match self {
            Preset::Quick => 15,
            Preset::Pomodoro => 25,
            Preset::Deep => 45,
            Preset::Hour => 60,
        }
    }

    pub fn seconds(self) -> u32 {
        self.minutes() * 60
    }

    pub fn from_minutes(minutes: u32) -> FocusResult<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.minutes() == minutes)
            .ok_or(FocusError::InvalidPreset(minutes.saturating_mul(60)))
    }

    pub fn from_seconds(seconds: u32) -> FocusResult<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.seconds() == seconds)
            .ok_or(FocusError::InvalidPreset(seconds))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.minutes())
    }
}
