#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted {
        preset: String,
        clock: String,
    },
    SessionPaused(String),  // remaining clock
    SessionResumed(String), // remaining clock
    SessionStopped,
    SessionReset,
    SessionCompleted {
        credited: u64,
        balance: u64,
        at: String,
    },
    SessionRemaining(String), // remaining clock
    SessionStatus {
        state: String,
        clock: String,
        bar: String,
        balance: u64,
    },
    NothingToPause,
    NothingToResume,
    NothingToStop,
    NothingToReset,
    PresetSelected(String),

    // === BLOCKING MESSAGES ===
    BlockingActive,
    BlockingInactive,
    BlockedSitesTitle,

    // === POINTS & REWARDS MESSAGES ===
    PointsBalance(u64),
    RewardClaimed {
        name: String,
        balance: u64,
    },
    RewardStatusClaimable,
    RewardStatusNotEnoughPoints,
    RewardStatusLocked,
    RewardsTitle,
    PresetsTitle,
    StatsTitle,

    // === SHELL MESSAGES ===
    ShellWelcome(String), // app name
    ShellHelp,
    ShellUnknownCommand(String),
    ShellMissingArgument(String), // command name
    ShellInvalidMinutes(String),
    ShellGoodbye,
    ShellInputError(String), // io error
    FocusFailed(String), // error message

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigParseError(String), // path
    ConfigModuleFocus,
    ConfigModuleRewards,
    ConfigRewardsReset,
    ConfigModuleBlockedSites,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDefaultPreset,
    PromptStartingPoints,
    PromptCompletionReward,
    PromptTickInterval,
    PromptResetRewards,
    PromptBlockedSites,
}
