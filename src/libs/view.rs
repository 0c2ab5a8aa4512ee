use super::blocklist::BlockList;
use super::formatter::{format_clock, format_focus_time};
use super::messages::Message;
use super::preset::Preset;
use super::rewards::RewardCatalog;
use super::stats::SessionStats;
use chrono::Duration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn rewards_table(catalog: &RewardCatalog, balance: u64) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "REWARD", "DESCRIPTION", "COST", "STATUS"]);
        for reward in catalog.iter() {
            let status = if !reward.unlocked {
                Message::RewardStatusLocked
            } else if balance >= reward.points {
                Message::RewardStatusClaimable
            } else {
                Message::RewardStatusNotEnoughPoints
            };
            table.add_row(row![reward.id, reward.name, reward.description, reward.points, status]);
        }

        table
    }

    pub fn presets_table(selected: Preset) -> Table {
        let mut table = Table::new();

        table.add_row(row!["PRESET", "CLOCK", "SELECTED"]);
        for preset in Preset::ALL {
            let marker = if preset == selected { "*" } else { "" };
            table.add_row(row![preset, format_clock(preset.seconds()), marker]);
        }

        table
    }

    pub fn blocked_sites_table(blocklist: &BlockList) -> Table {
        let mut table = Table::new();

        table.add_row(row!["SITE", "CATEGORY", "BLOCKS"]);
        for site in blocklist.iter() {
            table.add_row(row![site.url, site.category, site.blocked_count]);
        }

        table
    }

    pub fn stats_table(stats: &SessionStats, blocklist: &BlockList) -> Table {
        let mut table = Table::new();
        let focus_time = Duration::seconds(stats.focus_seconds as i64);

        table.add_row(row!["Focus Sessions", stats.sessions_completed]);
        table.add_row(row!["Stopped Sessions", stats.sessions_stopped]);
        table.add_row(row!["Total Focus Time", format_focus_time(&focus_time)]);
        table.add_row(row!["Sites Blocked", blocklist.total_blocks()]);
        table.add_row(row!["Points Earned", stats.points_earned]);
        table.add_row(row!["Points Spent", stats.points_spent]);
        table.add_row(row!["Rewards Claimed", stats.rewards_claimed]);

        table
    }

    pub fn rewards(catalog: &RewardCatalog, balance: u64) {
        Self::rewards_table(catalog, balance).printstd();
    }

    pub fn presets(selected: Preset) {
        Self::presets_table(selected).printstd();
    }

    pub fn blocked_sites(blocklist: &BlockList) {
        Self::blocked_sites_table(blocklist).printstd();
    }

    pub fn stats(stats: &SessionStats, blocklist: &BlockList) {
        Self::stats_table(stats, blocklist).printstd();
    }
}
