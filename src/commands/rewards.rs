//! Reward catalog listing.
//!
//! Shows every reward with its cost and whether it could be claimed with the
//! given balance. The balance defaults to the configured starting points,
//! which is what a fresh focus shell begins with.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RewardsArgs {
    /// Balance to check the rewards against
    #[arg(long, short, help = "Points balance to compare against (defaults to the starting points)")]
    balance: Option<u64>,
}

pub fn cmd(args: RewardsArgs) -> Result<()> {
    let config = Config::read()?;
    let balance = args.balance.unwrap_or(config.focus().starting_points);

    msg_print!(Message::RewardsTitle, true);
    View::rewards(&config.catalog(), balance);
    msg_print!(Message::PointsBalance(balance));

    Ok(())
}
