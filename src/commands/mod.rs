pub mod focus;
pub mod init;
pub mod presets;
pub mod rewards;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Open the focus shell and run focus sessions")]
    Focus(focus::FocusArgs),
    #[command(about = "List focus session presets")]
    Presets,
    #[command(about = "List rewards that points can buy")]
    Rewards(rewards::RewardsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Focus(args) => focus::cmd(args).await,
            Commands::Presets => presets::cmd(),
            Commands::Rewards(args) => rewards::cmd(args),
        }
    }
}
