use focus_shield::commands::Cli;
use focus_shield::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    Cli::menu().await
}

/// Installs a tracing subscriber only in debug mode; plain runs print
/// messages directly.
fn init_logging() {
    if !is_debug_mode() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("focus_shield=debug")))
        .with_target(true)
        .with_line_number(true)
        .init();
}
