use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

/// Lists the presets, marking the configured default.
pub fn cmd() -> Result<()> {
    let selected = Config::read()?.focus().preset().unwrap_or_default();

    msg_print!(Message::PresetsTitle, true);
    View::presets(selected);

    Ok(())
}
