//! Time formatting for the focus clock and the statistics panel.
//!
//! ## Formats
//!
//! - **Clock**: `MM:SS`, minutes zero-padded and never wrapped into hours,
//!   so a full hour session reads `60:00`
//! - **Focus time**: `1h 45m`, or `40m` under an hour; seconds are dropped
//! - **Progress bar**: fixed-width `[#####-----]` of the remaining share
//!
//! ## Examples
//!
//! ```rust
//! use chrono::Duration;
//! use focus_shield::libs::formatter::{format_clock, format_focus_time};
//!
//! assert_eq!(format_clock(25 * 60), "25:00");
//! assert_eq!(format_clock(59), "00:59");
//! assert_eq!(format_focus_time(&Duration::minutes(105)), "1h 45m");
//! ```

use chrono::Duration;

/// Formats a countdown as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Formats accumulated focus time as `Hh Mm`. Negative durations read as `0m`.
pub fn format_focus_time(duration: &Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Renders `fraction` (clamped to `0.0..=1.0`) as a bar of `width` cells.
pub fn format_progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
