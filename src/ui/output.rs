use crate::ui::{Icons, Theme};
use owo_colors::OwoColorize;

/// Banner printed above the table
pub fn banner_line(theme: &Theme) -> String {
    format!("{} {}", Icons::CHEST, "Tracked Chests: ".style(theme.header.clone()))
}

/// `Error: <message>` line for a failed action
pub fn error_line(theme: &Theme, message: &str) -> String {
    format!(
        "{} {}",
        Icons::CROSS,
        format!("Error: {}", message).style(theme.error.clone())
    )
}

/// Message shown when a prompt rejects its input
pub fn retry_line(theme: &Theme, message: &str) -> String {
    format!("{} {}", Icons::WARN, message.style(theme.warn.clone()))
}

pub fn acknowledge_line(theme: &Theme) -> String {
    "Press enter to continue...".style(theme.dim.clone()).to_string()
}
