use ratatui::style::{Color, Modifier, Style};

use crate::model::{ItemStatus, Severity};

pub(super) fn severity_style(severity: &Severity) -> Style {
    match severity {
        Severity::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Severity::High => Style::default().fg(Color::LightRed),
        Severity::Medium => Style::default().fg(Color::Blue),
        Severity::Low => Style::default().fg(Color::Gray),
        Severity::Other(_) => Style::default(),
    }
}

pub(super) fn status_style(status: ItemStatus) -> Style {
    match status {
        ItemStatus::Implemented => Style::default().fg(Color::Green),
        ItemStatus::InProgress => Style::default().fg(Color::Yellow),
        ItemStatus::NotApplicable | ItemStatus::RiskAccepted => Style::default().fg(Color::Gray),
        ItemStatus::NotStarted => Style::default(),
    }
}

/// Controls that ignore input render dimmed.
pub(super) fn locked(style: Style, is_locked: bool) -> Style {
    if is_locked {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/style_tests.rs"]
mod tests;
