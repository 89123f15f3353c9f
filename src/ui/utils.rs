use crate::subscription::SubscriptionState;
use crate::ui::colors::{STATUS_ACTIVE, STATUS_INACTIVE, STATUS_UNKNOWN};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn state_color(state: SubscriptionState) -> Color {
    match state {
        SubscriptionState::Active => STATUS_ACTIVE,
        SubscriptionState::Inactive => STATUS_INACTIVE,
        SubscriptionState::Unknown => STATUS_UNKNOWN,
    }
}

/// Human "time ago" for the last roster load
pub fn format_age(secs_ago: i64) -> String {
    let mins = secs_ago / 60;
    let hours = mins / 60;
    if secs_ago < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}
