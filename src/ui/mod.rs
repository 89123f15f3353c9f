pub mod colors;
pub mod details;
pub mod footer;
pub mod header;
pub mod popups;
pub mod table;
pub mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title + filter
            Constraint::Min(0),    // Table + details
            Constraint::Length(1), // Footer
        ])
        .split(area);

    header::render_header(f, app, main_layout[0]);

    // Side panel collapses on narrow terminals
    let detail_width = if main_layout[1].width >= 110 { 38 } else { 0 };
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(detail_width)])
        .split(main_layout[1]);

    table::render_table(f, app, body[0]);
    if detail_width > 0 {
        details::render_details(f, app, body[1]);
    }

    footer::render_footer(f, app, main_layout[2]);

    // Overlays
    if app.state_loading {
        popups::render_loading(f, app.loading_tick, area);
    }
    if let Some(error) = &app.error {
        popups::render_error_popup(f, area, error);
    }
}
