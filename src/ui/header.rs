use crate::app::{App, InputMode};
use crate::ui::colors::{DARK_GREEN, MATRIX_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::format_age;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(area);

    let mut spans = vec![
        Span::styled("  maxplayer", Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD)),
        Span::styled("-roster", Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}/{} rows", app.filtered.len(), app.rows.len()),
            Style::default().fg(TEXT_SECONDARY),
        ),
        Span::styled(format!("  {}", app.config.roster_url), Style::default().fg(TEXT_DIM)),
    ];
    if let Some(last) = app.last_loaded {
        let age = chrono::Utc::now().timestamp() - last;
        spans.push(Span::styled(
            format!("  loaded {}", format_age(age)),
            Style::default().fg(TEXT_DIM),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(DARK_GREEN)),
    );
    f.render_widget(title, chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let border = if editing { MATRIX_GREEN } else { DARK_GREEN };
    let value = app.filter.value();
    let text = if value.is_empty() && !editing {
        Span::styled("press / to filter", Style::default().fg(TEXT_DIM))
    } else {
        Span::styled(value.to_string(), Style::default().fg(TEXT_PRIMARY))
    };

    let filter = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(" filter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(filter, chunks[1]);

    if editing {
        let cursor = app.filter.visual_cursor() as u16;
        let max_x = chunks[1].right().saturating_sub(2);
        f.set_cursor_position(((chunks[1].x + 1 + cursor).min(max_x), chunks[1].y + 1));
    }
}
