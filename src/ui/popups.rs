use crate::errors::DashboardError;
use crate::ui::colors::{DARK_GREEN, MATRIX_GREEN, SOFT_GREEN, TEXT_DIM};
use crate::ui::utils::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_loading(f: &mut Frame, tick: u64, area: Rect) {
    let popup_area = centered_rect(40, 20, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SOFT_GREEN));

    let spinner_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let spinner = spinner_chars[(tick % spinner_chars.len() as u64) as usize];
    let dots = ".".repeat(((tick / 8) % 4) as usize);

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(MATRIX_GREEN)),
            Span::styled(format!("Fetching roster{}", dots), Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled("timeout 10s", Style::default().fg(TEXT_DIM))),
    ];

    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        popup_area,
    );
}

pub fn render_error_popup(f: &mut Frame, area: Rect, error: &DashboardError) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", error.title()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Red));

    let area = centered_rect(60, 30, area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(error.diagnostics())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true }),
        layout[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled("Esc / Enter to dismiss", Style::default().fg(DARK_GREEN)))
            .alignment(Alignment::Center),
        layout[1],
    );
}
