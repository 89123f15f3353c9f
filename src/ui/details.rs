use crate::app::{App, ProbeState};
use crate::ui::colors::{DARK_GREEN, MATRIX_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::state_color;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(TEXT_DIM)),
        Span::styled(value, Style::default().fg(TEXT_PRIMARY)),
    ])
}

pub fn render_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DARK_GREEN));

    let (Some(index), Some(row)) = (app.selected_row_index(), app.selected_row()) else {
        f.render_widget(
            Paragraph::new(Span::styled("no row selected", Style::default().fg(TEXT_DIM))).block(block),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            row.account_name.clone(),
            Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("username", row.login.clone().unwrap_or_else(|| "-".to_string())),
        field("password", row.secret.clone().unwrap_or_else(|| "-".to_string())),
        field("domain", row.domain.clone()),
        field("endpoint", row.endpoint_base.clone()),
        Line::from(""),
        Line::from(Span::styled("subscription", Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::BOLD))),
    ];

    match app.probe_state(index) {
        Some(ProbeState::Ready(status)) => {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", "status"), Style::default().fg(TEXT_DIM)),
                Span::styled(
                    status.state.display_name(),
                    Style::default().fg(state_color(status.state)).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(field("expires", status.expiry.to_string()));
            lines.push(field("conns", status.connections.to_string()));
            if status.is_unavailable() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "panel unreachable or answer unreadable",
                    Style::default().fg(TEXT_DIM),
                )));
            }
        }
        Some(ProbeState::Pending { .. }) => {
            lines.push(Line::from(Span::styled("probing...", Style::default().fg(TEXT_DIM))));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "press p or Enter to check",
                Style::default().fg(TEXT_DIM),
            )));
        }
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
