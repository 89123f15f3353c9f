use crate::app::{App, ProbeState};
use crate::ui::colors::{DARK_GREEN, HIGHLIGHT_BG, MATRIX_GREEN, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::state_color;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table},
    Frame,
};

const COLUMNS: [&str; 5] = ["Account", "Username", "Password", "Domain", "Endpoint"];

fn probe_line(state: Option<&ProbeState>) -> Line<'static> {
    match state {
        Some(ProbeState::Ready(status)) => Line::from(vec![
            Span::styled("  └ ", Style::default().fg(TEXT_DIM)),
            Span::styled(
                status.state.display_name(),
                Style::default().fg(state_color(status.state)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  exp {}  cons {}", status.expiry, status.connections),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]),
        Some(ProbeState::Pending { .. }) => Line::from(Span::styled(
            "  └ probing...",
            Style::default().fg(TEXT_DIM),
        )),
        None => Line::from(Span::styled(
            "  └ press p",
            Style::default().fg(TEXT_DIM),
        )),
    }
}

pub fn render_table(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" roster ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DARK_GREEN));

    if app.rows.is_empty() {
        let hint = if app.state_loading {
            "loading roster..."
        } else {
            "no roster loaded, press l to load"
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(TEXT_DIM))).block(block),
            area,
        );
        return;
    }

    let header = TableRow::new(COLUMNS.map(|c| {
        Cell::from(c).style(Style::default().fg(MATRIX_GREEN).add_modifier(Modifier::BOLD))
    }))
    .bottom_margin(1);

    let rows: Vec<TableRow> = app
        .filtered
        .iter()
        .filter_map(|&i| app.rows.get(i).map(|row| (i, row)))
        .map(|(i, row)| {
            let expanded = app.expanded.contains(&i);
            let cells = row.fields().into_iter().enumerate().map(|(col, value)| {
                let mut lines = vec![Line::from(Span::styled(
                    value.to_string(),
                    Style::default().fg(if col == 0 { TEXT_PRIMARY } else { TEXT_SECONDARY }),
                ))];
                if expanded && col == 0 {
                    lines.push(probe_line(app.probe_state(i)));
                }
                Cell::from(Text::from(lines))
            });
            TableRow::new(cells).height(if expanded { 2 } else { 1 })
        })
        .collect();

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(20),
        Constraint::Percentage(26),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(HIGHLIGHT_BG)
                .fg(MATRIX_GREEN)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" ▎");

    f.render_stateful_widget(table, area, &mut app.table_state);
}
