use crate::app::{App, InputMode};
use crate::ui::colors::{MATRIX_GREEN, TEXT_SECONDARY};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::White);

    let keys: &[(&str, &str)] = if app.input_mode == InputMode::Editing {
        &[(" Esc/Enter ", "Stop Editing  ")]
    } else {
        &[
            (" q ", "Quit  "),
            (" l ", "Load  "),
            (" \u{2191}\u{2193} ", "Move  "),
            (" Enter ", "Details  "),
            (" p ", "Probe  "),
            (" / ", "Filter  "),
            (" e ", "Export  "),
        ]
    };

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, key_style),
                Span::styled(*label, label_style),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Left), area);

    if let Some(msg) = &app.status_message {
        let status = Paragraph::new(Span::styled(
            format!("{} ", msg),
            Style::default().fg(MATRIX_GREEN),
        ))
        .alignment(Alignment::Right);
        f.render_widget(status, area);
    } else if app.state_loading {
        let status = Paragraph::new(Span::styled("loading ", Style::default().fg(TEXT_SECONDARY)))
            .alignment(Alignment::Right);
        f.render_widget(status, area);
    }
}
