use crate::api::SubscriptionClient;
use crate::app::{App, AsyncAction, InputMode};
use crate::export;
use crate::handlers::async_actions::{spawn_probe, spawn_roster_load};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

#[derive(Debug, PartialEq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub fn handle_key_event(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AsyncAction>,
    prober: &SubscriptionClient,
) -> InputResult {
    // Only process key press events, not release (Windows sends both)
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    // Priority 1: error popup swallows the key that closes it
    if app.error.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.dismiss_messages();
        }
        return InputResult::Continue;
    }

    // Priority 2: filter editing
    if app.input_mode == InputMode::Editing {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.toggle_input_mode(),
            _ => {
                if app.filter.handle_event(&Event::Key(key)).is_some() {
                    app.update_filter();
                }
            }
        }
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return InputResult::Quit,
        KeyCode::Char('l') | KeyCode::F(5) => {
            if !app.state_loading {
                spawn_roster_load(app, tx);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.next_row(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
        KeyCode::Enter => {
            if let Some(request) = app.toggle_selected_detail() {
                spawn_probe(prober, request, tx);
            }
        }
        KeyCode::Char('p') => {
            if let Some(request) = app.probe_selected() {
                spawn_probe(prober, request, tx);
            }
        }
        KeyCode::Char('/') | KeyCode::Char('f') => app.toggle_input_mode(),
        KeyCode::Esc => {
            if !app.filter.value().is_empty() {
                app.filter.reset();
                app.update_filter();
            } else {
                app.dismiss_messages();
            }
        }
        KeyCode::Char('e') => export_visible(app),
        _ => {}
    }

    InputResult::Continue
}

/// Write the currently filtered rows to the configured export path
pub fn export_visible(app: &mut App) {
    if app.rows.is_empty() {
        app.status_message = Some("Nothing to export, load the roster first".to_string());
        return;
    }
    let path = app.config.export_path.clone();
    match export::write_csv(&path, app.visible_rows()) {
        Ok(count) => {
            app.status_message = Some(format!("Exported {} rows to {}", count, path.display()));
        }
        Err(err) => app.error = Some(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::roster::Row;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_rows() -> App {
        let mut app = App::new(AppConfig::default());
        let gen = app.begin_roster_load();
        app.apply_roster(
            gen,
            vec![
                Row {
                    account_name: "north".into(),
                    login: Some("n".into()),
                    secret: Some("s".into()),
                    domain: "north.tv".into(),
                    endpoint_base: "http://north.tv:80".into(),
                },
                Row {
                    account_name: "south".into(),
                    login: Some("x".into()),
                    secret: Some("y".into()),
                    domain: "south.tv".into(),
                    endpoint_base: "http://south.tv:80".into(),
                },
            ],
        );
        app
    }

    #[tokio::test]
    async fn test_typing_filter_narrows_rows() {
        let mut app = app_with_rows();
        let (tx, _rx) = mpsc::channel(4);
        let prober = SubscriptionClient::new();

        handle_key_event(&mut app, press(KeyCode::Char('/')), &tx, &prober);
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in "sou".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)), &tx, &prober);
        }
        assert_eq!(app.filtered, vec![1]);

        handle_key_event(&mut app, press(KeyCode::Enter), &tx, &prober);
        assert_eq!(app.input_mode, InputMode::Normal);
        handle_key_event(&mut app, press(KeyCode::Esc), &tx, &prober);
        assert_eq!(app.filtered, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_q_quits_and_error_popup_blocks_keys() {
        let mut app = app_with_rows();
        let (tx, _rx) = mpsc::channel(4);
        let prober = SubscriptionClient::new();

        app.error = Some(crate::errors::DashboardError::MissingToken);
        assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('q')), &tx, &prober), InputResult::Continue);
        assert!(app.error.is_none());
        assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('q')), &tx, &prober), InputResult::Quit);
    }

    #[test]
    fn test_export_writes_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_rows();
        app.config.export_path = dir.path().join("out.csv");
        app.filter = tui_input::Input::new("north".into());
        app.update_filter();

        export_visible(&mut app);

        let bytes = std::fs::read(&app.config.export_path).unwrap();
        let rows = export::read_csv(&bytes).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account_name, "north");
        assert!(app.status_message.unwrap().starts_with("Exported 1 rows"));
    }
}
