use maxplayer_roster_lib::app::{App, InputMode, ProbeState};
use maxplayer_roster_lib::config::AppConfig;
use maxplayer_roster_lib::errors::DashboardError;
use maxplayer_roster_lib::roster::Row;
use maxplayer_roster_lib::subscription::SubscriptionStatus;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ─── Helpers ───────────────────────────────────────────────────────────────────

fn make_row(i: usize) -> Row {
    Row {
        account_name: format!("reseller-{i}"),
        login: Some(format!("user{i}")),
        secret: Some(format!("pass{i}")),
        domain: format!("panel{i}.example"),
        endpoint_base: format!("http://panel{i}.example:8080"),
    }
}

fn loaded_app(count: usize) -> App {
    let mut app = App::new(AppConfig::default());
    let generation = app.begin_roster_load();
    app.apply_roster(generation, (0..count).map(make_row).collect());
    app
}

/// Render one frame and return the screen text
fn render_frame(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            maxplayer_roster_lib::ui::ui(f, app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_state_renders_hint() {
    let mut app = App::new(AppConfig::default());
    let screen = render_frame(&mut app, 120, 30);
    assert!(screen.contains("press l to load"));
}

#[test]
fn test_loading_overlay_renders() {
    let mut app = App::new(AppConfig::default());
    app.begin_roster_load();
    let screen = render_frame(&mut app, 120, 30);
    assert!(screen.contains("Fetching roster"));
}

#[test]
fn test_loaded_rows_and_details_render() {
    let mut app = loaded_app(5);
    let screen = render_frame(&mut app, 140, 30);
    assert!(screen.contains("reseller-0"));
    assert!(screen.contains("5/5 rows"));
    assert!(screen.contains("press p or Enter to check"));
}

#[test]
fn test_filtered_rows_render() {
    let mut app = loaded_app(12);
    app.filter = tui_input::Input::new("reseller-11".to_string());
    app.update_filter();
    app.input_mode = InputMode::Editing;
    let screen = render_frame(&mut app, 140, 30);
    assert!(screen.contains("1/12 rows"));
    assert!(screen.contains("reseller-11"));
    assert!(!screen.contains("reseller-3 "));
}

#[test]
fn test_expanded_row_shows_probe_status() {
    let mut app = loaded_app(3);
    let request = app.toggle_selected_detail().unwrap();
    let pending = render_frame(&mut app, 140, 30);
    assert!(pending.contains("probing..."));

    app.apply_probe(request.generation, request.row, request.seq, SubscriptionStatus::unavailable());
    assert!(matches!(app.probe_state(request.row), Some(ProbeState::Ready(_))));
    let ready = render_frame(&mut app, 140, 30);
    assert!(ready.contains("Unknown"));
    assert!(ready.contains("unknown"));
    assert!(ready.contains("panel unreachable"));
}

#[test]
fn test_expanded_row_without_status_offers_check() {
    let mut app = loaded_app(3);
    app.toggle_selected_detail();
    let row = app.selected_row_index().unwrap();
    app.probes.remove(&row);
    let screen = render_frame(&mut app, 140, 30);
    assert!(screen.contains("└ press p"));
    assert!(!screen.contains("probing..."));
}

#[test]
fn test_error_popup_renders_diagnostics() {
    let mut app = App::new(AppConfig::default());
    let generation = app.begin_roster_load();
    app.apply_roster_failure(generation, DashboardError::RosterFetchFailed("status 503".into()));
    let screen = render_frame(&mut app, 120, 30);
    assert!(screen.contains("No Roster Available"));
    assert!(screen.contains("status 503"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = loaded_app(50);
    app.toggle_selected_detail();
    render_frame(&mut app, 20, 6);
    render_frame(&mut app, 1, 1);
}
