use std::{io, path::PathBuf, time::Duration};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use maxplayer_roster_lib::api::{RosterClient, SubscriptionClient};
use maxplayer_roster_lib::app::{App, AsyncAction};
use maxplayer_roster_lib::config::AppConfig;
use maxplayer_roster_lib::handlers::async_actions::{handle_async_action, spawn_roster_load};
use maxplayer_roster_lib::handlers::input::{handle_key_event, InputResult};
use maxplayer_roster_lib::{export, logging, roster, ui};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Reseller roster dashboard", long_about = None)]
struct Args {
    /// Fetch the roster, write it as CSV to this path, and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Only export rows containing this text (case-insensitive)
    #[arg(short, long, requires = "export")]
    filter: Option<String>,

    /// Override the roster service URL
    #[arg(long)]
    url: Option<String>,

    /// Store the roster token in config.json and exit
    #[arg(long)]
    set_token: Option<String>,

    /// Check configuration and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = args.url {
        config.roster_url = url;
    }

    // -- CLI MODE --
    if let Some(token) = args.set_token {
        config.api_token = Some(token);
        config.save()?;
        match AppConfig::config_path() {
            Some(path) => println!("Token saved to {}", path.display()),
            None => println!("No config directory available; token not saved."),
        }
        return Ok(());
    }

    if args.check {
        println!("Roster URL: {}", config.roster_url);
        println!("Export path: {}", config.export_path.display());
        match config.token() {
            Ok(_) => println!("API token: configured"),
            Err(err) => println!("API token: {}", err.diagnostics()),
        }
        return Ok(());
    }

    if let Some(path) = args.export {
        logging::init_stderr_logging();
        let token = config.token()?;
        let client = RosterClient::new(config.roster_url.clone(), token.to_string());
        let rows = client.fetch_roster().await?;
        let query = args.filter.unwrap_or_default();
        let count = export::write_csv(&path, roster::filter_indices(&rows, &query).into_iter().map(|i| &rows[i]))?;
        println!("Exported {} of {} rows to {}", count, rows.len(), path.display());
        return Ok(());
    }

    // -- TUI MODE (Default) --
    let log_path = logging::init_file_logging();
    info!(log = ?log_path, "starting dashboard");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let (tx, mut rx) = mpsc::channel::<AsyncAction>(32);

    let res = run_app(&mut terminal, &mut app, tx, &mut rx).await;

    // Restore Terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tx: mpsc::Sender<AsyncAction>,
    rx: &mut mpsc::Receiver<AsyncAction>,
) -> io::Result<()> {
    let prober = SubscriptionClient::new();

    // The roster is loaded once on startup; 'l' reloads it
    spawn_roster_load(app, &tx);

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        while let Ok(action) = rx.try_recv() {
            handle_async_action(app, action);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(app, key, &tx, &prober) == InputResult::Quit {
                    app.should_quit = true;
                }
            }
        }

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }

        app.loading_tick = app.loading_tick.wrapping_add(1);
    }
}
