use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use granthika::config::AppConfig;
use granthika::corpus::loader;
use granthika::tui::app::AppState;
use granthika::tui::events::AppEvent;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (file-only; the TUI owns the terminal)
    let _log_guard = granthika::logging::init_tui();
    log::info!("granthika v{} starting", granthika::VERSION);

    let config = AppConfig::load();

    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // One-shot corpus fetch; the UI shows a loading placeholder until this
    // reports back. First failure is terminal for the session.
    let url = config.source.url.clone();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let event = match loader::fetch_corpus(&url).await {
            Ok(records) => AppEvent::CorpusLoaded(records),
            Err(e) => AppEvent::LoadFailed(e.to_string()),
        };
        let _ = tx.send(event);
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let mut app = AppState::new(event_rx, &config);
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
