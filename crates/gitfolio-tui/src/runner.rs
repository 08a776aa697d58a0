// TUI event loop and terminal management
use crate::app::{Action, App};
use crate::event::AppEvent;
use chrono::Datelike;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gitfolio_core::{loader, photo, Portfolio, RepositorySource};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

const TICK: Duration = Duration::from_millis(50);

pub async fn run_tui(
    portfolio: Portfolio,
    owner: String,
    source: Arc<dyn RepositorySource>,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(portfolio, owner, tx.clone());

    start(&mut app, source, tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, rx);

    // Restore terminal even when the loop bailed out
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Page bootstrap: theme first, then the footer year, then the two background jobs
pub fn start(app: &mut App, source: Arc<dyn RepositorySource>, tx: UnboundedSender<AppEvent>) {
    app.portfolio.init_theme();
    app.portfolio.set_year(chrono::Local::now().year());

    if let Some(src) = app.portfolio.surface().avatar.local_src.clone() {
        let tx = tx.clone();
        tokio::spawn(async move {
            if photo::probe_local_photo(&src).await {
                let _ = tx.send(AppEvent::LocalPhotoReady(src));
            }
        });
    }

    app.portfolio.begin_load();
    tokio::spawn(async move {
        let result = loader::fetch(source.as_ref()).await;
        let _ = tx.send(AppEvent::Loaded(result));
    });

    info!("Started portfolio for {}", app.owner);
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events: UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| crate::ui::render(f, app))?;

        // Background results are folded in on the loop's own turn
        while let Ok(ev) = events.try_recv() {
            app.handle_event(ev);
        }

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key) {
                Action::Quit => break,
                Action::Open(url) => {
                    if let Err(e) = open::that(&url) {
                        warn!("Failed to open browser for {}: {}", url, e);
                    }
                }
                Action::None => {}
            }
        }
    }

    Ok(())
}
