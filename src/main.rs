mod api;
mod auth;
mod config;
mod controller;
mod logging;
mod model;
mod playback;
mod queue;
mod search;
mod view;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use api::WebApi;
use crate::config::Settings;
use controller::AppController;
use model::AppModel;
use view::AppView;

/// Redirect URL or bare fragment handed over at startup.
const REDIRECT_ENV: &str = "SPOTIDECK_REDIRECT";

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;
    settings.validate().map_err(anyhow::Error::msg)?;

    if let Err(e) = logging::init_logging(&settings.logging) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== spotideck starting ===");

    let settings = Arc::new(settings);
    let api = Arc::new(WebApi::new(&settings.api)?);
    let model = Arc::new(Mutex::new(AppModel::new(&settings.search)));
    let controller = AppController::new(model.clone(), api, settings.clone());

    // The startup redirect is consumed once; without it the authorize view asks for one.
    if let Some(mut location) = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(REDIRECT_ENV).ok())
    {
        if let Some(token) = controller.authorize_with(&mut location).await {
            controller.connect_library(&token).await;
        }
    }

    let authorize_url = auth::authorize_url(&settings.auth);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller, &settings, &authorize_url).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("spotideck shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController<WebApi>,
    settings: &Settings,
    authorize_url: &str,
) -> Result<()> {
    let tick = Duration::from_millis(settings.ui.tick_ms);
    let refresh_interval = Duration::from_secs(settings.ui.now_playing_refresh_secs);
    let mut last_refresh = Instant::now();

    loop {
        controller.tick().await;

        if last_refresh.elapsed() >= refresh_interval {
            last_refresh = Instant::now();
            let controller = controller.clone();
            tokio::spawn(async move {
                controller.refresh_now_playing().await;
            });
        }

        let should_quit = {
            let model = model.lock().await;
            terminal.draw(|f| AppView::render(f, &model, authorize_url))?;
            model.should_quit()
        };

        if should_quit {
            break;
        }

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
