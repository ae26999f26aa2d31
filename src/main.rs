//! form-lite demo - a terminal form driven by `FormController` bindings

mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use form_lite::FormLiteConfig;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = FormLiteConfig::load()?;

    // Initialize logging
    let default_filter = config
        .log_filter
        .clone()
        .unwrap_or_else(|| "form_lite=info".to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut needs_draw = true;

    loop {
        // Fold queued field updates before rendering
        if app.commit() {
            needs_draw = true;
        }

        if needs_draw {
            terminal.draw(|frame| ui::draw(frame, app))?;
            needs_draw = false;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key)?;
                    needs_draw = true;
                }
                Event::Resize(_width, _height) => needs_draw = true,
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!(fields = app.form.form_data().len(), "exiting demo");
            return Ok(());
        }
    }
}
