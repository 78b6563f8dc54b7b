use jokecard::adapters::ReqwestHttpClient;
use jokecard::app::{App, AppMessage};
use jokecard::cli::{parse_args, run_cli_command, VERSION};
use jokecard::clipboard::TextCopier;
use jokecard::config::AppConfig;
use jokecard::logging;
use jokecard::terminal::{setup_panic_hook, TerminalManager};
use jokecard::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Loop tick; drives the spinner.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    if run_cli_command(parse_args(std::env::args())).is_some() {
        return Ok(());
    }

    color_eyre::install()?;

    // Checked before the terminal is touched so the message stays readable.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("jokecard: {}", err);
            std::process::exit(1);
        }
    };

    let log_path = logging::init(config.log_dir.as_deref());
    tracing::info!(version = VERSION, log = ?log_path, config = ?config, "starting jokecard");

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let mut app = App::new(&config, Arc::new(http), TextCopier::system());

    let mut term_manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));
    term_manager.restore()?;

    match &result {
        Ok(()) => tracing::info!("jokecard exited"),
        Err(err) => tracing::error!(error = %err, "jokecard exited with error"),
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Owned here so select! can borrow it alongside `app`.
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when something changed.
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
            app.on_frame_rendered();
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(error = %err, "terminal event stream failed");
                        return Err(err.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
