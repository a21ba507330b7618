use crate::config::Config;
use crate::posts::PostFetcher;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive post list until the user quits.
///
/// Blocks the calling thread, which becomes the only thread that touches
/// UI state. Network work happens on `runtime`.
pub fn run(config: &Config, fetcher: Arc<PostFetcher>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(fetcher, runtime, events.sender(), config.ui.on_failure);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.handle_event(AppEvent::Resize(cols, rows));
    }
    app.request_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Aborts any in-flight fetch before the terminal is restored
    drop(app);
    drop(guard);
    Ok(())
}
