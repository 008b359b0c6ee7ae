use crate::prefetch::RecordStore;
use crate::shutdown::ShutdownManager;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::nav::Route;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the UI loop on the current thread until the user quits.
///
/// Fetches are spawned onto `runtime`; their outcomes come back through the
/// event channel.
pub fn run(
    store: RecordStore,
    initial: Route,
    runtime: Handle,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownManager::new();
    let events = EventHandler::new(tick_rate, shutdown.handle());
    let mut app = App::new(store, initial, runtime, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

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

    shutdown.signal_shutdown();
    drop(guard);
    Ok(())
}
