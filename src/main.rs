//! recicla - Terminal Collection Points Locator
//!
//! A terminal client for finding waste collection points. The home
//! screen is a cascading state/city picker backed by the IBGE localities
//! API; a complete selection navigates to the points screen with the
//! chosen values as route parameters.

use std::io;
use std::sync::mpsc;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, FetchEvent};
use infrastructure::{FetchDispatcher, LookupClient};
use presentation::{render_ui, InputHandler};

/// How long one loop iteration waits for input before draining fetch
/// results and redrawing.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Entry point for the recicla terminal client.
///
/// Sets up the lookup client and the fetch channel, initializes the
/// terminal interface, and runs the main event loop until the user
/// quits.
///
/// # Errors
///
/// Returns an error if the HTTP client or terminal setup fails, or if
/// there are issues with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = LookupClient::from_env()?;
    let (events_tx, events_rx) = mpsc::channel();
    let dispatcher = FetchDispatcher::new(client, events_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, &dispatcher, &events_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Each iteration dispatches fetches queued by state transitions, draws
/// the current screen, waits up to one tick for keyboard input, and
/// applies any lookup results that arrived in the meantime. Continues
/// running until the user presses 'q' on the home screen.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &FetchDispatcher,
    events: &mpsc::Receiver<FetchEvent>,
) -> io::Result<()> {
    loop {
        for request in app.take_pending() {
            dispatcher.dispatch(request);
        }

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.can_quit() => return Ok(()),
                        _ => InputHandler::handle_key_event(app, key.code),
                    }
                }
            }
        }

        while let Ok(event) = events.try_recv() {
            app.apply_fetch_event(event);
        }
    }
}
