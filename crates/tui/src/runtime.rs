//! Runtime: terminal lifecycle and the single event loop.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive one `tokio::select!` loop over terminal input, completed fetches,
//!   and Ctrl+C.
//! - Execute `Effect`s returned by the view by spawning fetch tasks, and feed
//!   each task's resulting `Msg` back through `App::update`.
//!
//! Event Loop Strategy
//! - A dedicated input task blocks on `crossterm::event` polling and forwards
//!   events over a channel, keeping `poll()` and `read()` together.
//! - In-flight fetches sit uncoordinated in a `FuturesUnordered`; overlapping
//!   detail fetches race and the last response wins.
//! - Smart ticking: fast interval only while a fetch is animating the
//!   throbber, long interval when idle.
//!
//! Entry Point
//! - `run_app(client)` is called from `lib::run`: it queues the one-shot
//!   collection load, processes events, and tears the terminal down on exit.

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ramen_api::MenuClient;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::app::{App, Effect, Msg};
use crate::cmd;
use crate::ui::main_view::MainView;

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// Keeping `poll()` and `read()` on the same task avoids lost or delayed
/// events in some terminals.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let poll_interval = Duration::from_millis(16);
        loop {
            match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Err(e) = sender.send(event).await {
                            tracing::warn!("Failed to send event: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Failed to poll for events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame by delegating to the main view.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, queues the one-shot
/// collection load, runs the async event loop, and cleans up on exit.
pub async fn run_app(client: MenuClient) -> Result<()> {
    let mut input_receiver = spawn_input_thread().await;
    let mut main_view = MainView::new();
    let mut app = App::new();
    let mut terminal = setup_terminal()?;

    let mut pending_fetches: FuturesUnordered<JoinHandle<Msg>> = FuturesUnordered::new();
    // Host-ready bootstrap: the collection loader runs exactly once here;
    // every later fetch is user-initiated.
    let mut effects: Vec<Effect> = vec![Effect::LoadCollection];

    // Ticking strategy: fast while a fetch animates the throbber, slow when idle.
    let fast_interval = Duration::from_millis(125);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = fast_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        // Execute queued effects before waiting on the next event.
        if !effects.is_empty() {
            let batch: Vec<Effect> = std::mem::take(&mut effects);
            if batch.iter().any(|effect| matches!(effect, Effect::Quit)) {
                break;
            }
            cmd::run_from_effects(&client, batch, &mut pending_fetches);
            app.in_flight = pending_fetches.len();
            render(&mut terminal, &mut app, &mut main_view)?;
        }

        let needs_animation = app.in_flight > 0;
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        tokio::select! {
            // Terminal input events
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key_event)) => {
                        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
                            break;
                        }
                        effects.extend(main_view.handle_key_events(&mut app, key_event));
                        needs_render = true;
                    }
                    Some(Event::Resize(width, height)) => {
                        effects.extend(app.update(&Msg::Resize(width, height)));
                        needs_render = true;
                    }
                    Some(_) => {}
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
            }

            // A fetch completed; its message flows back into the pure update.
            Some(joined) = pending_fetches.next(), if !pending_fetches.is_empty() => {
                match joined {
                    Ok(msg) => effects.extend(app.update(&msg)),
                    Err(error) => tracing::warn!(%error, "fetch task failed"),
                }
                app.in_flight = pending_fetches.len();
                needs_render = true;
            }

            // Periodic animation tick
            _ = ticker.tick() => {
                effects.extend(app.update(&Msg::Tick));
                needs_render = needs_animation;
            }

            // Handle Ctrl+C
            _ = signal::ctrl_c() => { break; }
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
