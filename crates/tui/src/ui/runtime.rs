//! Runtime: event loop and terminal lifecycle.
//!
//! - A dedicated input thread polls `crossterm` and forwards events over a
//!   channel; pointer moves are throttled to one per frame.
//! - The loop ticks at frame rate only while something is moving (smooth
//!   scroll, deferred scroll, cross-fade, reveal entrance) and idles
//!   otherwise.
//! - Effects returned by components are executed by [`App::process_effects`];
//!   the frame is redrawn only when something changed.

use std::{
    io::Stdout,
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

use aistudio_content::SiteContent;
use aistudio_types::{Msg, Route, SiteConfig};

use super::components::Component;
use super::main_view::MainView;
use crate::app::App;

const FRAME: Duration = Duration::from_millis(16);
const IDLE: Duration = Duration::from_millis(1000);

/// Spawns the input thread. It exits once the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    thread::spawn(move || {
        let mut last_mouse_move: Option<Instant> = None;
        while !sender.is_closed() {
            match event::poll(FRAME) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!(%error, "failed to poll terminal input");
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(error) => {
                    warn!(%error, "failed to read terminal input");
                    break;
                }
            };
            let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
            if is_mouse_move {
                if last_mouse_move.is_some_and(|last| last.elapsed() < FRAME) {
                    continue;
                }
                last_mouse_move = Some(Instant::now());
            }
            if sender.blocking_send(event).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) {
    let effects = match input_event {
        Event::Key(key) => main_view.handle_key_events(app, key),
        Event::Mouse(mouse) => main_view.handle_mouse_events(app, mouse),
        Event::Resize(width, height) => {
            app.update(&Msg::Resize(width, height));
            Vec::new()
        }
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    };
    app.process_effects(effects, Instant::now());
}

/// Sets up the terminal, runs the event loop until quit, and restores the
/// terminal on the way out.
pub async fn run_app(content: &'static SiteContent, config: SiteConfig, route: Route) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut app = App::new(content, config, route);
    let mut main_view = MainView::default();
    let mut terminal = setup_terminal()?;

    let mut last_size = crossterm::terminal::size().ok();
    if let Some((width, height)) = last_size {
        app.update(&Msg::Resize(width, height));
    }

    let mut current_interval = IDLE;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let target_interval = if app.needs_fast_tick(Instant::now()) { FRAME } else { IDLE };
        if target_interval != current_interval {
            debug!(?target_interval, "tick interval changed");
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    break;
                };
                handle_input_event(&mut app, &mut main_view, event);
                needs_render = true;
            }
            _ = ticker.tick() => {
                needs_render = app.update(&Msg::Tick);
            }
            _ = signal::ctrl_c() => break,
        }

        if app.should_quit {
            break;
        }

        // Some terminals drop resize notifications; compare sizes directly.
        if let Ok(size) = crossterm::terminal::size()
            && last_size != Some(size)
        {
            last_size = Some(size);
            app.update(&Msg::Resize(size.0, size.1));
            needs_render = true;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
