//! Interactive explorer loop
//!
//! Owns the terminal, turns crossterm events into actions, applies them
//! through the reducer and hands the resulting commands to the executor.

mod executor;
mod keybindings;

pub use self::executor::{run_command, CommandExecutor};
use self::keybindings::{route_key, KeyRoute};

use crate::core::app::{
    apply_actions, App, AppActionContext, AppActionDispatcher, AppActionEnvelope, Focus,
};
use crate::core::gateway::SharedGateway;
use crate::core::news::AppMode;
use crate::ui::renderer::ui;
use crate::utils::input::sanitize_search_input;
use ratatui::crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

type SharedTerminal = Arc<Mutex<Terminal<CrosstermBackend<io::Stdout>>>>;

const MAX_FPS: u64 = 60;
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

async fn try_draw_frame(
    app: &Arc<Mutex<App>>,
    terminal: &SharedTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let app_guard = app.lock().await;
    let mut terminal_guard = terminal.lock().await;
    terminal_guard.draw(|f| ui(f, &app_guard))?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

struct EventProcessingOutcome {
    events_processed: bool,
    request_redraw: bool,
    exit_requested: bool,
}

async fn process_ui_events(
    app: &Arc<Mutex<App>>,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
) -> EventProcessingOutcome {
    let mut outcome = EventProcessingOutcome {
        events_processed: false,
        request_redraw: false,
        exit_requested: false,
    };

    while let Ok(ev) = event_rx.try_recv() {
        outcome.events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let mut app_guard = app.lock().await;
                if handle_key_event(&mut app_guard, dispatcher, key) {
                    outcome.exit_requested = true;
                    break;
                }
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                let mut app_guard = app.lock().await;
                handle_paste_event(&mut app_guard, &text);
            }
            UiEvent::Crossterm(_) => {}
        }
    }

    if outcome.events_processed {
        outcome.request_redraw = true;
    }

    outcome
}

/// Carry out one key press. Returns true when the user asked to quit.
fn handle_key_event(app: &mut App, dispatcher: &AppActionDispatcher, key: KeyEvent) -> bool {
    match route_key(app, key) {
        KeyRoute::Exit => return true,
        KeyRoute::Actions(actions) => dispatcher.dispatch_many(actions, AppActionContext::now()),
        KeyRoute::EditSearch => app.ui.apply_search_edit(|ta| {
            ta.input(tui_textarea::Input::from(key));
        }),
        KeyRoute::ScrollNews(rows) => app.ui.scroll_news(rows),
        KeyRoute::Ignored => {}
    }
    false
}

/// Pasted text lands in the search box as a single line.
fn handle_paste_event(app: &mut App, text: &str) {
    let accepts_text = app.explorer.mode == AppMode::Exploring
        && app.ui.focus == Focus::Search
        && !app.explorer.is_resolving_location;
    if !accepts_text {
        return;
    }
    let sanitized = sanitize_search_input(text);
    app.ui.apply_search_edit(|ta| {
        ta.insert_str(&sanitized);
    });
}

async fn drain_action_queue(
    app: &Arc<Mutex<App>>,
    executor: &CommandExecutor,
    action_rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(envelope) = action_rx.try_recv() {
        pending.push(envelope);
    }

    if pending.is_empty() {
        return false;
    }

    let mut app_guard = app.lock().await;
    let commands = apply_actions(&mut app_guard, pending);
    drop(app_guard);
    for cmd in commands {
        debug!(?cmd, "spawning gateway command");
        executor.spawn(cmd);
    }
    true
}

fn is_busy(app: &App) -> bool {
    app.explorer.is_loading || app.explorer.is_resolving_location || app.is_naming_point()
}

pub async fn run_explorer(
    app: App,
    gateway: SharedGateway,
    request_timeout: Duration,
) -> Result<(), Box<dyn Error>> {
    let app = Arc::new(Mutex::new(app));
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppActionEnvelope>();
    let dispatcher = AppActionDispatcher::new(action_tx);
    let executor = CommandExecutor::new(gateway, dispatcher.clone(), request_timeout);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let terminal = Arc::new(Mutex::new(Terminal::new(CrosstermBackend::new(stdout))?));
    info!("explorer started");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();

    let event_reader_handle = tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => continue,
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    });

    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;
    let mut last_spinner_tick = Instant::now();

    let result: Result<(), Box<dyn Error>> = 'main_loop: loop {
        if let Err(err) = try_draw_frame(
            &app,
            &terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        )
        .await
        {
            break 'main_loop Err(err.into());
        }

        let event_outcome = process_ui_events(&app, &mut event_rx, &dispatcher).await;
        if event_outcome.exit_requested {
            break 'main_loop Ok(());
        }
        if event_outcome.request_redraw {
            request_redraw = true;
        }

        if drain_action_queue(&app, &executor, &mut action_rx).await {
            request_redraw = true;
        }

        {
            let mut app_guard = app.lock().await;
            if is_busy(&app_guard) && last_spinner_tick.elapsed() >= SPINNER_INTERVAL {
                app_guard.ui.tick();
                last_spinner_tick = Instant::now();
                request_redraw = true;
            }
        }

        if !event_outcome.events_processed && !request_redraw {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();

    disable_raw_mode()?;
    {
        let mut terminal_guard = terminal.lock().await;
        execute!(
            terminal_guard.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal_guard.show_cursor()?;
    }
    info!("explorer closed");

    result
}
