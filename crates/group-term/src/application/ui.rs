#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;
use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::Event as CrosstermEvent;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use futures::Stream;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Event;
use crate::domain::models::Viewport;
use crate::domain::services::titled_box;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;
use crate::infrastructure::terminal::ViewportProbe;

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        cursor::Show
    );
}

fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    probe: &dyn ViewportProbe,
) -> Result<()> {
    app_state.refresh_viewport(probe);
    terminal.draw(|frame| titled_box::render(frame, app_state))?;
    return Ok(());
}

/// Handles one event at a time, redrawing after each, until the box is
/// interrupted. Nothing is drawn after the interrupt.
pub async fn run_loop<B, S>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    probe: &dyn ViewportProbe,
    events: &mut EventsService<S>,
) -> Result<()>
where
    B: Backend,
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    draw(terminal, app_state, probe)?;

    loop {
        let event = events.next().await?;
        let edits = matches!(
            event,
            Event::KeyboardCharInput(_) | Event::KeyboardPaste(_) | Event::KeyboardEnter
        );
        app_state.handle_event(event);
        if edits {
            events.reset_blink();
        }
        if !app_state.is_running() {
            break;
        }

        draw(terminal, app_state, probe)?;
    }

    return Ok(());
}

pub async fn start_loop<B, S>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    probe: &dyn ViewportProbe,
    mut events: EventsService<S>,
) -> Result<()>
where
    B: Backend,
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    let mut app_state = AppState::new(app_state_props);
    return run_loop(terminal, &mut app_state, probe, &mut events).await;
}

async fn run_in_terminal(
    config: &Config,
    probe: &dyn ViewportProbe,
    viewport: Viewport,
) -> Result<()> {
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let app_state_props = AppStateProps {
        title: config.get(ConfigKey::Title),
        placeholder: config.get(ConfigKey::Placeholder),
        viewport,
    };

    let result = start_loop(&mut terminal, app_state_props, probe, EventsService::new()).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    return result;
}

/// Sizes the box from the terminal, then runs it until interrupted. The
/// terminal is restored on every path out of here.
pub async fn run(config: &Config, probe: &dyn ViewportProbe) -> Result<()> {
    let viewport = probe
        .probe()
        .context("unable to size the input box")?;
    tracing::info!(cols = viewport.cols, rows = viewport.rows, "starting");

    enable_raw_mode()?;
    let result = run_in_terminal(config, probe, viewport).await;
    if result.is_err() {
        destruct_terminal_for_panic();
    }

    return result;
}

/// Prints fatal errors for the user and maps the outcome to a process exit code.
pub fn report(result: &Result<()>, out: &mut impl Write) -> u8 {
    match result {
        Ok(()) => {
            tracing::info!("exiting");
            return 0;
        }
        Err(err) => {
            tracing::error!(error = format!("{err:#}"), "fatal");
            let _ = writeln!(out, "Error: {err:#}");
            return 1;
        }
    }
}
