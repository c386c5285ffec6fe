use std::cell::Cell;

use futures::stream;
use futures::StreamExt;
use ratatui::backend::TestBackend;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use super::*;
use crate::domain::models::Phase;
use crate::domain::models::TerminalError;
use crate::domain::services::events::BLINK_INTERVAL;

struct CountingProbe {
    viewport: Option<Viewport>,
    calls: Cell<usize>,
}

impl CountingProbe {
    fn new(viewport: Option<Viewport>) -> CountingProbe {
        return CountingProbe {
            viewport,
            calls: Cell::new(0),
        };
    }
}

impl ViewportProbe for CountingProbe {
    fn probe(&self) -> Result<Viewport, TerminalError> {
        self.calls.set(self.calls.get() + 1);
        return self.viewport.ok_or_else(|| {
            return TerminalError::TerminalQueryFailure(io::Error::new(
                io::ErrorKind::Other,
                "not a tty",
            ));
        });
    }
}

fn props() -> AppStateProps {
    return AppStateProps {
        title: "group".to_string(),
        placeholder: "group name ....".to_string(),
        viewport: Viewport::new(20, 7),
    };
}

fn char_input(c: char) -> Event {
    return Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ..Default::default()
    });
}

#[tokio::test(start_paused = true)]
async fn it_stops_drawing_after_interrupt() {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let mut events = EventsService::with_source(stream::pending(), BLINK_INTERVAL).with_queue(rx);
    let mut terminal = Terminal::new(TestBackend::new(20, 7)).unwrap();
    let probe = CountingProbe::new(Some(Viewport::new(20, 7)));
    let mut app_state = AppState::new(props());

    tx.send(char_input('a')).unwrap();
    tx.send(Event::KeyboardCTRLC).unwrap();
    tx.send(char_input('b')).unwrap();

    run_loop(&mut terminal, &mut app_state, &probe, &mut events)
        .await
        .unwrap();

    assert_eq!(app_state.phase, Phase::Terminated);
    assert_eq!(app_state.input.value(), "a");
    // Initial frame plus the one after 'a'.
    assert_eq!(probe.calls.get(), 2);

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(9, 2)].symbol(), "a");
}

#[tokio::test(start_paused = true)]
async fn it_clears_the_field_on_enter() {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let mut events = EventsService::with_source(stream::pending(), BLINK_INTERVAL).with_queue(rx);
    let mut terminal = Terminal::new(TestBackend::new(20, 7)).unwrap();
    let probe = CountingProbe::new(Some(Viewport::new(20, 7)));
    let mut app_state = AppState::new(props());

    tx.send(Event::KeyboardPaste("blue".to_string())).unwrap();
    tx.send(Event::KeyboardEnter).unwrap();
    tx.send(Event::KeyboardCTRLC).unwrap();

    run_loop(&mut terminal, &mut app_state, &probe, &mut events)
        .await
        .unwrap();

    assert_eq!(app_state.input.value(), "");
    assert_eq!(app_state.input.cursor(), 0);
}

#[tokio::test(start_paused = true)]
async fn it_keeps_the_cursor_lit_for_a_full_blink_after_typing() {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let mut events = EventsService::with_source(stream::pending(), BLINK_INTERVAL).with_queue(rx);
    let mut terminal = Terminal::new(TestBackend::new(20, 7)).unwrap();
    let probe = CountingProbe::new(Some(Viewport::new(20, 7)));
    let mut app_state = AppState::new(props());

    // Type just before the first tick is due, then interrupt shortly after it.
    time::advance(time::Duration::from_millis(520)).await;
    tx.send(char_input('x')).unwrap();
    tokio::spawn(async move {
        time::sleep(time::Duration::from_millis(100)).await;
        let _ = tx.send(Event::KeyboardCTRLC);
    });

    run_loop(&mut terminal, &mut app_state, &probe, &mut events)
        .await
        .unwrap();

    assert_eq!(app_state.input.value(), "x");
    assert!(app_state.input.is_cursor_visible());
}

#[tokio::test(start_paused = true)]
async fn it_redraws_with_the_stale_size_when_the_query_fails() {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let mut events = EventsService::with_source(stream::pending(), BLINK_INTERVAL).with_queue(rx);
    let mut terminal = Terminal::new(TestBackend::new(20, 7)).unwrap();
    let probe = CountingProbe::new(None);
    let mut app_state = AppState::new(props());

    tx.send(Event::KeyboardCTRLC).unwrap();
    run_loop(&mut terminal, &mut app_state, &probe, &mut events)
        .await
        .unwrap();

    assert_eq!(app_state.viewport, Viewport::new(20, 7));
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(19, 0)].symbol(), "┐");
}

#[tokio::test(start_paused = true)]
async fn it_fails_when_the_terminal_stream_fails() {
    let (_tx, rx) = mpsc::unbounded_channel::<Event>();
    let source = stream::iter(vec![Err(io::Error::new(io::ErrorKind::Other, "eof"))])
        .chain(stream::pending());
    let events = EventsService::with_source(source, BLINK_INTERVAL).with_queue(rx);
    let mut terminal = Terminal::new(TestBackend::new(20, 7)).unwrap();
    let probe = CountingProbe::new(Some(Viewport::new(20, 7)));

    let res = start_loop(&mut terminal, props(), &probe, events).await;
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_before_touching_the_terminal_when_unsized() {
    let probe = CountingProbe::new(None);
    let res = run(&Config::defaults(), &probe).await;

    let err = res.unwrap_err();
    assert!(format!("{err:#}").contains("unable to size the input box"));
    assert_eq!(probe.calls.get(), 1);
}

#[test]
fn it_reports_exit_codes() {
    let mut out = Vec::new();
    assert_eq!(report(&Ok(()), &mut out), 0);
    assert!(out.is_empty());

    let err = Err(anyhow::anyhow!("not a tty").context("unable to size the input box"));
    assert_eq!(report(&err, &mut out), 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error: unable to size the input box: not a tty\n"
    );
}
