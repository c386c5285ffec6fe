#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use std::io;

use anyhow::anyhow;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use futures::Stream;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

/// Interval of the cursor blink, matching the usual terminal text input.
pub const BLINK_INTERVAL: time::Duration = time::Duration::from_millis(530);

/// Merges terminal input, the blink timer and, when attached, a queue of
/// injected events into one ordered source for the UI loop.
pub struct EventsService<S = EventStream> {
    crossterm_events: S,
    events: Option<mpsc::UnboundedReceiver<Event>>,
    blink: time::Interval,
}

impl EventsService<EventStream> {
    pub fn new() -> EventsService<EventStream> {
        return EventsService::with_source(EventStream::new(), BLINK_INTERVAL);
    }
}

impl Default for EventsService<EventStream> {
    fn default() -> EventsService<EventStream> {
        return EventsService::new();
    }
}

async fn recv_queued(events: &mut Option<mpsc::UnboundedReceiver<Event>>) -> Option<Event> {
    match events {
        Some(rx) => return rx.recv().await,
        None => return futures::future::pending().await,
    }
}

impl<S> EventsService<S>
where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    pub fn with_source(crossterm_events: S, blink_interval: time::Duration) -> EventsService<S> {
        let mut blink = time::interval_at(time::Instant::now() + blink_interval, blink_interval);
        blink.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        return EventsService {
            crossterm_events,
            events: None,
            blink,
        };
    }

    /// Attaches a queue whose events are delivered alongside terminal input.
    /// Once every sender is dropped the queue is detached again.
    pub fn with_queue(mut self, events: mpsc::UnboundedReceiver<Event>) -> EventsService<S> {
        self.events = Some(events);
        return self;
    }

    /// Restarts the blink phase so the next tick is a full interval away.
    pub fn reset_blink(&mut self) {
        self.blink.reset();
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Resize(cols, rows) => {
                return Some(Event::UIResize(cols, rows));
            }
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let key = match keyevent.code {
                    crossterm::event::KeyCode::Char(c) => Key::Char(c),
                    crossterm::event::KeyCode::Enter => Key::Enter,
                    crossterm::event::KeyCode::Left => Key::Left,
                    crossterm::event::KeyCode::Right => Key::Right,
                    crossterm::event::KeyCode::Up => Key::Up,
                    crossterm::event::KeyCode::Down => Key::Down,
                    crossterm::event::KeyCode::Home => Key::Home,
                    crossterm::event::KeyCode::End => Key::End,
                    crossterm::event::KeyCode::Delete => Key::Delete,
                    crossterm::event::KeyCode::Backspace => Key::Backspace,
                    crossterm::event::KeyCode::Esc => Key::Esc,
                    _ => return None,
                };

                let input = Input {
                    key,
                    ctrl: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::CONTROL),
                    alt: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::ALT),
                    shift: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::SHIFT),
                };
                match input {
                    Input {
                        key: Key::Char('c'),
                        ctrl: true,
                        ..
                    } => {
                        return Some(Event::KeyboardCTRLC);
                    }
                    Input {
                        key: Key::Char('m'),
                        ctrl: true,
                        ..
                    } => {
                        return Some(Event::KeyboardEnter);
                    }
                    Input {
                        key: Key::Enter, ..
                    } => {
                        return Some(Event::KeyboardEnter);
                    }
                    input => {
                        return Some(Event::KeyboardCharInput(input));
                    }
                }
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = recv_queued(&mut self.events), if self.events.is_some() => {
                    if event.is_none() {
                        self.events = None;
                    }
                    event
                },
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => return Err(err.into()),
                    None => return Err(anyhow!("terminal event stream closed")),
                },
                _ = self.blink.tick() => Some(Event::UICursorBlink)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
