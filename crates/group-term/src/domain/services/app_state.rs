#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use crate::domain::models::Event;
use crate::domain::models::FrameTitle;
use crate::domain::models::InputField;
use crate::domain::models::Phase;
use crate::domain::models::Viewport;
use crate::infrastructure::terminal::ViewportProbe;

pub struct AppStateProps {
    pub title: String,
    pub placeholder: String,
    pub viewport: Viewport,
}

pub struct AppState<'a> {
    pub input: InputField<'a>,
    pub phase: Phase,
    pub title: FrameTitle,
    pub viewport: Viewport,
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps) -> AppState<'a> {
        return AppState {
            input: InputField::new(&props.placeholder, props.viewport.inner_width()),
            phase: Phase::Running,
            title: FrameTitle::new(&props.title),
            viewport: props.viewport,
        };
    }

    pub fn is_running(&self) -> bool {
        return self.phase == Phase::Running;
    }

    pub fn handle_event(&mut self, event: Event) {
        if !self.is_running() {
            return;
        }

        match event {
            Event::KeyboardCTRLC => {
                tracing::debug!("interrupt received");
                self.phase = Phase::Terminated;
            }
            Event::KeyboardEnter => {
                tracing::debug!(chars = self.input.value().chars().count(), "group name confirmed");
                self.input.reset();
            }
            Event::KeyboardPaste(text) => {
                self.input.paste(&text);
            }
            Event::KeyboardCharInput(input) => {
                self.input.handle_input(input);
            }
            Event::UICursorBlink => {
                self.input.blink();
            }
            Event::UIResize(cols, rows) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
        }
    }

    /// Re-reads the terminal size, keeping the last known size when the query fails.
    pub fn refresh_viewport(&mut self, probe: &dyn ViewportProbe) {
        match probe.probe() {
            Ok(viewport) => {
                if viewport != self.viewport {
                    tracing::debug!(cols = viewport.cols, rows = viewport.rows, "viewport changed");
                }
                self.viewport = viewport;
                self.input.set_width(viewport.inner_width());
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    cols = self.viewport.cols,
                    rows = self.viewport.rows,
                    "keeping last known viewport"
                );
            }
        }
    }
}
