use tui_textarea::Input;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardPaste(String),
    UICursorBlink,
    UIResize(u16, u16),
}
