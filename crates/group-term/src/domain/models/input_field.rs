#[cfg(test)]
#[path = "input_field_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use tui_textarea::CursorMove;
use tui_textarea::Input;
use tui_textarea::TextArea;
use unicode_width::UnicodeWidthStr;

/// Single line text entry. Editing rules come from `tui_textarea`, this type
/// only keeps the content on one line and drives the cursor blink.
pub struct InputField<'a> {
    textarea: TextArea<'a>,
    placeholder: String,
    focused: bool,
    cursor_visible: bool,
    width: usize,
}

fn styled_textarea<'a>(lines: Vec<String>, placeholder: &str) -> TextArea<'a> {
    let mut textarea = TextArea::new(lines);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    return textarea;
}

fn sanitize(text: &str) -> String {
    return text
        .replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c => c,
        })
        .collect();
}

impl<'a> InputField<'a> {
    pub fn new(placeholder: &str, width: usize) -> InputField<'a> {
        let mut field = InputField {
            textarea: styled_textarea(vec![], placeholder),
            placeholder: placeholder.to_string(),
            focused: false,
            cursor_visible: true,
            width,
        };
        field.focus();
        return field;
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.apply_cursor_style();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.apply_cursor_style();
    }

    pub fn is_focused(&self) -> bool {
        return self.focused;
    }

    pub fn value(&self) -> String {
        return self.textarea.lines().join(" ");
    }

    /// Cursor column, counted in characters.
    pub fn cursor(&self) -> usize {
        return self.textarea.cursor().1;
    }

    pub fn placeholder(&self) -> &str {
        return &self.placeholder;
    }

    pub fn width(&self) -> usize {
        return self.width;
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    pub fn is_cursor_visible(&self) -> bool {
        return self.cursor_visible;
    }

    pub fn textarea(&self) -> &TextArea<'a> {
        return &self.textarea;
    }

    /// Columns needed to show the content (or the placeholder) plus the cursor cell.
    pub fn display_width(&self) -> usize {
        let value = self.value();
        if value.is_empty() {
            return UnicodeWidthStr::width(self.placeholder.as_str()) + 1;
        }

        return UnicodeWidthStr::width(value.as_str()) + 1;
    }

    pub fn handle_input(&mut self, input: Input) -> bool {
        if !self.focused {
            return false;
        }

        let modified = self.textarea.input(input);
        self.flatten();
        self.show_cursor();
        return modified;
    }

    pub fn paste(&mut self, text: &str) -> bool {
        if !self.focused {
            return false;
        }

        let text = sanitize(text);
        self.show_cursor();
        if text.is_empty() {
            return false;
        }

        return self.textarea.insert_str(text);
    }

    pub fn blink(&mut self) {
        if !self.focused {
            return;
        }

        self.cursor_visible = !self.cursor_visible;
        self.apply_cursor_style();
    }

    pub fn reset(&mut self) {
        self.textarea = styled_textarea(vec![], &self.placeholder);
        self.show_cursor();
    }

    fn show_cursor(&mut self) {
        self.cursor_visible = true;
        self.apply_cursor_style();
    }

    fn apply_cursor_style(&mut self) {
        let mut style = Style::default();
        if self.focused && self.cursor_visible {
            style = style.add_modifier(Modifier::REVERSED);
        }
        self.textarea.set_cursor_style(style);
    }

    // Delegated editing may split the line (Enter, Ctrl+M); join it back.
    fn flatten(&mut self) {
        if self.textarea.lines().len() <= 1 {
            return;
        }

        let (row, col) = self.textarea.cursor();
        let offset = self.textarea.lines()[..row]
            .iter()
            .map(|line| return line.chars().count() + 1)
            .sum::<usize>()
            + col;
        let value = self.textarea.lines().join(" ");

        self.textarea = styled_textarea(vec![value], &self.placeholder);
        self.textarea.move_cursor(CursorMove::Jump(
            0,
            u16::try_from(offset).unwrap_or(u16::MAX),
        ));
    }
}
