#[cfg(test)]
#[path = "titled_box_test.rs"]
mod tests;

use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::AppState;
use super::TitleRow;

pub const BORDER_COLOR: Color = Color::Rgb(0x59, 0x80, 0x64);
pub const TITLE_COLOR: Color = Color::Rgb(0x74, 0xA3, 0x82);
pub const HELP_TEXT: &str = " 'ctrl + c' Exit";

// Bottom border plus one row of padding around the single input line.
const CONTENT_HEIGHT: u16 = 4;

fn border_style() -> Style {
    return Style::default().fg(BORDER_COLOR);
}

fn title_style() -> Style {
    return Style::default()
        .fg(TITLE_COLOR)
        .add_modifier(Modifier::BOLD);
}

fn centered_line(area: Rect, width: usize) -> Rect {
    let width = u16::try_from(width).unwrap_or(u16::MAX).min(area.width);
    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height.min(1),
    };
}

/// Draws the title row, the open-topped content frame with the input field
/// centred inside it, and the help line.
pub fn render(frame: &mut Frame, app_state: &AppState) {
    let mut area = frame.area();
    area.width = area.width.min(app_state.viewport.cols);

    let [title_area, content_area, _, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(CONTENT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let title_row = TitleRow::layout(usize::from(area.width).saturating_sub(2), &app_state.title);
    frame.render_widget(
        Paragraph::new(title_row.to_line(border_style(), title_style())),
        title_area,
    );

    let block = Block::new()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(border_style())
        .padding(Padding::uniform(1));
    let inner = block.inner(content_area);
    frame.render_widget(block, content_area);

    let field_width = app_state
        .input
        .display_width()
        .min(app_state.input.width());
    let field_area = centered_line(inner, field_width);
    if !field_area.is_empty() {
        frame.render_widget(app_state.input.textarea(), field_area);
    }

    frame.render_widget(Paragraph::new(HELP_TEXT), help_area);
}
