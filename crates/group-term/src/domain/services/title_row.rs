#[cfg(test)]
#[path = "title_row_test.rs"]
mod tests;

use std::fmt;

use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::domain::models::FrameTitle;

pub const TOP_LEFT: &str = "┌";
pub const TOP_RIGHT: &str = "┐";
pub const HORIZONTAL: &str = "─";

/// Dashes kept before the label when the row is wide enough.
pub const LEFT_RULE: usize = 3;

/// Top edge of the frame: corner, rule, padded title, rule, corner.
///
/// `left + width(label) + right` always equals the inner width the row was
/// laid out for. On narrow terminals the left rule shrinks first, then the
/// title text is cut to fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRow {
    pub left: usize,
    pub label: String,
    pub right: usize,
}

fn truncate(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, c) in text.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &text[..idx];
        }
    }

    return text;
}

impl TitleRow {
    pub fn layout(inner_width: usize, title: &FrameTitle) -> TitleRow {
        if inner_width < 2 {
            return TitleRow {
                left: inner_width,
                label: "".to_string(),
                right: 0,
            };
        }

        let label = format!(" {} ", truncate(title.as_str(), inner_width - 2));
        let dashes = inner_width - UnicodeWidthStr::width(label.as_str());
        let left = dashes.min(LEFT_RULE);

        return TitleRow {
            left,
            label,
            right: dashes - left,
        };
    }

    /// Total columns including both corners.
    pub fn width(&self) -> usize {
        return 2 + self.left + UnicodeWidthStr::width(self.label.as_str()) + self.right;
    }

    pub fn to_line(&self, border_style: Style, title_style: Style) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{TOP_LEFT}{}", HORIZONTAL.repeat(self.left)),
            border_style,
        )];
        if !self.label.is_empty() {
            spans.push(Span::styled(self.label.clone(), title_style));
        }
        spans.push(Span::styled(
            format!("{}{TOP_RIGHT}", HORIZONTAL.repeat(self.right)),
            border_style,
        ));

        return Line::from(spans);
    }
}

impl fmt::Display for TitleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "{TOP_LEFT}{}{}{}{TOP_RIGHT}",
            HORIZONTAL.repeat(self.left),
            self.label,
            HORIZONTAL.repeat(self.right)
        );
    }
}
