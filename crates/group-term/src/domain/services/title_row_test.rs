use insta::assert_snapshot;
use ratatui::style::Style;

use super::*;
use crate::domain::models::Viewport;

fn row_for(cols: u16, title: &str) -> TitleRow {
    return TitleRow::layout(Viewport::new(cols, 24).inner_width(), &FrameTitle::new(title));
}

#[test]
fn it_lays_out_a_42_column_terminal() {
    let row = row_for(42, "group");
    assert_eq!(row.left, 3);
    assert_eq!(row.label, " group ");
    assert_eq!(row.right, 30);
    assert_snapshot!(row.to_string(), @"┌─── group ──────────────────────────────┐");
}

#[test]
fn it_fills_the_viewport_when_wide_enough() {
    // title content (7) + left rule (3) + both corners (2)
    for cols in 12..=300 {
        let row = row_for(cols, "group");
        assert_eq!(row.width(), usize::from(cols), "cols={cols}");
        assert_eq!(row.left, LEFT_RULE, "cols={cols}");
        assert_eq!(row.right, usize::from(cols) - 2 - 7 - 3, "cols={cols}");
        assert_eq!(UnicodeWidthStr::width(row.to_string().as_str()), usize::from(cols));
    }
}

#[test]
fn it_never_overflows_narrow_terminals() {
    for cols in 0..12 {
        let row = row_for(cols, "group");
        assert!(row.width() <= usize::from(cols).max(2), "cols={cols}");
    }
}

#[test]
fn it_shrinks_the_left_rule_first() {
    let row = row_for(10, "group");
    assert_eq!(row.to_string(), "┌─ group ┐");
    assert_eq!((row.left, row.right), (1, 0));
}

#[test]
fn it_truncates_the_title() {
    assert_eq!(row_for(6, "group").to_string(), "┌ gr ┐");
    assert_eq!(row_for(4, "group").to_string(), "┌  ┐");
    assert_eq!(row_for(3, "group").to_string(), "┌─┐");
    assert_eq!(row_for(0, "group").to_string(), "┌┐");
}

#[test]
fn it_measures_wide_characters() {
    let row = row_for(20, "群組");
    assert_eq!(row.label, " 群組 ");
    assert_eq!(row.width(), 20);
    assert_eq!(row.right, 20 - 2 - 6 - 3);

    // Half of a wide glyph is dropped instead of overflowing.
    let row = row_for(7, "群組");
    assert_eq!(row.label, " 群 ");
    assert_eq!(row.width(), 7);
}

#[test]
fn it_styles_border_and_title_separately() {
    let border = Style::default().fg(ratatui::style::Color::Green);
    let title = Style::default().fg(ratatui::style::Color::Yellow);
    let line = row_for(42, "group").to_line(border, title);

    assert_eq!(line.spans.len(), 3);
    assert_eq!(line.spans[0].content, "┌───");
    assert_eq!(line.spans[0].style, border);
    assert_eq!(line.spans[1].content, " group ");
    assert_eq!(line.spans[1].style, title);
    assert_eq!(line.spans[2].style, border);
    assert_eq!(line.width(), 42);
}
