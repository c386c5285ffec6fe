use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Label embedded in the frame's top edge. Fixed once the box is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTitle(String);

impl FrameTitle {
    pub fn new(text: &str) -> FrameTitle {
        return FrameTitle(text.replace(['\n', '\r', '\t'], " "));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    /// Terminal columns taken by the bare title text.
    pub fn width(&self) -> usize {
        return UnicodeWidthStr::width(self.0.as_str());
    }
}

impl Default for FrameTitle {
    fn default() -> Self {
        return FrameTitle::new("group");
    }
}

impl fmt::Display for FrameTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}
