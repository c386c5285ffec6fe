/// Visible character grid of the terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Viewport {
        return Viewport { cols, rows };
    }

    /// Columns between the two frame corners.
    pub fn inner_width(&self) -> usize {
        return usize::from(self.cols).saturating_sub(2);
    }
}
