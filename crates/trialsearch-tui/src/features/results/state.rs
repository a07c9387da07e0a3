//! Results list view state.

/// Scroll state for the result card list.
///
/// The offset is in rendered lines, clamped by the reducer against the
/// current card line count.
#[derive(Debug, Default)]
pub struct ResultsViewState {
    pub offset: usize,
}

impl ResultsViewState {
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize, max_offset: usize) {
        self.offset = (self.offset + lines).min(max_offset);
    }

    /// Back to the top; called when a new result set replaces the old one.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
