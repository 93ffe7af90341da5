/// Fraction of the list, counted from the end, in which the next page is requested.
pub const END_REACHED_THRESHOLD: f64 = 0.1;

/// View-local state of the feed screen. The feed itself lives in the controller.
pub struct TuiApp {
    pub selected: usize,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            selected: 0,
            should_quit: false,
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.selected = 0;
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Whether the selection is close enough to the end to fetch more.
    pub fn end_reached(&self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let remaining = len - 1 - self.selected.min(len - 1);
        remaining as f64 <= len as f64 * END_REACHED_THRESHOLD
    }

    pub fn is_scrolled(&self) -> bool {
        self.selected != 0
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
