// Lesson list selection state.
// Keyboard cursor over the lesson buttons of the course view.

use ratatui::widgets::ListState;

/// Selection over a list of `len` items.
#[derive(Debug, Clone, Default)]
pub struct LessonCursor {
    pub list_state: ListState,
}

impl LessonCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the next item, staying on the last one.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => len - 1,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item, staying on the first one.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Point at `index`, or clear the selection for an empty list.
    pub fn reset(&mut self, len: usize, index: usize) {
        if len == 0 {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(index.min(len - 1)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_next_and_prev_clamp() {
        let mut cursor = LessonCursor::new();
        cursor.select_next(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.select_next(3);
        cursor.select_next(3);
        cursor.select_next(3);
        assert_eq!(cursor.selected(), Some(2));

        cursor.select_prev(3);
        assert_eq!(cursor.selected(), Some(1));
        cursor.select_prev(3);
        cursor.select_prev(3);
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_is_ignored() {
        let mut cursor = LessonCursor::new();
        cursor.select_next(0);
        cursor.select_prev(0);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn test_reset() {
        let mut cursor = LessonCursor::new();
        cursor.reset(2, 5);
        assert_eq!(cursor.selected(), Some(1));
        cursor.reset(0, 0);
        assert_eq!(cursor.selected(), None);
    }
}
