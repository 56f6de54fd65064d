// crates/controls_core/src/ui/selection.rs

/// Something a `SelectionList` can highlight.
pub trait Row {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Wraparound cursor over an ordered set of rows.
///
/// Invariant: when the list is non-empty, `selected < rows.len()` and exactly
/// the selected row is active. Every cursor move re-marks the rows before
/// returning, so no caller ever observes zero or two active rows.
#[derive(Debug, Clone)]
pub struct SelectionList<R: Row> {
    rows: Vec<R>,
    selected: usize,
}

impl<R: Row> SelectionList<R> {
    pub fn new(rows: Vec<R>) -> Self {
        let mut list = Self { rows, selected: 0 };
        list.mark_selected();
        list
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn selected(&self) -> Option<&R> {
        self.rows.get(self.selected)
    }

    pub fn selected_mut(&mut self) -> Option<&mut R> {
        self.rows.get_mut(self.selected)
    }

    pub fn move_up(&mut self) {
        let n = self.rows.len();
        if n == 0 {
            return;
        }
        self.selected = (self.selected + n - 1) % n;
        self.mark_selected();
    }

    pub fn move_down(&mut self) {
        let n = self.rows.len();
        if n == 0 {
            return;
        }
        self.selected = (self.selected + 1) % n;
        self.mark_selected();
    }

    /// The row whose bound action should run; None for an empty list.
    pub fn accept(&mut self) -> Option<&mut R> {
        self.selected_mut()
    }

    fn mark_selected(&mut self) {
        let selected = self.selected;
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_active(i == selected);
        }
    }
}
