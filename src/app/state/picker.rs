use ratatui::widgets::ListState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickerState {
    pub list_state: ListState,
}

impl PickerState {
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: usize) {
        self.list_state.select(Some(index));
    }
}
