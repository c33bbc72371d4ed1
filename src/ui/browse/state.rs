use crate::mvi::UiState;
use crate::view::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowseState {
    pub tab: Tab,
    /// Index into the active tab's product list.
    pub selected: usize,
}

impl UiState for BrowseState {}

impl BrowseState {
    /// Grid row of the selected card.
    pub fn selected_row(&self, columns: usize) -> usize {
        self.selected / columns.max(1)
    }
}
