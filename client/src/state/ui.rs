#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use annotations::table::TableTab;

/// UI state that is not part of the annotation data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub table_tab: TableTab,
}

impl UiState {
    /// Switch the table tab. Returns `false` if it was already showing.
    pub fn select_tab(&mut self, tab: TableTab) -> bool {
        if self.table_tab == tab {
            return false;
        }
        self.table_tab = tab;
        true
    }

    #[must_use]
    pub fn is_active(&self, tab: TableTab) -> bool {
        self.table_tab == tab
    }
}
