use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_polygons() {
    let state = UiState::default();
    assert_eq!(state.table_tab, TableTab::Polygons);
    assert!(state.is_active(TableTab::Polygons));
    assert!(!state.is_active(TableTab::Markers));
}

// =============================================================
// Tab selection
// =============================================================

#[test]
fn select_tab_switches_once() {
    let mut state = UiState::default();
    assert!(state.select_tab(TableTab::Markers));
    assert!(!state.select_tab(TableTab::Markers));
    assert!(state.is_active(TableTab::Markers));
}

#[test]
fn exactly_one_tab_is_active() {
    let mut state = UiState::default();
    for tab in [TableTab::Markers, TableTab::Polygons, TableTab::Markers] {
        state.select_tab(tab);
        let active = [TableTab::Polygons, TableTab::Markers]
            .into_iter()
            .filter(|t| state.is_active(*t))
            .count();
        assert_eq!(active, 1);
    }
}
