//! Right-hand panel: tab strip above the coordinates table.

use leptos::prelude::*;

use crate::components::coordinates_table::CoordinatesTable;
use crate::components::table_tabs::TableTabs;

#[component]
pub fn TablePanel() -> impl IntoView {
    view! {
        <section class="table-panel">
            <TableTabs/>
            <CoordinatesTable/>
        </section>
    }
}
