//! Tab strip that switches the table between polygons and markers.

use annotations::table::TableTab;
use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn TableTabs() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let tab = move |tab: TableTab| {
        view! {
            <li class="table-tabs__item">
                <button
                    class="table-tabs__tab"
                    class:table-tabs__tab--active=move || ui.with(|u| u.is_active(tab))
                    on:click=move |_| {
                        ui.update(|u| {
                            u.select_tab(tab);
                        });
                    }
                >
                    {tab.title()}
                </button>
            </li>
        }
    };

    view! {
        <ul class="table-tabs">
            {tab(TableTab::Polygons)}
            {tab(TableTab::Markers)}
        </ul>
    }
}
