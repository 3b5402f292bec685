//! Editable table of markers or polygons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows are keyed by annotation id and read their content from the store by
//! id, so map-side edits (drag, vertex release) show up in place. Inputs keep
//! a local draft; a commit either writes a validated value to the store or
//! puts the draft back to the committed value.

#[cfg(test)]
#[path = "coordinates_table_test.rs"]
mod coordinates_table_test;

use annotations::table::{self, Axis, CellTarget, TableRow, TableTab};
use annotations::{AnnotationId, AnnotationKind, AnnotationStore};
use leptos::prelude::*;

use crate::state::map_link::MapLink;
use crate::state::ui::UiState;

fn empty_message(tab: TableTab) -> &'static str {
    match tab {
        TableTab::Polygons => "No polygons yet. Use \"Draw polygon\" to add one.",
        TableTab::Markers => "No markers yet. Use \"Add marker\" to place one.",
    }
}

fn edit_button_label(editing: bool) -> &'static str {
    if editing { "Save" } else { "Edit" }
}

/// Cell caption: hemisphere letter for markers, numbered point for vertices.
fn cell_caption(target: CellTarget, axis: Axis) -> String {
    let letter = match axis {
        Axis::Latitude => "N",
        Axis::Longitude => "W",
    };
    match target {
        CellTarget::Marker(_) => format!("° {letter}"),
        CellTarget::Vertex { index, .. } => format!("Point {} ° {letter}", index + 1),
    }
}

fn committed_text(row: Option<&TableRow>, target: CellTarget, axis: Axis) -> String {
    row.and_then(|r| r.cell_text(target, axis)).unwrap_or_default()
}

/// Table for the active tab.
#[component]
pub fn CoordinatesTable() -> impl IntoView {
    let store = expect_context::<RwSignal<AnnotationStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let tab = move || ui.with(|u| u.table_tab);
    let entries = move || {
        let tab = tab();
        store.with(|s| {
            table::rows(s, tab)
                .into_iter()
                .map(|row| (row.kind, row.id))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="coordinates-table">
            <table class="coordinates-table__table">
                <thead>
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Coordinates"</th>
                        <th scope="col">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=entries
                        key=|entry| entry.1
                        children=move |(kind, id)| view! { <AnnotationRow kind=kind id=id/> }
                    />
                </tbody>
            </table>
            <Show when=move || entries().is_empty()>
                <p class="coordinates-table__empty">{move || empty_message(tab())}</p>
            </Show>
        </div>
    }
}

/// One marker or polygon row with its own edit toggle.
#[component]
fn AnnotationRow(kind: AnnotationKind, id: AnnotationId) -> impl IntoView {
    let store = expect_context::<RwSignal<AnnotationStore>>();
    let map = use_context::<MapLink>().unwrap_or_default();
    let editing = RwSignal::new(false);
    let row = Memo::new(move |_| store.with(|s| table::row(s, kind, &id)));

    let name = move || row.with(|r| r.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let summary = move || row.with(|r| r.as_ref().map(table::TableRow::summary).unwrap_or_default());
    let targets = move || row.with(|r| r.as_ref().map(table::TableRow::cell_targets).unwrap_or_default());

    let draft_name = RwSignal::new(row.with_untracked(|r| r.as_ref().map(|r| r.name.clone()).unwrap_or_default()));
    Effect::new(move || draft_name.set(name()));
    let commit_name = move || {
        let next = draft_name.get_untracked();
        if row.with_untracked(|r| r.as_ref().is_some_and(|r| r.name == next)) {
            return;
        }
        store.update(|s| {
            s.rename(kind, &id, next);
        });
    };

    let on_delete = move |_| {
        store.update(|s| {
            map.delete(s, kind, &id);
        });
    };

    view! {
        <tr class="coordinates-table__row" class:coordinates-table__row--editing=move || editing.get()>
            <th scope="row" class="coordinates-table__name">
                <Show when=move || editing.get() fallback=move || view! { <span>{name}</span> }>
                    <input
                        class="coordinates-table__name-input"
                        type="text"
                        prop:value=move || draft_name.get()
                        on:input=move |ev| draft_name.set(event_target_value(&ev))
                        on:blur=move |_| commit_name()
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                commit_name();
                            }
                        }
                    />
                </Show>
            </th>
            <td class="coordinates-table__coordinates">
                <Show when=move || editing.get() fallback=move || view! { <span>{summary}</span> }>
                    <For
                        each=targets
                        key=|target| *target
                        children=move |target| {
                            view! {
                                <div class="coordinates-table__pair">
                                    <CoordinateCell row=row target=target axis=Axis::Latitude/>
                                    <CoordinateCell row=row target=target axis=Axis::Longitude/>
                                </div>
                            }
                        }
                    />
                </Show>
            </td>
            <td class="coordinates-table__actions">
                <button
                    class="coordinates-table__action"
                    on:click=move |_| {
                        if editing.get_untracked() {
                            commit_name();
                        }
                        editing.update(|e| *e = !*e);
                    }
                >
                    {move || edit_button_label(editing.get())}
                </button>
                " | "
                <button class="coordinates-table__action coordinates-table__action--danger" on:click=on_delete>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Numeric input bound to one coordinate component.
///
/// Reads its committed value from the owning row's memo, so edits to other
/// annotations leave an open draft alone.
#[component]
fn CoordinateCell(row: Memo<Option<TableRow>>, target: CellTarget, axis: Axis) -> impl IntoView {
    let store = expect_context::<RwSignal<AnnotationStore>>();
    let (min, max) = axis.range();

    let committed = move || row.with(|r| committed_text(r.as_ref(), target, axis));
    let draft = RwSignal::new(row.with_untracked(|r| committed_text(r.as_ref(), target, axis)));
    let rejected = RwSignal::new(None::<String>);
    Effect::new(move || draft.set(committed()));

    let commit = move || {
        let raw = draft.get_untracked();
        if let Err(err) = table::parse_coordinate(axis, &raw) {
            log::warn!("coordinate input rejected: {err}");
            rejected.set(Some(err.to_string()));
            draft.set(row.with_untracked(|r| committed_text(r.as_ref(), target, axis)));
            return;
        }
        rejected.set(None);
        store.update(|s| {
            if let Err(err) = table::commit_coordinate_edit(s, target, axis, &raw) {
                log::warn!("coordinate commit failed: {err}");
            }
        });
    };

    view! {
        <label class="coordinate-cell">
            <span class="coordinate-cell__caption">{cell_caption(target, axis)}</span>
            <input
                class="coordinate-cell__input"
                class:coordinate-cell__input--rejected=move || rejected.with(Option::is_some)
                type="number"
                step="0.0001"
                min=min.to_string()
                max=max.to_string()
                title=move || rejected.get().unwrap_or_default()
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:blur=move |_| commit()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
            />
        </label>
    }
}
