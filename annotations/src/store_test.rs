#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;

fn triangle() -> Vec<LatLng> {
    vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0), LatLng::new(1.0, 0.0)]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn store_default_is_empty() {
    let store = AnnotationStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.drawing_mode(), DrawingMode::Idle);
    assert_eq!(store.render_epoch(), 0);
}

#[test]
fn first_default_names() {
    let store = AnnotationStore::new();
    assert_eq!(store.next_marker_name(), "Marker 1");
    assert_eq!(store.next_polygon_name(), "Polygon 1");
}

// =============================================================
// Markers
// =============================================================

#[test]
fn add_marker_appends_and_disarms_tool() {
    let mut store = AnnotationStore::new();
    store.set_drawing_mode(DrawingMode::Point);
    let marker = store.add_marker(LatLng::new(40.0, -75.0), "Marker 1");

    assert_eq!(store.markers().len(), 1);
    assert_eq!(store.markers()[0], marker);
    assert_eq!(store.drawing_mode(), DrawingMode::Idle);
}

#[test]
fn add_then_delete_every_marker_leaves_empty_and_ids_unique() {
    let mut store = AnnotationStore::new();
    let mut ids = HashSet::new();
    for i in 0..25 {
        let name = store.next_marker_name();
        let marker = store.add_marker(LatLng::new(f64::from(i), 0.0), name);
        assert!(ids.insert(marker.id), "id reused");
    }
    for id in &ids {
        assert!(store.delete_marker(id).is_some());
    }
    assert!(store.markers().is_empty());

    let fresh = store.add_marker(LatLng::new(1.0, 1.0), "again");
    assert!(!ids.contains(&fresh.id));
}

#[test]
fn marker_names_do_not_repeat_after_delete() {
    let mut store = AnnotationStore::new();
    let first = store.add_marker(LatLng::new(0.0, 0.0), store.next_marker_name());
    store.delete_marker(&first.id);
    assert_eq!(store.next_marker_name(), "Marker 2");
}

#[test]
fn update_marker_position_moves_marker() {
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(0.0, 0.0), "m");
    assert!(store.update_marker_position(&marker.id, LatLng::new(12.5, -3.0)));
    assert_eq!(store.marker(&marker.id).map(|m| m.position), Some(LatLng::new(12.5, -3.0)));
}

#[test]
fn update_marker_position_unknown_id_is_noop() {
    let mut store = AnnotationStore::new();
    store.add_marker(LatLng::new(0.0, 0.0), "m");
    let before = store.clone();

    assert!(!store.update_marker_position(&Uuid::new_v4(), LatLng::new(5.0, 5.0)));
    assert!(!store.update_marker_position(&Uuid::new_v4(), LatLng::new(5.0, 5.0)));
    assert_eq!(store, before);
}

#[test]
fn delete_marker_unknown_id_is_noop() {
    let mut store = AnnotationStore::new();
    store.add_marker(LatLng::new(0.0, 0.0), "m");
    assert!(store.delete_marker(&Uuid::new_v4()).is_none());
    assert_eq!(store.markers().len(), 1);
}

#[test]
fn delete_marker_does_not_bump_epoch() {
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(0.0, 0.0), "m");
    store.delete_marker(&marker.id);
    assert_eq!(store.render_epoch(), 0);
}

// =============================================================
// Polygons
// =============================================================

#[test]
fn add_polygon_keeps_path_and_disarms_tool() {
    let mut store = AnnotationStore::new();
    store.set_drawing_mode(DrawingMode::Polygon);
    let polygon = store.add_polygon(triangle(), "Polygon 1").unwrap();

    assert_eq!(store.polygons().len(), 1);
    assert_eq!(polygon.path.len(), 3);
    assert_eq!(store.drawing_mode(), DrawingMode::Idle);
}

#[test]
fn add_polygon_rejects_fewer_than_three_vertices() {
    let mut store = AnnotationStore::new();
    store.set_drawing_mode(DrawingMode::Polygon);
    let err = store
        .add_polygon(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)], "bad")
        .unwrap_err();

    assert_eq!(err, StoreError::DegeneratePolygon { vertices: 2 });
    assert!(store.polygons().is_empty());
    assert_eq!(store.drawing_mode(), DrawingMode::Polygon);
    assert_eq!(store.next_polygon_name(), "Polygon 1");
}

#[test]
fn update_polygon_path_replaces_vertices() {
    let mut store = AnnotationStore::new();
    let polygon = store.add_polygon(triangle(), "p").unwrap();
    let square = vec![
        LatLng::new(0.0, 0.0),
        LatLng::new(0.0, 2.0),
        LatLng::new(2.0, 2.0),
        LatLng::new(2.0, 0.0),
    ];
    assert_eq!(store.update_polygon_path(&polygon.id, square.clone()), Ok(true));
    assert_eq!(store.polygon(&polygon.id).map(|p| p.path.clone()), Some(square));
}

#[test]
fn update_polygon_path_unknown_id_is_noop() {
    let mut store = AnnotationStore::new();
    store.add_polygon(triangle(), "p").unwrap();
    let before = store.clone();
    assert_eq!(store.update_polygon_path(&Uuid::new_v4(), triangle()), Ok(false));
    assert_eq!(store, before);
}

#[test]
fn update_polygon_path_rejects_degenerate_path() {
    let mut store = AnnotationStore::new();
    let polygon = store.add_polygon(triangle(), "p").unwrap();
    let result = store.update_polygon_path(&polygon.id, vec![LatLng::new(0.0, 0.0)]);
    assert_eq!(result, Err(StoreError::DegeneratePolygon { vertices: 1 }));
    assert_eq!(store.polygon(&polygon.id).map(Polygon::vertex_count), Some(3));
}

#[test]
fn update_polygon_vertex_edits_single_vertex() {
    let mut store = AnnotationStore::new();
    let polygon = store.add_polygon(triangle(), "p").unwrap();
    assert!(store.update_polygon_vertex(&polygon.id, 0, LatLng::new(10.0, 10.0)));

    let path = &store.polygon(&polygon.id).unwrap().path;
    assert_eq!(path[0], LatLng::new(10.0, 10.0));
    assert_eq!(path[1], LatLng::new(0.0, 1.0));
}

#[test]
fn update_polygon_vertex_out_of_range_is_noop() {
    let mut store = AnnotationStore::new();
    let polygon = store.add_polygon(triangle(), "p").unwrap();
    assert!(!store.update_polygon_vertex(&polygon.id, 3, LatLng::new(10.0, 10.0)));
    assert!(!store.update_polygon_vertex(&Uuid::new_v4(), 0, LatLng::new(10.0, 10.0)));
    assert_eq!(store.polygon(&polygon.id).unwrap().path, triangle());
}

#[test]
fn delete_polygon_bumps_epoch_by_one() {
    let mut store = AnnotationStore::new();
    let polygon = store.add_polygon(triangle(), "p").unwrap();
    let removed = store.delete_polygon(&polygon.id);

    assert_eq!(removed.map(|p| p.id), Some(polygon.id));
    assert!(store.polygons().is_empty());
    assert_eq!(store.render_epoch(), 1);
}

#[test]
fn delete_polygon_unknown_id_keeps_epoch() {
    let mut store = AnnotationStore::new();
    store.add_polygon(triangle(), "p").unwrap();
    assert!(store.delete_polygon(&Uuid::new_v4()).is_none());
    assert_eq!(store.render_epoch(), 0);
    assert_eq!(store.polygons().len(), 1);
}

#[test]
fn delete_dispatches_on_kind() {
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(0.0, 0.0), "m");
    let polygon = store.add_polygon(triangle(), "p").unwrap();

    assert!(!store.delete(AnnotationKind::Polygon, &marker.id));
    assert!(store.delete(AnnotationKind::Marker, &marker.id));
    assert!(store.delete(AnnotationKind::Polygon, &polygon.id));
    assert!(store.is_empty());
}

// =============================================================
// Rename
// =============================================================

#[test]
fn rename_marker_round_trips() {
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(0.0, 0.0), "Marker 1");
    assert!(store.rename(AnnotationKind::Marker, &marker.id, "Trailhead"));
    assert_eq!(store.marker(&marker.id).map(|m| m.name.as_str()), Some("Trailhead"));
}

#[test]
fn rename_polygon_round_trips() {
    let mut store = AnnotationStore::new();
    let polygon = store.add_polygon(triangle(), "Polygon 1").unwrap();
    assert!(store.rename(AnnotationKind::Polygon, &polygon.id, "Lake"));
    assert_eq!(store.polygon(&polygon.id).map(|p| p.name.as_str()), Some("Lake"));
}

#[test]
fn rename_accepts_empty_string() {
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(0.0, 0.0), "Marker 1");
    assert!(store.rename(AnnotationKind::Marker, &marker.id, ""));
    assert_eq!(store.marker(&marker.id).map(|m| m.name.as_str()), Some(""));
}

#[test]
fn rename_unknown_id_or_wrong_kind_is_noop() {
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(0.0, 0.0), "Marker 1");
    let before = store.clone();
    assert!(!store.rename(AnnotationKind::Marker, &Uuid::new_v4(), "x"));
    assert!(!store.rename(AnnotationKind::Polygon, &marker.id, "x"));
    assert_eq!(store, before);
}

// =============================================================
// Drawing mode
// =============================================================

#[test]
fn selecting_a_tool_replaces_the_active_one() {
    let mut store = AnnotationStore::new();
    store.set_drawing_mode(DrawingMode::Point);
    store.set_drawing_mode(DrawingMode::Polygon);
    assert_eq!(store.drawing_mode(), DrawingMode::Polygon);
}

#[test]
fn cancel_drawing_returns_to_idle() {
    let mut store = AnnotationStore::new();
    store.set_drawing_mode(DrawingMode::Polygon);
    store.cancel_drawing();
    assert_eq!(store.drawing_mode(), DrawingMode::Idle);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn drag_then_delete_observes_issuance_order() {
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(0.0, 0.0), "m");
    assert!(store.update_marker_position(&marker.id, LatLng::new(1.0, 1.0)));
    assert!(store.delete_marker(&marker.id).is_some());
    assert!(!store.update_marker_position(&marker.id, LatLng::new(2.0, 2.0)));
    assert!(store.markers().is_empty());
}
