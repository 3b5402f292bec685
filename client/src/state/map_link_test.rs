use annotations::LatLng;

use super::*;

fn triangle() -> Vec<LatLng> {
    vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 0.0), LatLng::new(1.0, 1.0)]
}

// =============================================================
// Delete without a mounted map
// =============================================================

#[test]
fn delete_without_map_removes_polygon_and_bumps_epoch() {
    let link = MapLink::new();
    let mut store = AnnotationStore::new();
    let polygon = store.add_polygon(triangle(), "P").unwrap();

    assert!(link.delete(&mut store, AnnotationKind::Polygon, &polygon.id));
    assert!(store.polygon(&polygon.id).is_none());
    assert_eq!(store.render_epoch(), 1);
}

#[test]
fn delete_without_map_removes_marker() {
    let link = MapLink::default();
    let mut store = AnnotationStore::new();
    let marker = store.add_marker(LatLng::new(40.0, -75.0), "M");

    assert!(link.delete(&mut store, AnnotationKind::Marker, &marker.id));
    assert!(store.marker(&marker.id).is_none());
    assert_eq!(store.render_epoch(), 0);
}

#[test]
fn delete_of_unknown_id_is_noop() {
    let link = MapLink::new();
    let mut store = AnnotationStore::new();
    assert!(!link.delete(&mut store, AnnotationKind::Polygon, &uuid::Uuid::new_v4()));
    assert_eq!(store.render_epoch(), 0);
}
