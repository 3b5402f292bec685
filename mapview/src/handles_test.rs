use uuid::Uuid;

use super::*;

#[test]
fn new_table_is_empty() {
    let table: HandleTable<u32> = HandleTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn register_returns_displaced_handle() {
    let mut table = HandleTable::new();
    let id = Uuid::new_v4();
    assert_eq!(table.register(id, 1), None);
    assert_eq!(table.register(id, 2), Some(1));
    assert_eq!(table.get(&id), Some(&2));
    assert_eq!(table.len(), 1);
}

#[test]
fn detach_removes_entry() {
    let mut table = HandleTable::new();
    let id = Uuid::new_v4();
    table.register(id, "h");
    assert_eq!(table.detach(&id), Some("h"));
    assert!(!table.contains(&id));
    assert_eq!(table.detach(&id), None);
}

#[test]
fn lookup_miss_is_none() {
    let table: HandleTable<u8> = HandleTable::new();
    assert!(table.get(&Uuid::new_v4()).is_none());
}

#[test]
fn retain_live_returns_stale_handles() {
    let mut table = HandleTable::new();
    let keep = Uuid::new_v4();
    let gone = Uuid::new_v4();
    table.register(keep, 'k');
    table.register(gone, 'd');

    let stale = table.retain_live(|id| *id == keep);
    assert_eq!(stale, vec!['d']);
    assert!(table.contains(&keep));
    assert!(!table.contains(&gone));
}

#[test]
fn drain_empties_table() {
    let mut table = HandleTable::new();
    table.register(Uuid::new_v4(), 1);
    table.register(Uuid::new_v4(), 2);
    let mut drained = table.drain();
    drained.sort_unstable();
    assert_eq!(drained, vec![1, 2]);
    assert!(table.is_empty());
}
