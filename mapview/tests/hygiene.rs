//! Hygiene for the map view crate.
//!
//! Two rules on top of the usual panic budget: JS interop stays inside
//! `google.rs`, and interop escape hatches there are counted. Every other
//! module has to stay runnable against the fake widget in plain `cargo test`.
//! Sibling `*_test.rs` files are skipped. Budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics and silent loss, anywhere in the crate.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// JS interop, inside the binding.
/// Every listener closure is built in one place and owned by its guard.
const MAX_CLOSURE_NEW: usize = 1;
/// Leaked closures outlive the widget and keep firing into a dropped core.
const MAX_FORGET: usize = 0;
/// Unchecked casts of SDK values whose type the event name already fixes.
const MAX_UNCHECKED_CAST: usize = 5;

const BINDING: &str = "google.rs";
const INTEROP_CRATES: &[&str] = &["wasm_bindgen", "js_sys", "web_sys"];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path = path.to_string_lossy().to_string();
            if path.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits<'a>(files: impl IntoIterator<Item = &'a SourceFile>, pattern: &str) -> Vec<String> {
    files
        .into_iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, _)| format!("  {}:{}", file.path, n + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn assert_budget(found: &[String], max: usize, what: &str) {
    assert!(
        found.len() <= max,
        "{what} budget exceeded: found {}, max {max}.\n{}",
        found.len(),
        found.join("\n")
    );
}

fn binding(files: &[SourceFile]) -> Vec<&SourceFile> {
    files.iter().filter(|f| f.path.ends_with(BINDING)).collect()
}

// =============================================================
// Panics and silent loss
// =============================================================

#[test]
fn panic_budgets() {
    let files = source_files();
    assert_budget(&hits(&files, ".unwrap()"), MAX_UNWRAP, ".unwrap()");
    assert_budget(&hits(&files, ".expect("), MAX_EXPECT, ".expect()");
    assert_budget(&hits(&files, "panic!("), MAX_PANIC, "panic!()");
}

#[test]
fn silent_discard_budgets() {
    let files = source_files();
    assert_budget(&hits(&files, "let _ ="), MAX_SILENT_DISCARD, "let _ =");
    assert_budget(&hits(&files, ".ok()"), MAX_DOT_OK, ".ok()");
}

// =============================================================
// JS interop
// =============================================================

#[test]
fn binding_file_exists() {
    assert_eq!(binding(&source_files()).len(), 1, "expected exactly one {BINDING}");
}

#[test]
fn interop_crates_stay_in_the_binding() {
    let files = source_files();
    let outside: Vec<&SourceFile> = files.iter().filter(|f| !f.path.ends_with(BINDING)).collect();
    for krate in INTEROP_CRATES {
        let found = hits(outside.iter().copied(), &format!("{krate}::"));
        assert!(found.is_empty(), "`{krate}` used outside {BINDING}:\n{}", found.join("\n"));
    }
}

#[test]
fn closure_budgets() {
    let files = source_files();
    assert_budget(&hits(&files, "Closure::"), MAX_CLOSURE_NEW, "Closure construction");
    assert_budget(&hits(&files, ".forget()"), MAX_FORGET, ".forget()");
}

#[test]
fn unchecked_cast_budget() {
    let files = source_files();
    assert_budget(&hits(binding(&files), "unchecked_"), MAX_UNCHECKED_CAST, "unchecked cast");
}
