//! Side-table from annotation id to live widget handle.
//!
//! Handles never live inside the canonical entities. The table holds at most
//! one handle per id and is pruned whenever the store drops an id.

#[cfg(test)]
#[path = "handles_test.rs"]
mod handles_test;

use std::collections::HashMap;

use annotations::AnnotationId;

/// Arena of widget handles keyed by annotation id.
#[derive(Debug)]
pub struct HandleTable<H> {
    entries: HashMap<AnnotationId, H>,
}

impl<H> HandleTable<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Store `handle` for `id`, returning the handle it displaced so the
    /// caller can detach it.
    pub fn register(&mut self, id: AnnotationId, handle: H) -> Option<H> {
        self.entries.insert(id, handle)
    }

    #[must_use]
    pub fn get(&self, id: &AnnotationId) -> Option<&H> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &AnnotationId) -> bool {
        self.entries.contains_key(id)
    }

    /// Remove and return the handle for `id`.
    pub fn detach(&mut self, id: &AnnotationId) -> Option<H> {
        self.entries.remove(id)
    }

    /// Remove every handle whose id fails `is_live`, returning them.
    pub fn retain_live(&mut self, mut is_live: impl FnMut(&AnnotationId) -> bool) -> Vec<H> {
        let stale: Vec<AnnotationId> = self.entries.keys().filter(|id| !is_live(id)).copied().collect();
        stale.iter().filter_map(|id| self.entries.remove(id)).collect()
    }

    /// Remove every handle.
    pub fn drain(&mut self) -> Vec<H> {
        self.entries.drain().map(|(_, handle)| handle).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H> Default for HandleTable<H> {
    fn default() -> Self {
        Self::new()
    }
}
