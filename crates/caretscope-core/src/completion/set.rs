//! Deduplicating container for completion entries of one group.

use std::collections::HashSet;

use crate::types::{CompletionEntry, CompletionKind};

/// Collects `(kind, text)` pairs, suppressing duplicates under
/// case-insensitive text equality. Insertion is idempotent; emission is
/// sorted case-insensitively by text, ties broken by kind.
#[derive(Debug, Default, Clone)]
pub struct CompletionSet {
    entries: Vec<CompletionEntry>,
    seen: HashSet<(CompletionKind, String)>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: CompletionKind, text: impl Into<String>) {
        let text = text.into();
        let key = (kind, text.to_lowercase());
        if self.seen.insert(key) {
            self.entries.push(CompletionEntry { kind, text });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, kind: CompletionKind, text: &str) -> bool {
        self.seen.contains(&(kind, text.to_lowercase()))
    }

    /// Consumes the set, yielding its entries in presentation order.
    pub fn into_sorted(mut self) -> Vec<CompletionEntry> {
        self.entries.sort_by(|a, b| {
            a.text
                .to_lowercase()
                .cmp(&b.text.to_lowercase())
                .then(a.kind.cmp(&b.kind))
        });
        self.entries
    }
}
