// ============================================================
// Layer 3 — Collaborator Traits
// ============================================================
// The corpus and the vocabulary live in an external store. The
// core only ever talks to it through these traits, so the same
// pipeline runs against a JSON file, an in-memory fixture, or a
// database-backed implementation.
//
// Implementations:
//   - JsonFileStore  → two JSON files on disk
//   - InMemoryStore  → Vecs behind a RefCell (tests, embedding)
//
// Store failures are returned as-is; the core adds no retries.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::records::{SentenceGroup, VocabularyRecord, VocabularyRow};

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can hand back the persisted dialogue corpus.
pub trait CorpusSource {
    /// All sentence groups, in an order that is stable across calls
    /// within one process run.
    fn fetch_sequence_corpus(&self) -> Result<Vec<SentenceGroup>>;
}

// ─── VocabularyStore ──────────────────────────────────────────────────────────
/// Anything that persists the learned vocabulary.
pub trait VocabularyStore {
    /// Stored rows. The order defines token id assignment and must be
    /// identical on every call for the same persisted state.
    fn fetch_vocabulary_rows(&self) -> Result<Vec<VocabularyRow>>;

    /// Replace the stored vocabulary with exactly `records`.
    /// Calling it twice with the same records leaves the same state.
    fn replace_vocabulary(&self, records: &[VocabularyRecord]) -> Result<()>;
}
