// ============================================================
// Layer 6 — In-Memory Store
// ============================================================
// Holds the corpus and the vocabulary table in plain Vecs.
// Implements both collaborator traits, so tests and library
// callers can run the full pipeline without touching disk.
//
// RefCell gives interior mutability behind &self, matching the
// trait signatures. Single-threaded only, like the rest of the core.

use std::cell::RefCell;

use anyhow::Result;

use crate::domain::records::{SentenceGroup, VocabularyRecord, VocabularyRow};
use crate::domain::traits::{CorpusSource, VocabularyStore};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    corpus: RefCell<Vec<SentenceGroup>>,
    rows: RefCell<Vec<VocabularyRow>>,
}

impl InMemoryStore {
    /// A store seeded with `corpus` and an empty vocabulary table.
    pub fn new(corpus: Vec<SentenceGroup>) -> Self {
        Self {
            corpus: RefCell::new(corpus),
            rows: RefCell::new(Vec::new()),
        }
    }

    /// A store with `tokens` already persisted, in that order.
    pub fn with_vocabulary<I, S>(corpus: Vec<SentenceGroup>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new(corpus);
        *store.rows.borrow_mut() = numbered_rows(tokens.into_iter().map(VocabularyRecord::new));
        store
    }

    pub fn set_corpus(&self, corpus: Vec<SentenceGroup>) {
        *self.corpus.borrow_mut() = corpus;
    }
}

/// Assign ascending row ids starting at 1, the way an auto-increment
/// table would after a truncate-and-insert.
pub(crate) fn numbered_rows<I>(records: I) -> Vec<VocabularyRow>
where
    I: IntoIterator<Item = VocabularyRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| VocabularyRow {
            id: i as u64 + 1,
            vocab: record.vocab,
            morpheme: record.morpheme,
        })
        .collect()
}

impl CorpusSource for InMemoryStore {
    fn fetch_sequence_corpus(&self) -> Result<Vec<SentenceGroup>> {
        Ok(self.corpus.borrow().clone())
    }
}

impl VocabularyStore for InMemoryStore {
    fn fetch_vocabulary_rows(&self) -> Result<Vec<VocabularyRow>> {
        Ok(self.rows.borrow().clone())
    }

    fn replace_vocabulary(&self, records: &[VocabularyRecord]) -> Result<()> {
        *self.rows.borrow_mut() = numbered_rows(records.iter().cloned());
        Ok(())
    }
}
