// ============================================================
// Layer 3 — Persisted Records
// ============================================================
// Shapes exchanged with the persistence collaborators.
//
//   SentenceGroup     one corpus row: a question and its answer
//                     (or more fragments, each tokenised separately)
//   VocabularyRecord  what build-vocab writes for each token
//   VocabularyRow     what the store hands back, with its row id
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// One persisted corpus row. Each fragment becomes one example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceGroup(pub Vec<String>);

impl SentenceGroup {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fragments.into_iter().map(Into::into).collect())
    }

    pub fn fragments(&self) -> &[String] {
        &self.0
    }
}

/// A token to be stored in the vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub vocab: String,

    /// Morphological annotation; build-vocab leaves it empty.
    #[serde(default)]
    pub morpheme: String,
}

impl VocabularyRecord {
    pub fn new(vocab: impl Into<String>) -> Self {
        Self {
            vocab: vocab.into(),
            morpheme: String::new(),
        }
    }
}

/// A stored vocabulary entry as returned by the store.
///
/// `id` is the store's own row id, NOT the token id: token ids are
/// assigned from the order rows are returned in, after the reserved
/// symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRow {
    pub id: u64,
    pub vocab: String,
    #[serde(default)]
    pub morpheme: String,
}
