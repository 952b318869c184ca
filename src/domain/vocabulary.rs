// ============================================================
// Layer 3 — Vocabulary
// ============================================================
// Bidirectional token <-> id mapping.
//
//   id_to_token: ["<PAD>", "<S>", "<E>", "<UNK>", "hello", "world", ...]
//   token_to_id: {"<PAD>": 0, "<S>": 1, ..., "hello": 4, "world": 5}
//
// Invariants:
//   - ids are dense and start at 0
//   - the reserved symbols always hold ids 0..=3
//   - both maps have the same number of entries
//
// Learned tokens are appended in the order the store returns them.
// Reordering that list renumbers every token and silently breaks any
// model trained against the previous numbering.
//
// Reference: Rust Book §8 (Collections: HashMap, Vec)

use std::collections::HashMap;

use anyhow::Result;

use crate::domain::error::{DialogError, DialogResult};
use crate::domain::records::VocabularyRow;
use crate::domain::reserved::{self, TokenId, RESERVED, UNKNOWN_ID};
use crate::domain::traits::VocabularyStore;

/// Token <-> id mapping. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    token_to_id: HashMap<String, TokenId>,
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// A vocabulary holding only the four reserved symbols.
    pub fn reserved_only() -> Self {
        Self::from_tokens(std::iter::empty::<String>())
    }

    /// Reserved symbols first, then `tokens` in iteration order.
    ///
    /// A token that already has an id is skipped so the mapping stays
    /// bijective; this also covers a corpus that happens to contain a
    /// reserved spelling such as `<PAD>`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self {
            token_to_id: HashMap::new(),
            id_to_token: Vec::new(),
        };

        for symbol in RESERVED {
            vocab.push(symbol.to_string());
        }

        for token in tokens {
            let token = token.into();
            if vocab.token_to_id.contains_key(&token) {
                tracing::warn!("Skipping duplicate vocabulary entry '{}'", token);
                continue;
            }
            vocab.push(token);
        }

        vocab
    }

    /// Build from stored rows, preserving their order.
    pub fn from_rows(rows: &[VocabularyRow]) -> Self {
        Self::from_tokens(rows.iter().map(|row| row.vocab.clone()))
    }

    /// Fetch the stored rows and build the in-memory vocabulary.
    /// Store failures propagate unchanged.
    pub fn load<S: VocabularyStore + ?Sized>(store: &S) -> Result<Self> {
        let rows = store.fetch_vocabulary_rows()?;
        let vocab = Self::from_rows(&rows);
        tracing::info!(
            "Loaded vocabulary: {} entries ({} stored rows)",
            vocab.size(),
            rows.len()
        );
        Ok(vocab)
    }

    fn push(&mut self, token: String) {
        let id = self.id_to_token.len() as TokenId;
        self.token_to_id.insert(token.clone(), id);
        self.id_to_token.push(token);
    }

    /// Number of entries, reserved symbols included.
    pub fn size(&self) -> usize {
        self.id_to_token.len()
    }

    /// Id of `token`, or `<UNK>` when the token was never seen.
    pub fn id_of(&self, token: &str) -> TokenId {
        self.token_to_id.get(token).copied().unwrap_or(UNKNOWN_ID)
    }

    /// Map every token through the vocabulary. Never fails.
    pub fn tokens_to_ids<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<TokenId> {
        tokens.iter().map(|t| self.id_of(t.as_ref())).collect()
    }

    /// Token spelled by `id`.
    pub fn token(&self, id: TokenId) -> DialogResult<&str> {
        self.id_to_token
            .get(id as usize)
            .map(String::as_str)
            .ok_or(DialogError::IdOutOfRange {
                id,
                vocab_size: self.size(),
            })
    }

    /// Reverse lookup; the first out-of-range id aborts the whole call.
    pub fn ids_to_tokens(&self, ids: &[TokenId]) -> DialogResult<Vec<&str>> {
        ids.iter().map(|&id| self.token(id)).collect()
    }

    pub fn is_eos(&self, id: TokenId) -> bool {
        reserved::is_eos(id)
    }

    pub fn is_reserved(&self, id: TokenId) -> bool {
        reserved::is_reserved(id)
    }

    /// `(token, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.as_str(), id as TokenId))
    }
}
