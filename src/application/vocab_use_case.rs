// ============================================================
// Layer 2 — Vocabulary Use Cases
// ============================================================
// build-vocab:  corpus → distinct tokens → vocabulary store
// dump-vocab:   vocabulary store → (token, id) listing, and
//               optionally a tokenizer.json export
//
// Both work against the store traits, so the CLI can point them
// at JSON files and tests can point them at memory.

use anyhow::Result;
use std::path::Path;

use crate::data::vocab_builder::build_vocabulary;
use crate::domain::reserved::TokenId;
use crate::domain::traits::{CorpusSource, VocabularyStore};
use crate::domain::vocabulary::Vocabulary;
use crate::infra::tokenizer_export::export_tokenizer;

pub struct BuildVocabUseCase<'a, C: ?Sized, V: ?Sized> {
    source: &'a C,
    store: &'a V,
}

impl<'a, C, V> BuildVocabUseCase<'a, C, V>
where
    C: CorpusSource + ?Sized,
    V: VocabularyStore + ?Sized,
{
    pub fn new(source: &'a C, store: &'a V) -> Self {
        Self { source, store }
    }

    /// Returns the number of distinct tokens stored.
    pub fn execute(&self) -> Result<usize> {
        build_vocabulary(self.source, self.store)
    }
}

pub struct DumpVocabUseCase<'a, V: ?Sized> {
    store: &'a V,
}

impl<'a, V: VocabularyStore + ?Sized> DumpVocabUseCase<'a, V> {
    pub fn new(store: &'a V) -> Self {
        Self { store }
    }

    /// The full mapping in id order, reserved symbols first.
    pub fn execute(&self) -> Result<Vec<(String, TokenId)>> {
        let vocab = Vocabulary::load(self.store)?;
        Ok(vocab
            .iter()
            .map(|(token, id)| (token.to_string(), id))
            .collect())
    }

    /// Load the vocabulary and write it as `<dir>/tokenizer.json`.
    /// Returns the number of entries exported.
    pub fn export(&self, dir: &Path) -> Result<usize> {
        let vocab = Vocabulary::load(self.store)?;
        export_tokenizer(&vocab, dir)?;
        Ok(vocab.size())
    }
}
