// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Offline step: read the whole corpus, collect every distinct
// whitespace token, and hand the set to the vocabulary store as
// a full replacement.
//
// The set is a BTreeSet so a rebuild over the same corpus writes
// the same rows in the same order.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::data::tokenizer::tokenize_flat;
use crate::domain::records::VocabularyRecord;
use crate::domain::traits::{CorpusSource, VocabularyStore};

/// Rebuild the stored vocabulary from `source`.
/// Returns the number of distinct tokens written.
pub fn build_vocabulary<C, V>(source: &C, store: &V) -> Result<usize>
where
    C: CorpusSource + ?Sized,
    V: VocabularyStore + ?Sized,
{
    let groups = source.fetch_sequence_corpus()?;
    let records = distinct_records(&tokenize_flat(&groups));

    store.replace_vocabulary(&records)?;
    tracing::info!(
        "Built vocabulary: {} distinct tokens from {} sentence groups",
        records.len(),
        groups.len()
    );
    Ok(records.len())
}

fn distinct_records(tokens: &[String]) -> Vec<VocabularyRecord> {
    tokens
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|token| VocabularyRecord::new(token.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::SentenceGroup;
    use crate::domain::vocabulary::Vocabulary;
    use crate::infra::memory_store::InMemoryStore;

    #[test]
    fn test_each_token_stored_once() {
        let store = InMemoryStore::new(vec![
            SentenceGroup::new(["hello world", "hello"]),
            SentenceGroup::new(["world hello", "bye"]),
        ]);

        let written = build_vocabulary(&store, &store).unwrap();
        assert_eq!(written, 3);

        let rows = store.fetch_vocabulary_rows().unwrap();
        let tokens: Vec<&str> = rows.iter().map(|r| r.vocab.as_str()).collect();
        assert_eq!(tokens, vec!["bye", "hello", "world"]);
        assert!(rows.iter().all(|r| r.morpheme.is_empty()));
    }

    #[test]
    fn test_rebuild_replaces_previous_vocabulary() {
        let store = InMemoryStore::new(vec![SentenceGroup::new(["old words"])]);
        build_vocabulary(&store, &store).unwrap();

        store.set_corpus(vec![SentenceGroup::new(["new"])]);
        build_vocabulary(&store, &store).unwrap();

        let vocab = Vocabulary::load(&store).unwrap();
        assert_eq!(vocab.size(), 5);
        assert_eq!(vocab.id_of("new"), 4);
        assert_eq!(vocab.id_of("old"), 3);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let store = InMemoryStore::new(vec![SentenceGroup::new(["b a", "c"])]);
        build_vocabulary(&store, &store).unwrap();
        let first = store.fetch_vocabulary_rows().unwrap();
        build_vocabulary(&store, &store).unwrap();
        assert_eq!(store.fetch_vocabulary_rows().unwrap(), first);
    }
}
