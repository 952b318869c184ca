// ============================================================
// Layer 6 — JSON File Store
// ============================================================
// File-backed implementation of both collaborator traits.
//
// Files:
//   corpus.json   [["how are you", "fine thanks"], ["hi", "hello"], ...]
//                 one inner array per sentence group
//   vocab.json    [{"id": 1, "vocab": "are", "morpheme": ""}, ...]
//
// Rows are always returned sorted by row id, so the token ids
// assigned at load time are the same on every run.
//
// A missing vocab.json reads as an empty table (build-vocab has
// not been run yet); a missing corpus is an error.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::records::{SentenceGroup, VocabularyRecord, VocabularyRow};
use crate::domain::traits::{CorpusSource, VocabularyStore};
use crate::infra::memory_store::numbered_rows;

pub struct JsonFileStore {
    corpus_path: PathBuf,
    vocab_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(corpus_path: impl Into<PathBuf>, vocab_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            vocab_path: vocab_path.into(),
        }
    }

    pub fn vocab_path(&self) -> &PathBuf {
        &self.vocab_path
    }
}

impl CorpusSource for JsonFileStore {
    fn fetch_sequence_corpus(&self) -> Result<Vec<SentenceGroup>> {
        let json = fs::read_to_string(&self.corpus_path).with_context(|| {
            format!("Cannot read corpus from '{}'", self.corpus_path.display())
        })?;

        let groups: Vec<SentenceGroup> = serde_json::from_str(&json).with_context(|| {
            format!("Corpus '{}' is not a JSON array of string arrays", self.corpus_path.display())
        })?;

        tracing::debug!(
            "Read {} sentence groups from '{}'",
            groups.len(),
            self.corpus_path.display()
        );
        Ok(groups)
    }
}

impl VocabularyStore for JsonFileStore {
    fn fetch_vocabulary_rows(&self) -> Result<Vec<VocabularyRow>> {
        if !self.vocab_path.exists() {
            tracing::warn!(
                "Vocabulary file '{}' does not exist, returning empty vocabulary",
                self.vocab_path.display()
            );
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.vocab_path).with_context(|| {
            format!("Cannot read vocabulary from '{}'", self.vocab_path.display())
        })?;

        let mut rows: Vec<VocabularyRow> = serde_json::from_str(&json).with_context(|| {
            format!("Vocabulary '{}' is malformed", self.vocab_path.display())
        })?;

        // Stable sort: equal row ids keep their file order
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }

    fn replace_vocabulary(&self, records: &[VocabularyRecord]) -> Result<()> {
        if let Some(parent) = self.vocab_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create directory '{}'", parent.display())
                })?;
            }
        }

        let rows = numbered_rows(records.iter().cloned());
        let json = serde_json::to_string_pretty(&rows)?;

        fs::write(&self.vocab_path, json).with_context(|| {
            format!("Cannot write vocabulary to '{}'", self.vocab_path.display())
        })?;

        tracing::debug!(
            "Wrote {} vocabulary rows to '{}'",
            rows.len(),
            self.vocab_path.display()
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn store_in(dir: &TempDir, corpus: &str) -> JsonFileStore {
        let corpus_path = dir.path().join("corpus.json");
        fs::write(&corpus_path, corpus).unwrap();
        JsonFileStore::new(corpus_path, dir.path().join("vocab").join("vocab.json"))
    }

    #[test]
    fn test_reads_sentence_groups() {
        let dir = TempDir::new("json_store").unwrap();
        let store = store_in(&dir, r#"[["hello world", "hi"], ["bye"]]"#);

        let groups = store.fetch_sequence_corpus().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].fragments(), &["hello world".to_string(), "hi".to_string()]);
    }

    #[test]
    fn test_malformed_corpus_is_an_error() {
        let dir = TempDir::new("json_store").unwrap();
        let store = store_in(&dir, r#"{"not": "an array"}"#);
        assert!(store.fetch_sequence_corpus().is_err());
    }

    #[test]
    fn test_missing_vocabulary_reads_empty() {
        let dir = TempDir::new("json_store").unwrap();
        let store = store_in(&dir, "[]");
        assert!(store.fetch_vocabulary_rows().unwrap().is_empty());
    }

    #[test]
    fn test_replace_then_fetch() {
        let dir = TempDir::new("json_store").unwrap();
        let store = store_in(&dir, "[]");

        let records = vec![VocabularyRecord::new("b"), VocabularyRecord::new("a")];
        store.replace_vocabulary(&records).unwrap();
        // Replacing twice with the same records is a no-op
        store.replace_vocabulary(&records).unwrap();

        let rows = store.fetch_vocabulary_rows().unwrap();
        let tokens: Vec<&str> = rows.iter().map(|r| r.vocab.as_str()).collect();
        assert_eq!(tokens, vec!["b", "a"]);
    }

    #[test]
    fn test_rows_sorted_by_row_id() {
        let dir = TempDir::new("json_store").unwrap();
        let store = store_in(&dir, "[]");
        fs::create_dir_all(store.vocab_path().parent().unwrap()).unwrap();
        fs::write(
            store.vocab_path(),
            r#"[{"id": 7, "vocab": "late"}, {"id": 2, "vocab": "early", "morpheme": ""}]"#,
        )
        .unwrap();

        let rows = store.fetch_vocabulary_rows().unwrap();
        assert_eq!(rows[0].vocab, "early");
        assert_eq!(rows[1].vocab, "late");
    }
}
