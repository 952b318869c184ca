// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concrete adapters behind the domain traits, plus export of
// the vocabulary to formats other tools read:
//
//   json_store.rs        — Corpus and vocabulary as JSON files.
//                          Implements CorpusSource and
//                          VocabularyStore.
//
//   memory_store.rs      — The same contract held in memory.
//                          Used by tests and by callers that
//                          already have the corpus loaded.
//
//   tokenizer_export.rs  — Writes the loaded vocabulary as a
//                          HuggingFace WordLevel tokenizer.json
//                          and reloads it to check it.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// File-backed corpus and vocabulary store
pub mod json_store;

/// In-memory corpus and vocabulary store
pub mod memory_store;

/// HuggingFace tokenizer.json export
pub mod tokenizer_export;
