//! Training-data preparation for a sequence-to-sequence chatbot.
//!
//! Builds a whitespace vocabulary from a dialogue corpus, turns the
//! corpus into token-id examples, and cuts padded, reversed, one-hot
//! batches for the model, one window at a time.
//!
//! ```no_run
//! use dialog_batcher::data::{corpus::TrainingCorpus, cursor::EpochCursor};
//! use dialog_batcher::domain::vocabulary::Vocabulary;
//! use dialog_batcher::infra::json_store::JsonFileStore;
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = JsonFileStore::new("data/corpus.json", "data/vocab.json");
//! let vocab = Vocabulary::load(&store)?;
//! let corpus = TrainingCorpus::load(vocab, &store)?;
//!
//! let mut cursor = EpochCursor::new();
//! let batch = corpus.next_batch(&mut cursor, 10);
//! println!("{} pairs", batch.len());
//! # Ok(())
//! # }
//! ```
#![recursion_limit = "256"]

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
