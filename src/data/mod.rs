// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the persisted corpus and the tensors the
// model trains on:
//
//   corpus rows (SentenceGroup)
//       │
//       ▼
//   tokenizer          → whitespace tokens per fragment
//       │
//       ▼
//   vocab_builder      → distinct tokens into the store (offline)
//       │
//       ▼
//   corpus             → id sequences ("examples") + input size
//       │
//       ▼
//   cursor             → which window of examples comes next
//       │
//       ▼
//   encoder / batch    → padded, reversed, one-hot pairs
//       │
//       ▼
//   batcher            → Burn tensors
//
// decoder holds the inference-side inverses.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Whitespace tokenisation, flat and per-sentence
pub mod tokenizer;

/// Offline vocabulary construction
pub mod vocab_builder;

/// Examples, input size and batch production
pub mod corpus;

/// Epoch cursor with wraparound
pub mod cursor;

/// Per-batch lengths, padding, reversal and one-hot expansion
pub mod encoder;

/// Encoded batch container and data-loop augmentation
pub mod batch;

/// Conversion of encoded batches into Burn tensors
pub mod batcher;

/// EOS trimming and id → text decoding
pub mod decoder;
