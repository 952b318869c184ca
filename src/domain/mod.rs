// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types that every other layer speaks in terms of:
// token ids, the vocabulary, the persisted records and the
// collaborator traits the stores implement.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Fixed ids and spellings of the four reserved symbols
pub mod reserved;

// Token <-> id mapping, immutable once loaded
pub mod vocabulary;

// Rows and records exchanged with the persistence collaborators
pub mod records;

// Collaborator traits (corpus source, vocabulary store)
pub mod traits;

// Typed failures of the pure operations
pub mod error;
