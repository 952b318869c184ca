// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers for each mode the
// binary offers (build-vocab, smoke-test, dump-vocab).
//
// Rules for this layer:
//   - No batch math here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct file access except the config file
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Data locations and batching switches
pub mod config;

// build-vocab and dump-vocab workflows
pub mod vocab_use_case;

// smoke-test workflow
pub mod smoke_test_use_case;
