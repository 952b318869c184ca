// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// The two failures the pure operations can report. Both signal
// a mismatch between a model's output and the vocabulary, so
// they are surfaced to the caller instead of being papered over.
//
// Unknown tokens are NOT an error: they map to <UNK>.

use thiserror::Error;

use crate::domain::reserved::TokenId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    /// Reverse lookup of an id the vocabulary does not contain.
    #[error("token id {id} is out of range for a vocabulary of {vocab_size} entries")]
    IdOutOfRange { id: TokenId, vocab_size: usize },

    /// A decoded sequence has no end-of-sequence marker.
    #[error("malformed decode sequence: no <E> marker in {len} ids")]
    MissingEos { len: usize },
}

pub type DialogResult<T> = Result<T, DialogError>;
