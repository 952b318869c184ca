// ============================================================
// Layer 4 — Decoding Utilities
// ============================================================
// Inference-side inverses of the batch encoding: trim a predicted
// id sequence at its end marker and turn ids back into text.
//
// A prediction with no <E> is reported, not passed through: a
// model that never emits the end marker is broken and the caller
// needs to know.

use crate::domain::error::{DialogError, DialogResult};
use crate::domain::reserved::{TokenId, EOS_ID};
use crate::domain::vocabulary::Vocabulary;

/// Ids before the first <E>.
pub fn cut_eos(ids: &[TokenId]) -> DialogResult<&[TokenId]> {
    ids.iter()
        .position(|&id| id == EOS_ID)
        .map(|eos| &ids[..eos])
        .ok_or(DialogError::MissingEos { len: ids.len() })
}

/// Decode every sequence in `batches` to its tokens.
pub fn decode_tokens<'v>(
    vocab: &'v Vocabulary,
    batches: &[Vec<TokenId>],
) -> DialogResult<Vec<Vec<&'v str>>> {
    batches.iter().map(|ids| vocab.ids_to_tokens(ids)).collect()
}

/// Decode the first sequence in `batches` to a space-joined string.
/// An empty `batches` decodes to an empty string.
pub fn decode_to_string(vocab: &Vocabulary, batches: &[Vec<TokenId>]) -> DialogResult<String> {
    let decoded = decode_tokens(vocab, batches)?;
    Ok(decoded
        .first()
        .map(|tokens| tokens.join(" ").trim().to_string())
        .unwrap_or_default())
}
