// ============================================================
// Layer 4 — Batch Encoder
// ============================================================
// Turns one (input, output) pair of raw id sequences into the
// three things a seq2seq training step consumes:
//
//   input  = [4, 5]        output = [5]
//   max_input_len = 3      max_output_len = 3
//
//   encoder input   pad → [4, 5, 0]   reverse → [0, 5, 4]   one-hot
//   decoder input   [<S>] + output → [1, 5]   pad → [1, 5, 0]   one-hot
//   target          output + [<E>] → [5, 2]   pad → [5, 2, 0]   (plain ids)
//
// The encoder reads its sentence back to front, which puts the
// first words closest to the decoder.
//
// Widths are per batch, not per corpus: every pair in one batch
// shares the batch-wide maxima so the rows stack into one tensor.
//
// Reference: Sutskever et al. (2014) Sequence to Sequence Learning

use crate::domain::reserved::{TokenId, EOS_ID, PAD_ID, START_ID};

/// One id expanded to a unit vector of vocabulary width.
pub type OneHotRow = Vec<f32>;

/// Padded widths shared by every pair in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchLengths {
    /// Longest input sequence in the batch.
    pub max_input_len: usize,

    /// Longest output sequence plus one slot for <S> / <E>.
    pub max_output_len: usize,
}

/// One encoded training pair.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedPair {
    /// `[max_input_len][vocab_size]`, reversed time order.
    pub encoder_input: Vec<OneHotRow>,

    /// `[max_output_len][vocab_size]`, starts with <S>.
    pub decoder_input: Vec<OneHotRow>,

    /// `[max_output_len]` class indices, <E> after the last word.
    pub target: Vec<TokenId>,
}

/// Scan a window of alternating (input, output) sequences.
///
/// A trailing element without a partner is ignored.
pub fn compute_batch_lengths<S: AsRef<[TokenId]>>(window: &[S]) -> BatchLengths {
    let mut max_input_len = 0;
    let mut max_output_len = 0;

    for pair in window.chunks_exact(2) {
        max_input_len = max_input_len.max(pair[0].as_ref().len());
        max_output_len = max_output_len.max(pair[1].as_ref().len());
    }

    BatchLengths {
        max_input_len,
        max_output_len: max_output_len + 1,
    }
}

/// Right-pad with <PAD> up to `max_len`. Never truncates.
pub fn pad(mut seq: Vec<TokenId>, max_len: usize) -> Vec<TokenId> {
    if seq.len() < max_len {
        seq.resize(max_len, PAD_ID);
    }
    seq
}

/// Expand each id to a zero vector with a single 1.0 at the id's index.
///
/// Ids must be `< vocab_size`; the corpus loader only produces ids
/// from the vocabulary, so an id outside it is a programming error.
pub fn one_hot(ids: &[TokenId], vocab_size: usize) -> Vec<OneHotRow> {
    ids.iter()
        .map(|&id| {
            debug_assert!(
                (id as usize) < vocab_size,
                "token id {} outside vocabulary of size {}",
                id,
                vocab_size
            );
            let mut row = vec![0.0; vocab_size];
            row[id as usize] = 1.0;
            row
        })
        .collect()
}

/// Encode one pair against a vocabulary of `vocab_size` entries.
///
/// Pure: the same arguments always produce the same tensors.
pub fn transform(
    input: &[TokenId],
    output: &[TokenId],
    lengths: BatchLengths,
    vocab_size: usize,
) -> EncodedPair {
    let mut encoder_ids = pad(input.to_vec(), lengths.max_input_len);

    let mut decoder_ids = Vec::with_capacity(output.len() + 1);
    decoder_ids.push(START_ID);
    decoder_ids.extend_from_slice(output);
    let decoder_ids = pad(decoder_ids, lengths.max_output_len);

    let mut target = output.to_vec();
    target.push(EOS_ID);
    let target = pad(target, lengths.max_output_len);

    encoder_ids.reverse();

    EncodedPair {
        encoder_input: one_hot(&encoder_ids, vocab_size),
        decoder_input: one_hot(&decoder_ids, vocab_size),
        target,
    }
}

/// Inverse of [`one_hot`] for test assertions. Panics on a row with no hot entry.
#[cfg(test)]
pub(crate) fn hot_indices(rows: &[OneHotRow]) -> Vec<TokenId> {
    rows.iter()
        .map(|row| {
            row.iter()
                .position(|&x| x == 1.0)
                .expect("one-hot row has no hot entry") as TokenId
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    // Vocabulary {<PAD>,<S>,<E>,<UNK>,hello,world} → 6 entries
    const VOCAB: usize = 6;

    #[test]
    fn test_lengths_reserve_one_output_slot() {
        let window: Vec<Vec<TokenId>> = vec![vec![4, 5], vec![5], vec![4], vec![4, 5, 5]];
        let lengths = compute_batch_lengths(&window);
        assert_eq!(lengths.max_input_len, 2);
        assert_eq!(lengths.max_output_len, 4);
    }

    #[test]
    fn test_lengths_ignore_unpaired_tail() {
        // The trailing 5-id sequence has no partner and is not scanned
        let window: Vec<Vec<TokenId>> = vec![vec![4], vec![5], vec![4, 4, 4, 4, 4]];
        let lengths = compute_batch_lengths(&window);
        assert_eq!(lengths, BatchLengths { max_input_len: 1, max_output_len: 2 });
    }

    #[test]
    fn test_lengths_of_empty_window() {
        let window: Vec<Vec<TokenId>> = Vec::new();
        assert_eq!(
            compute_batch_lengths(&window),
            BatchLengths { max_input_len: 0, max_output_len: 1 }
        );
    }

    #[test]
    fn test_encoder_input_padded_then_reversed() {
        let lengths = BatchLengths { max_input_len: 3, max_output_len: 3 };
        let pair = transform(&[4, 5], &[5], lengths, VOCAB);

        assert_eq!(hot_indices(&pair.encoder_input), vec![0, 5, 4]);
        assert!(pair.encoder_input.iter().all(|row| row.len() == VOCAB));
    }

    #[test]
    fn test_decoder_input_and_target() {
        let lengths = BatchLengths { max_input_len: 3, max_output_len: 3 };
        let pair = transform(&[4, 5], &[5], lengths, VOCAB);

        assert_eq!(hot_indices(&pair.decoder_input), vec![1, 5, 0]);
        assert_eq!(pair.target, vec![5, 2, 0]);
    }

    #[test]
    fn test_shapes_match_batch_lengths() {
        let window: Vec<Vec<TokenId>> = vec![vec![4, 5, 4], vec![5, 5], vec![4], vec![5]];
        let lengths = compute_batch_lengths(&window);

        for pair in window.chunks_exact(2) {
            let encoded = transform(&pair[0], &pair[1], lengths, VOCAB);
            assert_eq!(encoded.encoder_input.len(), lengths.max_input_len);
            assert_eq!(encoded.decoder_input.len(), lengths.max_output_len);
            assert_eq!(encoded.target.len(), lengths.max_output_len);
            // decoder starts with <S>, target has <E> right after the output
            assert_eq!(hot_indices(&encoded.decoder_input)[0], START_ID);
            assert_eq!(encoded.target[pair[1].len()], EOS_ID);
        }
    }

    #[test]
    fn test_one_hot_rows_are_unit_vectors() {
        let rows = one_hot(&[0, 3, 5], VOCAB);
        for (row, id) in rows.iter().zip([0usize, 3, 5]) {
            assert_eq!(row.iter().sum::<f32>(), 1.0);
            assert_eq!(row[id], 1.0);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside vocabulary")]
    fn test_one_hot_rejects_id_past_vocabulary() {
        one_hot(&[4, VOCAB as TokenId], VOCAB);
    }

    #[test]
    fn test_transform_is_pure() {
        let lengths = BatchLengths { max_input_len: 4, max_output_len: 3 };
        let a = transform(&[4, 5], &[4, 5], lengths, VOCAB);
        let b = transform(&[4, 5], &[4, 5], lengths, VOCAB);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pad_never_truncates() {
        // A max shorter than the sequence leaves it untouched
        assert_eq!(pad(vec![4, 5, 4], 2), vec![4, 5, 4]);
        let lengths = BatchLengths { max_input_len: 1, max_output_len: 1 };
        let pair = transform(&[4, 5], &[5, 5], lengths, VOCAB);
        assert_eq!(hot_indices(&pair.encoder_input), vec![5, 4]);
        assert_eq!(pair.target, vec![5, 5, 2]);
    }
}
