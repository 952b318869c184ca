// ============================================================
// Layer 4 — Seq2Seq Tensor Batcher
// ============================================================
// Converts an encoded Batch (nested Vecs) into Burn tensors the
// model can consume directly.
//
// How batching works here:
//   Input:  Batch with N pairs, already padded to shared widths
//   Output: Seq2SeqBatch with
//             encoder_input  [N, max_input_len,  vocab_size]  float
//             decoder_input  [N, max_output_len, vocab_size]  float
//             targets        [N, max_output_len]              int
//
//   Each nested Vec is flattened row-major into one long Vec,
//   turned into a 1D tensor, then reshaped.
//
// This only works because every pair in a Batch has the same
// widths; the encoder guarantees that.
//
// Reference: Burn Book §4 (Batcher)

use burn::prelude::*;

use crate::data::batch::Batch;

/// One batch on the device, ready for the forward pass.
#[derive(Debug, Clone)]
pub struct Seq2SeqBatch<B: Backend> {
    /// One-hot encoder inputs, reversed time order.
    pub encoder_input: Tensor<B, 3>,

    /// One-hot decoder inputs, each starting with <S>.
    pub decoder_input: Tensor<B, 3>,

    /// Class-index supervision, <E> after each answer.
    pub targets: Tensor<B, 2, Int>,
}

/// Holds the target device so tensors are created in the right place.
#[derive(Clone, Debug)]
pub struct Seq2SeqBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> Seq2SeqBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Stack `batch` into tensors. An empty batch has nothing to
    /// stack and yields `None`.
    pub fn batch(&self, batch: &Batch, vocab_size: usize) -> Option<Seq2SeqBatch<B>> {
        if batch.is_empty() {
            return None;
        }

        let pairs = batch.len();
        let input_len = batch.lengths.max_input_len;
        let output_len = batch.lengths.max_output_len;

        // ── Flatten one-hot rows ──────────────────────────────────────────────
        let encoder_flat: Vec<f32> = batch
            .encoder_inputs
            .iter()
            .flatten()
            .flatten()
            .copied()
            .collect();

        let decoder_flat: Vec<f32> = batch
            .decoder_inputs
            .iter()
            .flatten()
            .flatten()
            .copied()
            .collect();

        // Burn uses i32 for Int tensor input
        let target_flat: Vec<i32> = batch
            .targets
            .iter()
            .flatten()
            .map(|&id| id as i32)
            .collect();

        // ── Create tensors ────────────────────────────────────────────────────
        let encoder_input = Tensor::<B, 1>::from_floats(encoder_flat.as_slice(), &self.device)
            .reshape([pairs, input_len, vocab_size]);

        let decoder_input = Tensor::<B, 1>::from_floats(decoder_flat.as_slice(), &self.device)
            .reshape([pairs, output_len, vocab_size]);

        let targets = Tensor::<B, 1, Int>::from_ints(target_flat.as_slice(), &self.device)
            .reshape([pairs, output_len]);

        Some(Seq2SeqBatch {
            encoder_input,
            decoder_input,
            targets,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::tensor::ElementConversion;
    use crate::data::corpus::TrainingCorpus;
    use crate::data::cursor::EpochCursor;
    use crate::domain::records::SentenceGroup;
    use crate::domain::vocabulary::Vocabulary;

    type TestBackend = burn::backend::NdArray;

    fn corpus() -> TrainingCorpus {
        let vocab = Vocabulary::from_tokens(["hello", "world"]);
        TrainingCorpus::from_groups(
            vocab,
            &[
                SentenceGroup::new(["hello world", "world"]),
                SentenceGroup::new(["world", "hello hello world"]),
            ],
        )
    }

    #[test]
    fn test_tensor_shapes() {
        let corpus = corpus();
        let batch = corpus.next_batch(&mut EpochCursor::new(), 4);
        let batcher = Seq2SeqBatcher::<TestBackend>::new(Default::default());

        let tensors = batcher.batch(&batch, corpus.vocabulary().size()).unwrap();
        assert_eq!(tensors.encoder_input.dims(), [2, 2, 6]);
        assert_eq!(tensors.decoder_input.dims(), [2, 4, 6]);
        assert_eq!(tensors.targets.dims(), [2, 4]);
    }

    #[test]
    fn test_one_hot_mass_is_preserved() {
        // Every position holds exactly one 1.0, so the sum is the row count
        let corpus = corpus();
        let batch = corpus.next_batch(&mut EpochCursor::new(), 4);
        let batcher = Seq2SeqBatcher::<TestBackend>::new(Default::default());
        let tensors = batcher.batch(&batch, corpus.vocabulary().size()).unwrap();

        let encoder_sum: f32 = tensors.encoder_input.sum().into_scalar().elem();
        let decoder_sum: f32 = tensors.decoder_input.sum().into_scalar().elem();
        assert_eq!(encoder_sum, 4.0);
        assert_eq!(decoder_sum, 8.0);
    }

    #[test]
    fn test_targets_keep_ids() {
        let corpus = corpus();
        let batch = corpus.next_batch(&mut EpochCursor::new(), 4);
        let batcher = Seq2SeqBatcher::<TestBackend>::new(Default::default());
        let tensors = batcher.batch(&batch, corpus.vocabulary().size()).unwrap();

        // hello=4, world=5; answers "world" and "hello hello world"
        let ids = tensors
            .targets
            .into_data()
            .convert::<i64>()
            .to_vec::<i64>()
            .unwrap();
        assert_eq!(ids, vec![5, 2, 0, 0, 4, 4, 5, 2]);
    }

    #[test]
    fn test_empty_batch_gives_none() {
        let batcher = Seq2SeqBatcher::<TestBackend>::new(Default::default());
        assert!(batcher.batch(&Batch::default(), 4).is_none());
    }
}
