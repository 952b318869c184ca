// ============================================================
// Layer 2 — SmokeTestUseCase
// ============================================================
// Exercises the whole pipeline once, end to end:
//
//   Step 1: Load vocabulary          (Layer 3 - domain)
//   Step 2: Load examples            (Layer 4 - data)
//   Step 3: Pull batches             (Layer 4 - data)
//   Step 4: Stack into tensors       (Layer 4 - data, Burn)
//
// Nothing is trained; the point is to catch a broken corpus or
// vocabulary before a long training run does.

use anyhow::Result;
use burn::backend::NdArray;

use crate::application::config::DataConfig;
use crate::data::batcher::Seq2SeqBatcher;
use crate::data::corpus::TrainingCorpus;
use crate::data::cursor::EpochCursor;
use crate::domain::traits::{CorpusSource, VocabularyStore};
use crate::domain::vocabulary::Vocabulary;

/// Batches pulled by a smoke test run.
pub const SMOKE_TEST_BATCHES: usize = 2;

type SmokeBackend = NdArray;

/// Shape of one batch as the model would see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub start: usize,
    pub pairs: usize,
    pub encoder_shape: Option<[usize; 3]>,
    pub decoder_shape: Option<[usize; 3]>,
    pub target_shape: Option<[usize; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeTestReport {
    pub vocab_size: usize,
    pub examples: usize,
    pub input_size: usize,
    pub batches: Vec<BatchSummary>,
}

pub struct SmokeTestUseCase<'a, C: ?Sized, V: ?Sized> {
    config: &'a DataConfig,
    source: &'a C,
    store: &'a V,
}

impl<'a, C, V> SmokeTestUseCase<'a, C, V>
where
    C: CorpusSource + ?Sized,
    V: VocabularyStore + ?Sized,
{
    pub fn new(config: &'a DataConfig, source: &'a C, store: &'a V) -> Self {
        Self { config, source, store }
    }

    pub fn execute(&self) -> Result<SmokeTestReport> {
        let cfg = self.config;

        // ── Step 1 + 2: vocabulary, then examples ─────────────────────────────
        let vocab = Vocabulary::load(self.store)?;
        let corpus = TrainingCorpus::load(vocab, self.source)?.with_data_loop(cfg.data_loop);

        // ── Step 3 + 4: batches and tensors ───────────────────────────────────
        let batcher = Seq2SeqBatcher::<SmokeBackend>::new(Default::default());
        let vocab_size = corpus.vocabulary().size();
        let mut cursor = EpochCursor::new();
        let mut batches = Vec::with_capacity(SMOKE_TEST_BATCHES);

        for _ in 0..SMOKE_TEST_BATCHES {
            let batch = corpus.next_batch(&mut cursor, cfg.batch_size);
            let tensors = batcher.batch(&batch, vocab_size);

            let summary = BatchSummary {
                start: batch.start,
                pairs: batch.len(),
                encoder_shape: tensors.as_ref().map(|t| t.encoder_input.dims()),
                decoder_shape: tensors.as_ref().map(|t| t.decoder_input.dims()),
                target_shape: tensors.as_ref().map(|t| t.targets.dims()),
            };

            tracing::info!(
                "Batch at {}: {} pairs, encoder {:?}, decoder {:?}, targets {:?}",
                summary.start,
                summary.pairs,
                summary.encoder_shape,
                summary.decoder_shape,
                summary.target_shape
            );
            batches.push(summary);
        }

        Ok(SmokeTestReport {
            vocab_size,
            examples: corpus.len(),
            input_size: corpus.input_size(),
            batches,
        })
    }
}
