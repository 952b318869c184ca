// ============================================================
// Layer 4 — Training Corpus
// ============================================================
// Owns everything a batch is built from:
//
//   vocabulary   loaded once, never mutated
//   examples     one id sequence per corpus fragment, where
//                examples[2k] is a question and examples[2k + 1]
//                its answer
//   input_size   max(vocab size, longest example), a width hint
//                for the model's input layer
//
// Batches are cut with an EpochCursor owned by the caller, so the
// corpus can be shared by reference while the cursor moves.
//
// Pipeline for one next_batch call:
//
//   cursor.advance ──▶ examples[start..start + batch_size]
//        │
//        ▼
//   (data loop?) append cyclic shift
//        │
//        ▼
//   compute_batch_lengths over the whole window
//        │
//        ▼
//   transform each (question, answer) pair ──▶ Batch

use anyhow::Result;

use crate::data::batch::{loop_window, Batch};
use crate::data::cursor::EpochCursor;
use crate::data::encoder::{compute_batch_lengths, transform};
use crate::data::tokenizer::tokenize_sentences;
use crate::domain::records::SentenceGroup;
use crate::domain::reserved::TokenId;
use crate::domain::traits::CorpusSource;
use crate::domain::vocabulary::Vocabulary;

pub struct TrainingCorpus {
    vocab: Vocabulary,
    examples: Vec<Vec<TokenId>>,
    input_size: usize,
    data_loop: bool,
}

impl TrainingCorpus {
    /// Fetch the corpus from `source` and convert it to id sequences.
    /// Store failures propagate unchanged.
    pub fn load<S: CorpusSource + ?Sized>(vocab: Vocabulary, source: &S) -> Result<Self> {
        let groups = source.fetch_sequence_corpus()?;
        let corpus = Self::from_groups(vocab, &groups);
        tracing::info!(
            "Loaded {} examples ({} pairs), input size {}",
            corpus.examples.len(),
            corpus.pair_count(),
            corpus.input_size
        );
        Ok(corpus)
    }

    pub fn from_groups(vocab: Vocabulary, groups: &[SentenceGroup]) -> Self {
        let examples: Vec<Vec<TokenId>> = tokenize_sentences(groups)
            .iter()
            .map(|sentence| vocab.tokens_to_ids(sentence))
            .collect();

        let longest = examples.iter().map(Vec::len).max().unwrap_or(0);
        let input_size = vocab.size().max(longest);

        Self {
            vocab,
            examples,
            input_size,
            data_loop: false,
        }
    }

    /// Enable the cyclic-shift augmentation for every batch.
    pub fn with_data_loop(mut self, data_loop: bool) -> Self {
        self.data_loop = data_loop;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn examples(&self) -> &[Vec<TokenId>] {
        &self.examples
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Complete (question, answer) pairs; an odd trailing example is not one.
    pub fn pair_count(&self) -> usize {
        self.examples.len() / 2
    }

    /// Encode the next window of examples and move `cursor` past it.
    ///
    /// The window holds `batch_size` examples (fewer near the end of the
    /// list), i.e. `batch_size / 2` pairs. Every tensor in the result is
    /// padded to the same batch-wide width.
    pub fn next_batch(&self, cursor: &mut EpochCursor, batch_size: usize) -> Batch {
        let total = self.examples.len();
        let start = cursor.advance(batch_size, total);
        let end = start.saturating_add(batch_size).min(total);

        let mut window: Vec<&[TokenId]> = self.examples[start.min(end)..end]
            .iter()
            .map(Vec::as_slice)
            .collect();

        if self.data_loop {
            loop_window(&mut window);
        }

        let lengths = compute_batch_lengths(&window);
        let mut batch = Batch::new(start, lengths);

        for pair in window.chunks_exact(2) {
            batch.push(transform(pair[0], pair[1], lengths, self.vocab.size()));
        }

        tracing::debug!(
            "Batch at {}: {} pairs, input width {}, output width {}",
            start,
            batch.len(),
            lengths.max_input_len,
            lengths.max_output_len
        );
        batch
    }
}
