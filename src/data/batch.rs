// ============================================================
// Layer 4 — Batch
// ============================================================
// The three parallel sequences handed to the model for one
// training step, plus the widths they were padded to.
//
// Also home of the data-loop augmentation used on tiny corpora:
//
//   window            [q0, a0, q1, a1]
//   + window[1..]     [a0, q1, a1]
//   + window[..1]     [q0]
//   = [q0, a0, q1, a1, a0, q1, a1, q0]
//
// Read as pairs, the tail adds (a0 → q1) and (a1 → q0): each
// answer becomes the question of the next turn.

use crate::data::encoder::{BatchLengths, EncodedPair, OneHotRow};
use crate::domain::reserved::TokenId;

/// One encoded training batch. All three Vecs have one entry per pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    /// Offset of the window this batch was cut from.
    pub start: usize,

    pub lengths: BatchLengths,

    /// `[pairs][max_input_len][vocab_size]`
    pub encoder_inputs: Vec<Vec<OneHotRow>>,

    /// `[pairs][max_output_len][vocab_size]`
    pub decoder_inputs: Vec<Vec<OneHotRow>>,

    /// `[pairs][max_output_len]`
    pub targets: Vec<Vec<TokenId>>,
}

impl Batch {
    pub fn new(start: usize, lengths: BatchLengths) -> Self {
        Self {
            start,
            lengths,
            ..Self::default()
        }
    }

    pub fn push(&mut self, pair: EncodedPair) {
        self.encoder_inputs.push(pair.encoder_input);
        self.decoder_inputs.push(pair.decoder_input);
        self.targets.push(pair.target);
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Append the cyclic shift of `window` to itself.
pub fn loop_window<T: Clone>(window: &mut Vec<T>) {
    if window.is_empty() {
        return;
    }
    let head = window[0].clone();
    window.extend_from_within(1..);
    window.push(head);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_window_appends_cyclic_shift() {
        let mut window = vec!["q0", "a0", "q1", "a1"];
        loop_window(&mut window);
        assert_eq!(window, vec!["q0", "a0", "q1", "a1", "a0", "q1", "a1", "q0"]);
    }

    #[test]
    fn test_loop_window_single_element() {
        // [x] + [] + [x]
        let mut window = vec!["x"];
        loop_window(&mut window);
        assert_eq!(window, vec!["x", "x"]);
    }

    #[test]
    fn test_loop_window_empty() {
        let mut window: Vec<&str> = Vec::new();
        loop_window(&mut window);
        assert!(window.is_empty());
    }

    #[test]
    fn test_loop_window_doubles_length() {
        let mut window: Vec<u32> = (0..5).collect();
        loop_window(&mut window);
        assert_eq!(window.len(), 10);
    }
}
