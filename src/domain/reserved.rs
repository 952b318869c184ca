// ============================================================
// Layer 3 — Reserved Symbols
// ============================================================
// Four symbols occupy ids 0..=3 of every vocabulary, always in
// this order, whatever the corpus contains:
//
//   id 0  <PAD>  fills sequences up to the batch width
//   id 1  <S>    first decoder input step
//   id 2  <E>    end of every target sequence
//   id 3  <UNK>  any token the vocabulary has never seen
//
// A trained model bakes these ids into its weights, so they
// must never move.

/// Integer id of a vocabulary entry.
pub type TokenId = u32;

pub const PAD: &str = "<PAD>";
pub const START: &str = "<S>";
pub const EOS: &str = "<E>";
pub const UNKNOWN: &str = "<UNK>";

pub const PAD_ID: TokenId = 0;
pub const START_ID: TokenId = 1;
pub const EOS_ID: TokenId = 2;
pub const UNKNOWN_ID: TokenId = 3;

/// The reserved symbols in id order.
pub const RESERVED: [&str; 4] = [PAD, START, EOS, UNKNOWN];

/// True for an end-of-sequence id.
pub fn is_eos(id: TokenId) -> bool {
    id == EOS_ID
}

/// True if `id` is one of the four reserved ids.
pub fn is_reserved(id: TokenId) -> bool {
    (id as usize) < RESERVED.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids_match_positions() {
        assert_eq!(RESERVED[PAD_ID as usize], "<PAD>");
        assert_eq!(RESERVED[START_ID as usize], "<S>");
        assert_eq!(RESERVED[EOS_ID as usize], "<E>");
        assert_eq!(RESERVED[UNKNOWN_ID as usize], "<UNK>");
    }

    #[test]
    fn test_predicates() {
        assert!(is_eos(2));
        assert!(!is_eos(1));
        // 0..=3 are reserved, the first learned token (4) is not
        assert!(is_reserved(0));
        assert!(is_reserved(3));
        assert!(!is_reserved(4));
    }
}
