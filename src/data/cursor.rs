// ============================================================
// Layer 4 — Epoch Cursor
// ============================================================
// Offset of the next batch window into the example list.
//
// Each call hands out the current offset and moves on by
// batch_size, unless the next window would reach the last
// example, in which case it wraps to 0:
//
//   total = 10, batch_size = 4
//   0 → 4 → 8 → 0 → 4 ...      (8 + 4 >= 10 - 1, so wrap)
//
// The wrap is a plain reset, not a reshuffle. Depending on the
// parity of total and batch_size the tail examples may be served
// in a short window or skipped for that epoch.
//
// The cursor is a separate value from the corpus so the corpus
// itself stays immutable after load; the caller owns the cursor.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EpochCursor {
    position: usize,
    epoch: usize,
}

impl EpochCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset the next batch will start at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of wraparounds so far.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Return the current offset and move to the next one.
    pub fn advance(&mut self, batch_size: usize, total: usize) -> usize {
        let start = self.position;

        // saturating so an oversized batch wraps instead of overflowing
        let next = start.saturating_add(batch_size);
        if next < total.saturating_sub(1) {
            self.position = next;
        } else {
            self.position = 0;
            self.epoch += 1;
            tracing::debug!("Epoch {} finished at offset {}", self.epoch, start);
        }

        start
    }
}
