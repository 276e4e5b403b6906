//! Scroll-driven compaction of the header.

/// Vertical offset (CSS px) past which the header switches to its compact look.
pub const DEFAULT_COMPACT_THRESHOLD: f64 = 50.0;

/// Whether `offset` is deep enough to compact the header.
///
/// Strictly greater-than: sitting exactly on the threshold keeps the
/// expanded presentation.
pub fn is_compacted(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub compacted: bool,
    pub threshold: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_COMPACT_THRESHOLD)
    }
}

impl ScrollState {
    pub fn new(threshold: f64) -> Self {
        Self {
            compacted: false,
            threshold,
        }
    }

    /// Record the latest offset. Returns `true` only when the flag flipped,
    /// so callers can skip redundant renders on every scrolled pixel.
    pub fn observe(&mut self, offset: f64) -> bool {
        let next = is_compacted(offset, self.threshold);
        let changed = next != self.compacted;
        self.compacted = next;
        changed
    }
}
