//! Bidirectional run resolution and line-break segmentation.
//!
//! Text is decomposed in two stages: UAX-9 logical runs (one embedding
//! level each), then UAX-14 break opportunities within each run. The
//! resulting segments are the shaping units of the layout pipeline.

pub mod bidi;
pub mod breaks;
pub mod graphemes;

use core::ops::Range;

pub use bidi::BidiParagraph;
pub use graphemes::{grapheme_count, grapheme_ranges};

use crate::error::Result;
use crate::style::Direction;

/// One shaping unit: a byte range of the source text plus the resolved
/// embedding level of its run. Odd level means right-to-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub range: Range<usize>,
    pub level: u8,
}

impl Segment {
    pub fn is_rtl(&self) -> bool {
        self.level % 2 == 1
    }
}

/// Lazily yields the segments of `text` in visual-ish order: runs are
/// visited logically, but a run whose direction disagrees with the base
/// direction has its segments visited in reverse. One pass, not
/// restartable.
pub fn segments(text: &str, base: Direction) -> Result<SegmentIter<'_>> {
    let paragraph = BidiParagraph::new(text, base)?;
    let mut runs = Vec::new();
    let mut pos = 0;
    while pos < paragraph.processed_length() {
        let (limit, level) = paragraph.logical_run_at(pos)?;
        runs.push((pos..limit, level));
        pos = limit;
    }
    Ok(SegmentIter {
        text,
        base,
        runs,
        next_run: 0,
        pending: Vec::new(),
        pending_idx: 0,
    })
}

pub struct SegmentIter<'text> {
    text: &'text str,
    base: Direction,
    runs: Vec<(Range<usize>, u8)>,
    next_run: usize,
    pending: Vec<Segment>,
    pending_idx: usize,
}

impl SegmentIter<'_> {
    /// A run that runs against the base direction is laid out mirrored, so
    /// its segments must be consumed in reverse to come out in the order
    /// the base direction expects.
    fn reversed(&self, level: u8) -> bool {
        let run_rtl = level % 2 == 1;
        match self.base {
            Direction::Ltr => run_rtl,
            Direction::Rtl => !run_rtl,
        }
    }

    fn refill(&mut self) -> bool {
        while self.pending_idx >= self.pending.len() {
            let Some((range, level)) = self.runs.get(self.next_run).cloned() else {
                return false;
            };
            self.next_run += 1;
            let slice = &self.text[range.clone()];
            let mut segments: Vec<Segment> = breaks::break_segments(slice, range.start)
                .into_iter()
                .map(|range| Segment { range, level })
                .collect();
            if self.reversed(level) {
                segments.reverse();
            }
            self.pending = segments;
            self.pending_idx = 0;
        }
        true
    }
}

impl Iterator for SegmentIter<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if !self.refill() {
            return None;
        }
        let segment = self.pending[self.pending_idx].clone();
        self.pending_idx += 1;
        Some(segment)
    }
}
