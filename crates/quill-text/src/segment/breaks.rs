use core::ops::Range;

use unicode_linebreak::linebreaks;

/// Split one single-level run slice at UAX-14 line-break opportunities.
///
/// Returned ranges are relative to the full text (`run_start` is the run's
/// global byte offset) and cover the slice without gaps. `linebreaks`
/// always reports a mandatory break at the end of input, so the final
/// segment is always closed.
pub fn break_segments(slice: &str, run_start: usize) -> Vec<Range<usize>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (offset, _opportunity) in linebreaks(slice) {
        if offset > start {
            segments.push(run_start + start..run_start + offset);
        }
        start = offset;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_open_break_opportunities() {
        let segments = break_segments("ab cd ef", 0);
        assert_eq!(segments, vec![0..3, 3..6, 6..8]);
    }

    #[test]
    fn no_opportunity_yields_single_segment() {
        let segments = break_segments("abcdef", 10);
        assert_eq!(segments, vec![10..16]);
    }

    #[test]
    fn run_start_offsets_ranges() {
        let segments = break_segments("ab cd", 100);
        assert_eq!(segments, vec![100..103, 103..105]);
    }

    #[test]
    fn empty_slice_yields_nothing() {
        assert!(break_segments("", 0).is_empty());
    }
}
