use core::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Byte ranges of the extended grapheme clusters of `text`, in scan order.
///
/// Attribute redistribution counts Unicode scalars, not clusters; these
/// helpers serve callers that address text per user-perceived character,
/// such as cursor movement over combining sequences.
pub fn grapheme_ranges(text: &str) -> Vec<Range<usize>> {
    text.grapheme_indices(true)
        .map(|(byte_idx, g)| byte_idx..byte_idx + g.len())
        .collect()
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_cluster_per_byte() {
        assert_eq!(grapheme_ranges("abc"), vec![0..1, 1..2, 2..3]);
        assert_eq!(grapheme_count("abc"), 3);
    }

    #[test]
    fn combining_mark_joins_its_base() {
        // "e" + COMBINING ACUTE ACCENT is one cluster.
        let text = "e\u{0301}x";
        assert_eq!(grapheme_ranges(text), vec![0..3, 3..4]);
        assert_eq!(grapheme_count(text), 2);
    }
}
