use unicode_bidi::{BidiClass, BidiInfo, LTR_LEVEL, Level, RTL_LEVEL, bidi_class};

use crate::error::{LayoutError, Result};
use crate::style::Direction;

fn fallback_level(direction: Direction) -> Level {
    match direction {
        Direction::Ltr => LTR_LEVEL,
        Direction::Rtl => RTL_LEVEL,
    }
}

/// The `UBIDI_DEFAULT_LTR`/`UBIDI_DEFAULT_RTL` paragraph-level rule: the
/// first strong character decides, and the style direction only applies to
/// text with no strong character at all.
fn base_override(text: &str, base: Direction) -> Option<Level> {
    let has_strong = text
        .chars()
        .any(|c| matches!(bidi_class(c), BidiClass::L | BidiClass::R | BidiClass::AL));
    if has_strong {
        None
    } else {
        Some(fallback_level(base))
    }
}

/// BiDi analysis (UAX-9) of one paragraph of text. The paragraph level is
/// detected from the first strong character; `base` is the fallback for
/// neutral-only text.
///
/// Levels are resolved per byte; multi-byte characters repeat their level
/// for each byte.
pub struct BidiParagraph<'text> {
    info: BidiInfo<'text>,
    length: usize,
}

impl<'text> BidiParagraph<'text> {
    pub fn new(text: &'text str, base: Direction) -> Result<Self> {
        let info = BidiInfo::new(text, base_override(text, base));
        Ok(Self {
            info,
            length: text.len(),
        })
    }

    /// Length of the analyzed text in bytes.
    pub fn processed_length(&self) -> usize {
        self.length
    }

    /// The logical run containing byte position `pos`: returns the run's
    /// exclusive end limit and its resolved embedding level. Walking
    /// `pos = limit` from zero visits the runs in logical order.
    pub fn logical_run_at(&self, pos: usize) -> Result<(usize, u8)> {
        if pos >= self.length {
            return Err(LayoutError::Segmentation(format!(
                "logical run position {pos} out of bounds (length {})",
                self.length
            )));
        }
        let level = self.info.levels[pos];
        let paragraph_end = self
            .info
            .paragraphs
            .iter()
            .find(|p| p.range.contains(&pos))
            .map(|p| p.range.end)
            .unwrap_or(self.length);
        let mut limit = pos + 1;
        while limit < paragraph_end && self.info.levels[limit] == level {
            limit += 1;
        }
        Ok((limit, level.number()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_ltr_is_one_run() {
        let para = BidiParagraph::new("hello world", Direction::Ltr).unwrap();
        let (limit, level) = para.logical_run_at(0).unwrap();
        assert_eq!(limit, para.processed_length());
        assert_eq!(level, 0);
    }

    #[test]
    fn embedded_rtl_splits_runs() {
        // Latin, Hebrew, Latin: three logical runs under an LTR base.
        let text = "abc \u{05d0}\u{05d1}\u{05d2} def";
        let para = BidiParagraph::new(text, Direction::Ltr).unwrap();
        let mut pos = 0;
        let mut levels = Vec::new();
        while pos < para.processed_length() {
            let (limit, level) = para.logical_run_at(pos).unwrap();
            assert!(limit > pos);
            levels.push(level);
            pos = limit;
        }
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0] % 2, 0);
        assert_eq!(levels[1] % 2, 1);
        assert_eq!(levels[2] % 2, 0);
    }

    #[test]
    fn rtl_base_gives_odd_level_to_strong_rtl() {
        let text = "\u{05d0}\u{05d1}\u{05d2}";
        let para = BidiParagraph::new(text, Direction::Rtl).unwrap();
        let (_, level) = para.logical_run_at(0).unwrap();
        assert_eq!(level % 2, 1);
    }

    #[test]
    fn first_strong_character_overrides_style_direction() {
        // Styled LTR, but the text leads with Hebrew: the paragraph level
        // follows the text.
        let text = "\u{05d0}\u{05d1} abc";
        let para = BidiParagraph::new(text, Direction::Ltr).unwrap();
        let (_, level) = para.logical_run_at(0).unwrap();
        assert_eq!(level % 2, 1);
        // Embedded Latin resolves above the RTL paragraph level.
        let latin_start = text.find('a').unwrap();
        let (_, latin_level) = para.logical_run_at(latin_start).unwrap();
        assert_eq!(latin_level % 2, 0);
        assert!(latin_level > 0);
    }

    #[test]
    fn neutral_only_text_falls_back_to_style_direction() {
        let (_, rtl_level) = BidiParagraph::new("...", Direction::Rtl)
            .unwrap()
            .logical_run_at(0)
            .unwrap();
        assert_eq!(rtl_level, 1);
        let (_, ltr_level) = BidiParagraph::new("...", Direction::Ltr)
            .unwrap()
            .logical_run_at(0)
            .unwrap();
        assert_eq!(ltr_level, 0);
    }

    #[test]
    fn out_of_bounds_position_is_an_error() {
        let para = BidiParagraph::new("ab", Direction::Ltr).unwrap();
        assert!(para.logical_run_at(2).is_err());
    }
}
