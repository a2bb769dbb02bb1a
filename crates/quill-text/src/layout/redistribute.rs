//! Ligature-aware redistribution of per-character positioning attributes.
//!
//! SVG `x`/`y`/`dx`/`dy`/`rotate` lists are authored per character, but
//! shaping may merge characters into one glyph (ligature) or split one
//! character into several (decomposition). Before positions are consumed,
//! the lists are edited so that each remaining entry lines up with a glyph.

use std::collections::VecDeque;

use crate::shaping::GlyphRecord;
use crate::style::PositionAttributes;

/// Consuming cursor over working copies of the positioning lists.
///
/// The caller's [`PositionAttributes`] are never modified; every layout
/// call starts from a fresh clone, so laying out the same snapshot twice
/// gives identical results.
#[derive(Debug, Clone)]
pub struct AttrCursor {
    x: VecDeque<f64>,
    y: VecDeque<f64>,
    dx: VecDeque<f64>,
    dy: VecDeque<f64>,
    rotate: VecDeque<f64>,
}

impl AttrCursor {
    pub fn new(attrs: &PositionAttributes) -> Self {
        Self {
            x: attrs.x.iter().copied().collect(),
            y: attrs.y.iter().copied().collect(),
            dx: attrs.dx.iter().copied().collect(),
            dy: attrs.dy.iter().copied().collect(),
            rotate: attrs.rotate.iter().copied().collect(),
        }
    }

    /// Next explicit x position, or the pen continuation.
    pub fn next_x(&mut self, fallback: f64) -> f64 {
        self.x.pop_front().unwrap_or(fallback)
    }

    /// Next explicit y position, or the pen continuation.
    pub fn next_y(&mut self, fallback: f64) -> f64 {
        self.y.pop_front().unwrap_or(fallback)
    }

    pub fn next_dx(&mut self) -> f64 {
        self.dx.pop_front().unwrap_or(0.0)
    }

    pub fn next_dy(&mut self) -> f64 {
        self.dy.pop_front().unwrap_or(0.0)
    }

    /// Updates `current` with the next rotation. A single-entry list
    /// broadcasts its value without consuming it; a longer list is consumed
    /// one entry per glyph; an empty list leaves the last value in force.
    pub fn next_rotate(&mut self, current: &mut f64) {
        match self.rotate.len() {
            0 => {}
            1 => *current = self.rotate[0],
            _ => {
                if let Some(value) = self.rotate.pop_front() {
                    *current = value;
                }
            }
        }
    }

    pub fn remove_x_at(&mut self, index: usize) {
        self.x.remove(index);
    }

    pub fn remove_y_at(&mut self, index: usize) {
        self.y.remove(index);
    }

    /// Removes the dx entry at `index`, folding its value into the entry
    /// that follows it. The relative offset is not lost unless the removed
    /// entry was the last one.
    pub fn fold_dx_at(&mut self, index: usize) {
        let length = self.dx.len();
        if let Some(value) = self.dx.remove(index) {
            if index < length - 1 {
                self.dx[index] += value;
            }
        }
    }

    pub fn fold_dy_at(&mut self, index: usize) {
        let length = self.dy.len();
        if let Some(value) = self.dy.remove(index) {
            if index < length - 1 {
                self.dy[index] += value;
            }
        }
    }

    /// Removes the rotate entry at `index` unless the list has a single
    /// entry: one rotation broadcasts to every glyph and is never dropped.
    pub fn drop_rotate_at(&mut self, index: usize) {
        if self.rotate.len() > 1 {
            self.rotate.remove(index);
        }
    }
}

/// Cluster relationship of one glyph to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClusterStep {
    /// Same cluster as the previous glyph (one character split into
    /// several glyphs).
    Decomposition,
    /// Exactly one cluster step forward; the expected 1:1 case.
    Advance,
    /// A cluster was skipped: characters merged into the previous glyph.
    Ligature,
}

fn classify(previous: u32, cluster: u32, increment: u32) -> ClusterStep {
    if cluster == previous {
        ClusterStep::Decomposition
    } else if cluster == previous + increment {
        ClusterStep::Advance
    } else {
        ClusterStep::Ligature
    }
}

/// Aligns the cursor's lists with `glyphs` shaped from a segment of
/// `char_count` characters starting `run_start` characters into the lists.
///
/// When glyph and character counts already match, nothing is edited. For
/// each ligature step, one entry is dropped from the absolute lists and
/// folded forward in the relative lists, at the glyph's list index.
pub fn redistribute(
    cursor: &mut AttrCursor,
    glyphs: &[GlyphRecord],
    char_count: usize,
    run_start: usize,
) {
    if glyphs.len() == char_count || glyphs.is_empty() {
        return;
    }
    let cluster_min = glyphs.iter().map(|g| g.cluster).min().unwrap_or(0);
    let cluster_max = glyphs.iter().map(|g| g.cluster).max().unwrap_or(0);
    let increment = ((cluster_max - cluster_min) / glyphs.len() as u32).max(1);

    let mut previous: Option<u32> = None;
    for (offset, glyph) in glyphs.iter().enumerate() {
        if let Some(previous) = previous {
            if classify(previous, glyph.cluster, increment) == ClusterStep::Ligature {
                let index = run_start + offset;
                cursor.remove_x_at(index);
                cursor.remove_y_at(index);
                cursor.fold_dx_at(index);
                cursor.fold_dy_at(index);
                cursor.drop_rotate_at(index);
            }
        }
        previous = Some(glyph.cluster);
    }
}
