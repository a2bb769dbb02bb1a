//! Shaping adapter: one segment of text in, ordered glyph records out.

pub mod features;
pub mod harfrust_shaper;

pub use features::{FeatureSetting, StyleFeatures, features_from_style};
pub use harfrust_shaper::HarfrustShaper;

use crate::error::Result;

/// Fixed-point scale of glyph metrics: advances and offsets in
/// [`GlyphRecord`] are 26.6 values, divided by this to reach user units.
pub const SUBPIXEL_SCALE: f64 = 64.0;

/// One shaped glyph.
///
/// Advances and offsets are 26.6 fixed point (see [`SUBPIXEL_SCALE`]).
/// `cluster` maps the glyph back to a source character offset within the
/// shaped segment; multiple glyphs may share a cluster (decomposition) and
/// multiple characters may collapse into one cluster (ligature).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRecord {
    pub glyph_id: u32,
    pub cluster: u32,
    pub x_advance: i32,
    pub y_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

/// Everything a shaping engine needs for one segment: the text is already a
/// single-direction run, the rest is resolved style context.
#[derive(Debug, Clone, Copy)]
pub struct ShapeRequest<'a> {
    pub text: &'a str,
    /// Resolved run direction (odd embedding level).
    pub rtl: bool,
    /// Horizontal writing mode; vertical runs shape top-to-bottom.
    pub horizontal: bool,
    /// ISO 15924 script tag, if resolved.
    pub script: Option<[u8; 4]>,
    /// BCP 47 language tag, if resolved.
    pub language: Option<&'a str>,
    pub features: &'a [FeatureSetting],
}

/// The shaping seam.
///
/// Implementations must be pure functions of the request: no caching, no
/// side effects beyond the shaping call itself. Glyphs come back in shaping
/// order, which for RTL or reordering scripts differs from logical order —
/// normalizing reversed cluster order is the caller's job.
pub trait ShapeEngine {
    fn shape(&self, request: &ShapeRequest<'_>) -> Result<Vec<GlyphRecord>>;
}
