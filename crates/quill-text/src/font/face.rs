use std::sync::Arc;

use swash::scale::ScaleContext;
use swash::scale::outline::Outline;
use swash::{Attributes, FontRef, GlyphId, Style, Weight};

use crate::error::{LayoutError, Result};
use crate::font::{CellMetrics, FontMetrics};

/// Loaded font face backed by a font file (TTF/OTF).
///
/// A thin wrapper around `swash::FontRef` that owns the underlying font
/// data and exposes the metrics and glyph outline access the layout
/// pipeline needs. Data is reference counted; clones share it.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Font index within the file (for collections).
    index: u32,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
    /// Face attributes (weight/style), used for synthesis decisions.
    attributes: Attributes,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    /// Fails with [`LayoutError::Resource`] when the data is not a usable
    /// font.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index)
            .ok_or_else(|| LayoutError::Resource("invalid font data".into()))?;
        let swash_metrics = font.metrics(&[]);
        let metrics = FontMetrics {
            ascent: swash_metrics.ascent,
            descent: swash_metrics.descent,
            line_gap: swash_metrics.leading,
            units_per_em: swash_metrics.units_per_em,
        };
        let attributes = font.attributes();
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            offset,
            key,
            index: index as u32,
            metrics,
            attributes,
        })
    }

    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| LayoutError::Resource(e.to_string()))?;
        Self::from_vec(data, index)
    }

    /// Raw font bytes, for handing to the shaping engine.
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    /// Font index within the file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Cell metrics scaled to the given size in user units.
    pub fn cell_metrics(&self, font_size: f64) -> CellMetrics {
        self.metrics.cell_metrics(font_size)
    }

    /// True when the face itself is bold; synthetic emboldening is skipped
    /// for such faces.
    pub fn is_bold(&self) -> bool {
        self.attributes.weight() >= Weight::BOLD
    }

    /// True when the face itself is italic or oblique.
    pub fn is_italic(&self) -> bool {
        !matches!(self.attributes.style(), Style::Normal)
    }

    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    /// Scale the outline for a glyph at the given size. `None` when the
    /// glyph cannot be loaded (an unloadable glyph, not an empty one:
    /// whitespace glyphs yield an empty outline).
    pub fn glyph_outline(&self, glyph_id: GlyphId, font_size: f32) -> Option<Outline> {
        let mut context = ScaleContext::new();
        let font = self.as_swash_ref();
        let mut scaler = context.builder(font).size(font_size).build();
        scaler.scale_outline(glyph_id)
    }
}
