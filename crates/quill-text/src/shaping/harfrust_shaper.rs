use std::sync::Arc;

use harfrust::{
    BufferClusterLevel,
    Direction as HbDirection,
    Feature as HbFeature,
    FontRef as HbFontRef,
    Script as HbScript,
    ShaperData,
    ShaperInstance,
    Tag as HbTag,
    UnicodeBuffer as HbUnicodeBuffer,
};

use crate::error::{LayoutError, Result};
use crate::font::FontFace;

use super::{GlyphRecord, ShapeEngine, ShapeRequest};

/// Shaping engine built on harfrust (pure-Rust HarfBuzz port), bound to one
/// font face at one size.
///
/// Clusters are requested at monotone character granularity. Cluster
/// values are byte offsets into the request text and never decrease in
/// shaping order within an LTR run (nor increase within RTL); consumers
/// that need character positions count characters themselves.
pub struct HarfrustShaper {
    face: Arc<FontFace>,
    font_size: f64,
}

impl HarfrustShaper {
    pub fn new(face: Arc<FontFace>, font_size: f64) -> Self {
        Self { face, font_size }
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn face(&self) -> &Arc<FontFace> {
        &self.face
    }
}

impl ShapeEngine for HarfrustShaper {
    fn shape(&self, request: &ShapeRequest<'_>) -> Result<Vec<GlyphRecord>> {
        let font_data = self.face.as_bytes();
        let font_ref = HbFontRef::from_index(&font_data, self.face.index())
            .map_err(|e| LayoutError::Shaping(e.to_string()))?;

        // Shaper configuration with default (no variations) instance.
        let data = ShaperData::new(&font_ref);
        let instance =
            ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(request.text);
        buffer.set_cluster_level(BufferClusterLevel::MonotoneCharacters);
        buffer.set_direction(if !request.horizontal {
            HbDirection::TopToBottom
        } else if request.rtl {
            HbDirection::RightToLeft
        } else {
            HbDirection::LeftToRight
        });
        if let Some(tag) = request.script {
            if let Some(script) = HbScript::from_iso15924_tag(HbTag::new(&tag)) {
                buffer.set_script(script);
            }
        }
        if let Some(language) = request.language {
            if let Ok(language) = language.parse() {
                buffer.set_language(language);
            }
        }
        // Let harfrust fill in any remaining segment properties.
        buffer.guess_segment_properties();

        let features: Vec<HbFeature> = request
            .features
            .iter()
            .map(|f| HbFeature::new(HbTag::new(&f.tag), f.value, ..))
            .collect();

        let glyph_buffer = shaper.shape(buffer, &features);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        // harfrust reports design units; convert to 26.6 fixed point at the
        // requested size.
        let metrics = self.face.metrics();
        let scale = if metrics.units_per_em != 0 {
            self.font_size * 64.0 / metrics.units_per_em as f64
        } else {
            64.0
        };
        let fixed = |v: i32| (v as f64 * scale).round() as i32;

        let mut glyphs = Vec::with_capacity(infos.len());
        for (info, pos) in infos.iter().zip(positions.iter()) {
            glyphs.push(GlyphRecord {
                glyph_id: info.glyph_id,
                cluster: info.cluster,
                x_advance: fixed(pos.x_advance),
                y_advance: fixed(pos.y_advance),
                x_offset: fixed(pos.x_offset),
                y_offset: fixed(pos.y_offset),
            });
        }
        Ok(glyphs)
    }
}
