//! Glyph outline extraction with synthetic bold/oblique support.

use std::sync::Arc;

use swash::zeno::Verb;

use quill_geometry::Matrix;

use crate::error::{LayoutError, Result};
use crate::font::{CellMetrics, FontFace};
use crate::layout::PathCommand;
use crate::style::{StyledRun, WEIGHT_NORMAL};

/// Shear applied for synthetic oblique.
const OBLIQUE_SLANT: f64 = 0.2;

/// Synthetic style adjustments resolved for one run against one face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Synthesis {
    pub embolden: bool,
    pub oblique: bool,
}

impl Synthesis {
    /// Synthesize only what the style asks for, the face lacks, and the
    /// style's `font-synthesis` allows.
    pub fn from_style(run: &StyledRun, face: &FontFace) -> Self {
        Self {
            embolden: run.font_weight > WEIGHT_NORMAL && run.synthesis.weight && !face.is_bold(),
            oblique: run.font_style_oblique && run.synthesis.style && !face.is_italic(),
        }
    }
}

/// The outline seam: scaled cell metrics plus per-glyph path extraction at
/// a pen position. Layout calls this once per glyph.
pub trait OutlineEngine {
    fn cell_metrics(&self) -> CellMetrics;

    /// Decompose the glyph outline into path commands in user space, with
    /// the glyph origin at `(pen_x, pen_y)` and an optional rotation (in
    /// degrees) about that anchor.
    fn decompose(
        &self,
        glyph_id: u32,
        pen_x: f64,
        pen_y: f64,
        rotate_deg: f64,
    ) -> Result<Vec<PathCommand>>;
}

/// Real outline engine backed by the swash scaler.
pub struct SwashOutliner {
    face: Arc<FontFace>,
    font_size: f64,
    synthesis: Synthesis,
}

impl SwashOutliner {
    pub fn new(face: Arc<FontFace>, font_size: f64, synthesis: Synthesis) -> Self {
        Self {
            face,
            font_size,
            synthesis,
        }
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}

impl OutlineEngine for SwashOutliner {
    fn cell_metrics(&self) -> CellMetrics {
        self.face.cell_metrics(self.font_size)
    }

    fn decompose(
        &self,
        glyph_id: u32,
        pen_x: f64,
        pen_y: f64,
        rotate_deg: f64,
    ) -> Result<Vec<PathCommand>> {
        let mut outline = self
            .face
            .glyph_outline(glyph_id as u16, self.font_size as f32)
            .ok_or_else(|| LayoutError::Outline(format!("cannot scale glyph {glyph_id}")))?;

        if self.synthesis.embolden {
            // FreeType convention: bold strength of 1/24 em.
            let strength = (self.font_size / 24.0) as f32;
            outline.embolden(strength, strength);
        }

        let slant = if self.synthesis.oblique {
            OBLIQUE_SLANT
        } else {
            0.0
        };
        let rotation =
            (rotate_deg != 0.0).then(|| Matrix::rotation_about(pen_x, pen_y, rotate_deg));

        // Outline points are y-up with the origin at the glyph's own
        // baseline origin; user space is y-down with the origin at the pen.
        let map = |p: swash::zeno::Vector| -> (f64, f64) {
            let gx = p.x as f64 + slant * p.y as f64;
            let gy = p.y as f64;
            let (ux, uy) = (pen_x + gx, pen_y - gy);
            match &rotation {
                Some(matrix) => matrix.transform_point(ux, uy),
                None => (ux, uy),
            }
        };

        let points = outline.points();
        let mut at = 0;
        let mut take = || {
            let p = map(points[at]);
            at += 1;
            p
        };

        let mut path = Vec::new();
        for verb in outline.verbs() {
            match verb {
                Verb::MoveTo => {
                    let (x, y) = take();
                    path.push(PathCommand::MoveTo { x, y });
                }
                Verb::LineTo => {
                    let (x, y) = take();
                    path.push(PathCommand::LineTo { x, y });
                }
                Verb::QuadTo => {
                    let (x1, y1) = take();
                    let (x, y) = take();
                    path.push(PathCommand::QuadTo { x1, y1, x, y });
                }
                Verb::CurveTo => {
                    let (x1, y1) = take();
                    let (x2, y2) = take();
                    let (x, y) = take();
                    path.push(PathCommand::CurveTo {
                        x1,
                        y1,
                        x2,
                        y2,
                        x,
                        y,
                    });
                }
                Verb::Close => path.push(PathCommand::Close),
            }
        }
        Ok(path)
    }
}
