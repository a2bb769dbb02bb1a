/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Line height in font units (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Cell metrics scaled to the given font size in user units.
    ///
    /// This mirrors FreeType size metrics: `height` is the scaled line
    /// height, `descender` is negative-down (below the baseline), and
    /// `width` is the em size, standing in for `x_ppem`. These are the cell
    /// extents the layout accumulator uses for glyph bounding boxes in
    /// place of true ink bounds.
    pub fn cell_metrics(&self, font_size: f64) -> CellMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f64
        } else {
            1.0
        };
        CellMetrics {
            width: font_size,
            height: self.line_height() as f64 * scale,
            descender: -(self.descent as f64) * scale,
        }
    }
}

/// Scaled cell extents used for approximate glyph bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Nominal glyph cell width (em size), used for vertical text.
    pub width: f64,
    /// Line height in user units.
    pub height: f64,
    /// Descender in user units, negative below the baseline.
    pub descender: f64,
}
