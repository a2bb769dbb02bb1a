//! Glyph positioning: turns styled runs and per-character attributes into
//! an outline path, per-glyph advances and an accumulated bounding box.

pub mod path;
pub mod redistribute;

pub use path::{PathCommand, transform_path};
pub use redistribute::{AttrCursor, redistribute};

use quill_geometry::{Matrix, Rect};

use crate::error::Result;
use crate::outline::OutlineEngine;
use crate::segment::{BidiParagraph, breaks};
use crate::shaping::{SUBPIXEL_SCALE, ShapeEngine, ShapeRequest};
use crate::style::{PositionAttributes, StyledRun};

/// Accumulated layout output for one text element.
///
/// The pen position carries over between runs of the same element; the
/// path, advances and bounding box only ever grow.
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    pub pen_x: f64,
    pub pen_y: f64,
    pub path_data: Vec<PathCommand>,
    pub bbox: Rect,
    pub advances: Vec<f64>,
}

impl LayoutState {
    pub fn new(start_x: f64, start_y: f64) -> Self {
        Self {
            pen_x: start_x,
            pen_y: start_y,
            path_data: Vec::new(),
            bbox: Rect::new(),
            advances: Vec::new(),
        }
    }
}

/// Lays out a single styled run against `state`, consuming positioning
/// attributes from a fresh cursor. The caller's `attrs` are untouched.
pub fn layout_run(
    run: &StyledRun,
    attrs: &PositionAttributes,
    shaper: &dyn ShapeEngine,
    outliner: &dyn OutlineEngine,
    state: &mut LayoutState,
) -> Result<()> {
    let mut cursor = AttrCursor::new(attrs);
    layout_run_with_cursor(run, &mut cursor, shaper, outliner, state)
}

/// Element-level driver: lays out every run of one text element against a
/// single cursor and one shared layout state. Trailing whitespace of the
/// last run does not generate glyphs and is trimmed up front.
pub fn layout_paragraph(
    runs: &[StyledRun],
    attrs: &PositionAttributes,
    shaper: &dyn ShapeEngine,
    outliner: &dyn OutlineEngine,
    origin: (f64, f64),
) -> Result<LayoutState> {
    let mut state = LayoutState::new(origin.0, origin.1);
    let mut cursor = AttrCursor::new(attrs);
    for (i, run) in runs.iter().enumerate() {
        if i + 1 == runs.len() {
            let trimmed = run.text.trim_end();
            if trimmed.len() != run.text.len() {
                let mut last = run.clone();
                last.text = trimmed.to_string();
                layout_run_with_cursor(&last, &mut cursor, shaper, outliner, &mut state)?;
                continue;
            }
        }
        layout_run_with_cursor(run, &mut cursor, shaper, outliner, &mut state)?;
    }
    Ok(state)
}

fn layout_run_with_cursor(
    run: &StyledRun,
    cursor: &mut AttrCursor,
    shaper: &dyn ShapeEngine,
    outliner: &dyn OutlineEngine,
    state: &mut LayoutState,
) -> Result<()> {
    if run.text.is_empty() {
        return Ok(());
    }

    let horizontal = run.writing_mode.is_horizontal();
    let sideways = run.writing_mode.is_sideways();
    let base_ltr = run.direction.is_ltr();
    let cell = outliner.cell_metrics();
    let mut rotate = 0.0_f64;
    let mut warned_vertical = false;

    let paragraph = BidiParagraph::new(&run.text, run.direction)?;
    log::debug!(
        "layout run: {} bytes, base {:?}, {:?}",
        run.text.len(),
        run.direction,
        run.writing_mode,
    );

    let mut logical_start = 0;
    while logical_start < paragraph.processed_length() {
        let (limit, level) = paragraph.logical_run_at(logical_start)?;
        let run_rtl = level % 2 == 1;
        let mismatch = base_ltr == run_rtl;
        // Attribute lists are per character; the run offset into them must
        // be counted in characters, not bytes.
        let run_start_chars = run.text[..logical_start].chars().count();

        let slice = &run.text[logical_start..limit];
        let mut segments = breaks::break_segments(slice, logical_start);
        if mismatch {
            segments.reverse();
        }

        for segment in segments {
            let text = &run.text[segment.clone()];
            let request = ShapeRequest {
                text,
                rtl: run_rtl,
                horizontal,
                script: run.script,
                language: run.language.as_deref(),
                features: &run.features,
            };
            let mut glyphs = shaper.shape(&request)?;
            let Some((&first, &last)) = glyphs.first().zip(glyphs.last()) else {
                continue;
            };
            // Shaping order follows the run direction; normalize to
            // ascending cluster order before lining up with attributes.
            if first.cluster > last.cluster {
                glyphs.reverse();
            }
            redistribute(cursor, &glyphs, text.chars().count(), run_start_chars);

            let mut line_path: Vec<PathCommand> = Vec::new();
            let mut line_bbox = Rect::new();
            for glyph in &glyphs {
                let mut x = cursor.next_x(state.pen_x);
                let mut y = cursor.next_y(state.pen_y);
                let dx = cursor.next_dx();
                let dy = cursor.next_dy();
                cursor.next_rotate(&mut rotate);

                let x_offset = glyph.x_offset as f64 / SUBPIXEL_SCALE;
                let y_offset = glyph.y_offset as f64 / SUBPIXEL_SCALE;
                x += dx + x_offset;
                y += dy - y_offset;

                let (advance, x_advance, y_advance, mut glyph_bbox);
                if horizontal {
                    advance = glyph.x_advance as f64 / SUBPIXEL_SCALE;
                    if run_rtl {
                        x -= advance;
                    }
                    glyph_bbox = Rect::from_xywh(
                        x,
                        y - cell.height - cell.descender,
                        advance,
                        cell.height,
                    );
                    x_advance = advance;
                    y_advance = 0.0;
                } else {
                    advance = -(glyph.y_advance as f64) / SUBPIXEL_SCALE;
                    if sideways {
                        glyph_bbox = Rect::from_xywh(
                            x,
                            y,
                            cell.width,
                            glyph.x_advance as f64 / SUBPIXEL_SCALE,
                        );
                    } else {
                        // TODO: the upright cell box anchors at the baseline
                        // instead of the before-edge; derive it from the
                        // vertical origin once vertical metrics are plumbed
                        // through.
                        glyph_bbox = Rect::from_xywh(x, y + y_offset, cell.width, advance);
                        if !warned_vertical {
                            log::warn!("vertical upright glyph boxes are approximate");
                            warned_vertical = true;
                        }
                    }
                    x_advance = 0.0;
                    y_advance = advance;
                }
                state.advances.push(advance);

                if rotate != 0.0 {
                    glyph_bbox = glyph_bbox.transform(&Matrix::rotation_about(x, y, rotate));
                }

                line_path.extend(outliner.decompose(glyph.glyph_id, x, y, rotate)?);

                if !run_rtl {
                    x += x_advance - x_offset;
                }
                y += y_advance + y_offset;
                line_bbox.union_in_place(&glyph_bbox);
                state.pen_x = x;
                state.pen_y = y;
            }

            // A segment running against the base direction was laid out on
            // the wrong side of the pen; mirror it back and restart the pen
            // at the segment's far edge.
            if horizontal && mismatch {
                let k = if base_ltr { 1.0 } else { -1.0 };
                let width = line_bbox.width();
                line_bbox.translate_in_place(k * width, 0.0);
                line_path = transform_path(&line_path, &Matrix::translation(k * width, 0.0));
                let edge = if base_ltr {
                    line_bbox.right()
                } else {
                    line_bbox.left()
                };
                if let Some(edge) = edge {
                    state.pen_x = edge;
                }
            }
            state.path_data.extend(line_path);
            state.bbox.union_in_place(&line_bbox);
        }

        logical_start = limit;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::font::CellMetrics;
    use crate::shaping::GlyphRecord;
    use crate::style::Direction;

    /// One glyph per character, fixed advance, clusters at byte offsets.
    struct FixedAdvanceShaper {
        advance: f64,
    }

    impl ShapeEngine for FixedAdvanceShaper {
        fn shape(&self, request: &ShapeRequest<'_>) -> Result<Vec<GlyphRecord>> {
            Ok(request
                .text
                .char_indices()
                .map(|(byte, c)| GlyphRecord {
                    glyph_id: c as u32,
                    cluster: byte as u32,
                    x_advance: (self.advance * SUBPIXEL_SCALE) as i32,
                    y_advance: 0,
                    x_offset: 0,
                    y_offset: 0,
                })
                .collect())
        }
    }

    /// Emits one MoveTo at the glyph anchor so tests can observe final
    /// glyph positions in the path data.
    struct AnchorOutliner;

    impl OutlineEngine for AnchorOutliner {
        fn cell_metrics(&self) -> CellMetrics {
            CellMetrics {
                width: 10.0,
                height: 10.0,
                descender: -2.0,
            }
        }

        fn decompose(
            &self,
            _glyph_id: u32,
            pen_x: f64,
            pen_y: f64,
            _rotate_deg: f64,
        ) -> Result<Vec<PathCommand>> {
            Ok(vec![PathCommand::MoveTo { x: pen_x, y: pen_y }])
        }
    }

    fn anchors(path: &[PathCommand]) -> Vec<(f64, f64)> {
        path.iter()
            .map(|c| match *c {
                PathCommand::MoveTo { x, y } => (x, y),
                _ => panic!("stub emits only MoveTo"),
            })
            .collect()
    }

    #[test]
    fn ltr_pair_advances_the_pen() {
        let run = StyledRun::plain("AB", Direction::Ltr);
        let attrs = PositionAttributes {
            x: vec![0.0],
            ..Default::default()
        };
        let shaper = FixedAdvanceShaper { advance: 10.0 };
        let mut state = LayoutState::new(0.0, 0.0);
        layout_run(&run, &attrs, &shaper, &AnchorOutliner, &mut state).unwrap();

        assert_eq!(anchors(&state.path_data), vec![(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(state.pen_x, 20.0);
        assert_eq!(state.advances, vec![10.0, 10.0]);
        assert_eq!(state.bbox.x(), Some(0.0));
        assert_eq!(state.bbox.width(), 20.0);
        // Cell box spans ascent above the baseline down past the descender.
        assert_eq!(state.bbox.y(), Some(-8.0));
        assert_eq!(state.bbox.height(), 10.0);
    }

    #[test]
    fn rtl_segment_in_ltr_base_is_mirrored() {
        // A pure Hebrew run under an LTR base: laid out leftwards from the
        // pen, then translated right by its width so the first logical
        // character ends up rightmost.
        let run = StyledRun::plain("\u{05d0}\u{05d1}", Direction::Ltr);
        let attrs = PositionAttributes::default();
        let shaper = FixedAdvanceShaper { advance: 10.0 };
        let mut state = LayoutState::new(0.0, 0.0);
        layout_run(&run, &attrs, &shaper, &AnchorOutliner, &mut state).unwrap();

        assert_eq!(state.bbox.x(), Some(0.0));
        assert_eq!(state.bbox.width(), 20.0);
        let anchors = anchors(&state.path_data);
        // First logical glyph sits to the right of the second.
        assert_eq!(anchors, vec![(10.0, 0.0), (0.0, 0.0)]);
        // Pen restarts at the mirrored segment's right edge.
        assert_eq!(state.pen_x, 20.0);
    }

    #[test]
    fn rotate_broadcast_persists_across_glyphs() {
        struct RotateRecorder(std::cell::RefCell<Vec<f64>>);
        impl OutlineEngine for RotateRecorder {
            fn cell_metrics(&self) -> CellMetrics {
                CellMetrics {
                    width: 10.0,
                    height: 10.0,
                    descender: -2.0,
                }
            }
            fn decompose(
                &self,
                _glyph_id: u32,
                _pen_x: f64,
                _pen_y: f64,
                rotate_deg: f64,
            ) -> Result<Vec<PathCommand>> {
                self.0.borrow_mut().push(rotate_deg);
                Ok(Vec::new())
            }
        }

        let run = StyledRun::plain("abc", Direction::Ltr);
        let attrs = PositionAttributes {
            rotate: vec![30.0],
            ..Default::default()
        };
        let shaper = FixedAdvanceShaper { advance: 10.0 };
        let recorder = RotateRecorder(Default::default());
        let mut state = LayoutState::new(0.0, 0.0);
        layout_run(&run, &attrs, &shaper, &recorder, &mut state).unwrap();
        assert_eq!(*recorder.0.borrow(), vec![30.0, 30.0, 30.0]);
    }

    #[test]
    fn ligature_consumes_first_position() {
        // Three characters shaped into one glyph: the glyph takes the first
        // explicit position; later entries stay queued for following text.
        struct LigatureShaper;
        impl ShapeEngine for LigatureShaper {
            fn shape(&self, request: &ShapeRequest<'_>) -> Result<Vec<GlyphRecord>> {
                assert_eq!(request.text, "ffi");
                Ok(vec![GlyphRecord {
                    glyph_id: 100,
                    cluster: 0,
                    x_advance: (15.0 * SUBPIXEL_SCALE) as i32,
                    y_advance: 0,
                    x_offset: 0,
                    y_offset: 0,
                }])
            }
        }

        let run = StyledRun::plain("ffi", Direction::Ltr);
        let attrs = PositionAttributes {
            x: vec![10.0, 20.0, 30.0],
            ..Default::default()
        };
        let mut state = LayoutState::new(0.0, 0.0);
        layout_run(&run, &attrs, &LigatureShaper, &AnchorOutliner, &mut state).unwrap();
        assert_eq!(anchors(&state.path_data), vec![(10.0, 0.0)]);
        assert_eq!(state.advances, vec![15.0]);
        assert_eq!(state.bbox.x(), Some(10.0));
        assert_eq!(state.bbox.width(), 15.0);
    }

    #[test]
    fn ligature_edit_lands_on_character_index() {
        // A multi-byte Hebrew run sits between the Latin head and the
        // ligated segment, so the run's byte offset and character offset
        // disagree. The list edit must use the character offset: entry 100
        // (character index 10 at edit time) is dropped, and the tail
        // segment keeps consuming 110 and 120.
        struct LigatingShaper;
        impl ShapeEngine for LigatingShaper {
            fn shape(&self, request: &ShapeRequest<'_>) -> Result<Vec<GlyphRecord>> {
                let g = |cluster: u32| GlyphRecord {
                    glyph_id: 1,
                    cluster,
                    x_advance: (10.0 * SUBPIXEL_SCALE) as i32,
                    y_advance: 0,
                    x_offset: 0,
                    y_offset: 0,
                };
                Ok(match request.text {
                    // "ff" merges into one glyph; "i" and the space follow.
                    "ffi " => vec![g(0), g(2), g(3)],
                    text => text.char_indices().map(|(byte, _)| g(byte as u32)).collect(),
                })
            }
        }

        let run = StyledRun::plain("x \u{05d0}\u{05d1} ffi abcd", Direction::Ltr);
        let attrs = PositionAttributes {
            x: (0..13).map(|i| i as f64 * 10.0).collect(),
            ..Default::default()
        };
        let mut state = LayoutState::new(0.0, 0.0);
        layout_run(&run, &attrs, &LigatingShaper, &AnchorOutliner, &mut state).unwrap();

        let xs: Vec<f64> = anchors(&state.path_data).iter().map(|p| p.0).collect();
        assert_eq!(
            xs,
            vec![
                0.0, 10.0, // "x "
                30.0, 40.0, // Hebrew pair, mirrored right of the pen
                40.0, // space opening the next run
                50.0, 60.0, 70.0, // ff ligature, i, space
                80.0, 90.0, 110.0, 120.0, // "abcd" skips the dropped 100
            ]
        );
    }

    #[test]
    fn layout_is_idempotent_over_the_same_snapshot() {
        let run = StyledRun::plain("ab \u{05d0}\u{05d1} cd", Direction::Ltr);
        let attrs = PositionAttributes {
            x: vec![5.0],
            dx: vec![0.0, 1.0],
            rotate: vec![15.0, 0.0],
            ..Default::default()
        };
        let shaper = FixedAdvanceShaper { advance: 10.0 };

        let mut first = LayoutState::new(0.0, 0.0);
        layout_run(&run, &attrs, &shaper, &AnchorOutliner, &mut first).unwrap();
        let mut second = LayoutState::new(0.0, 0.0);
        layout_run(&run, &attrs, &shaper, &AnchorOutliner, &mut second).unwrap();

        assert_eq!(first.path_data, second.path_data);
        assert_eq!(first.bbox, second.bbox);
        assert_eq!(first.advances, second.advances);
        assert_eq!((first.pen_x, first.pen_y), (second.pen_x, second.pen_y));
    }

    #[test]
    fn paragraph_trims_trailing_whitespace_of_last_run() {
        let runs = vec![
            StyledRun::plain("ab", Direction::Ltr),
            StyledRun::plain("cd  ", Direction::Ltr),
        ];
        let shaper = FixedAdvanceShaper { advance: 10.0 };
        let state = layout_paragraph(
            &runs,
            &PositionAttributes::default(),
            &shaper,
            &AnchorOutliner,
            (0.0, 0.0),
        )
        .unwrap();
        // Four glyphs, not six: the trailing spaces never reach shaping.
        assert_eq!(state.advances.len(), 4);
        assert_eq!(state.pen_x, 40.0);
    }

    #[test]
    fn paragraph_threads_attributes_across_runs() {
        let runs = vec![
            StyledRun::plain("ab", Direction::Ltr),
            StyledRun::plain("cd", Direction::Ltr),
        ];
        let attrs = PositionAttributes {
            x: vec![0.0, 10.0, 100.0, 110.0],
            ..Default::default()
        };
        let shaper = FixedAdvanceShaper { advance: 10.0 };
        let state = layout_paragraph(&runs, &attrs, &shaper, &AnchorOutliner, (0.0, 0.0)).unwrap();
        // The second run picks up where the first left off in the x list.
        assert_eq!(
            anchors(&state.path_data),
            vec![(0.0, 0.0), (10.0, 0.0), (100.0, 0.0), (110.0, 0.0)]
        );
    }
}
