//! quill: SVG-oriented text layout built from two crates.
//!
//! - [`geometry`]: 2D affine matrices and accumulating rectangles
//! - [`text`]: segmentation, shaping and glyph layout
//!
//! The re-exports here are the intended entry points; the member crates
//! remain usable on their own.

pub use quill_geometry as geometry;
pub use quill_text as text;

pub use quill_geometry::{Matrix, Rect};
pub use quill_text::{
    Direction, FontFace, FontLibrary, HarfrustShaper, LayoutState, PathCommand,
    PositionAttributes, StyledRun, SwashOutliner, Synthesis, layout_paragraph, layout_run,
};
