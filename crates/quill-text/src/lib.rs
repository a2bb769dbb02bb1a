//! quill-text: bidirectional text segmentation and glyph-shaping pipeline.
//!
//! The pipeline runs in stages:
//! - segmentation: UAX-9 logical runs, then UAX-14 break segments
//! - shaping: segments to glyph records through a pluggable engine
//! - redistribution: ligature-aware alignment of per-character attributes
//! - layout: glyph positioning into an outline path and bounding box

pub mod error;
pub mod font;
pub mod layout;
pub mod outline;
pub mod segment;
pub mod shaping;
pub mod style;

pub use error::{LayoutError, Result};

pub use font::{
    face::FontFace,
    library::{FontKey, FontLibrary},
    metrics::{CellMetrics, FontMetrics},
};

pub use layout::{
    AttrCursor, LayoutState, PathCommand, layout_paragraph, layout_run, transform_path,
};

pub use outline::{OutlineEngine, SwashOutliner, Synthesis};

pub use segment::{BidiParagraph, Segment, segments};

pub use shaping::{
    FeatureSetting, GlyphRecord, HarfrustShaper, ShapeEngine, ShapeRequest, StyleFeatures,
    SUBPIXEL_SCALE, features_from_style,
};

pub use style::{
    Direction, FontSynthesis, PositionAttributes, StyledRun, WEIGHT_NORMAL, WritingMode,
};
