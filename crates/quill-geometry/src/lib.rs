//! quill-geometry: 2D affine transforms and rectangles for text layout.
//!
//! The two primitives here back the glyph positioning math in `quill-text`:
//! - [`Matrix`]: a 3x2 affine transform with DOMMatrix-style builders.
//! - [`Rect`]: a DOMRect-style rectangle whose origin is unset until the
//!   first assignment, with union/intersection policies tuned for
//!   incremental bounding-box accumulation.

pub mod matrix;
pub mod rect;

pub use matrix::Matrix;
pub use rect::Rect;
