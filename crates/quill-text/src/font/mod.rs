pub mod face;
pub mod library;
pub mod metrics;

pub use face::FontFace;
pub use library::{FontKey, FontLibrary};
pub use metrics::{CellMetrics, FontMetrics};
