use thiserror::Error;

/// Errors surfaced by the text layout pipeline.
///
/// Every variant is terminal for the element being laid out: the layout
/// call unwinds immediately and produces no partial path data or bounding
/// box. Callers decide whether to skip the element, substitute text, or
/// abort rendering.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The bidi or break primitive reported a failure.
    #[error("segmentation failed: {0}")]
    Segmentation(String),

    /// The shaping primitive reported a failure.
    #[error("shaping failed: {0}")]
    Shaping(String),

    /// Glyph outline decomposition failed for a loaded glyph.
    #[error("outline decomposition failed: {0}")]
    Outline(String),

    /// Font or face construction failed.
    #[error("font resource unavailable: {0}")]
    Resource(String),
}

/// Convenient result alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
