use crate::shaping::FeatureSetting;

/// Inline base direction of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_ltr(self) -> bool {
        self == Direction::Ltr
    }
}

/// CSS writing mode, reduced to the values the layout math distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritingMode {
    /// `horizontal-tb` and the legacy `lr`, `lr-tb`, `rl`, `rl-tb` values.
    HorizontalTb,
    VerticalRl,
    VerticalLr,
    SidewaysRl,
    SidewaysLr,
}

impl WritingMode {
    pub fn is_horizontal(self) -> bool {
        self == WritingMode::HorizontalTb
    }

    pub fn is_sideways(self) -> bool {
        matches!(self, WritingMode::SidewaysRl | WritingMode::SidewaysLr)
    }
}

/// Which synthetic face distortions the style permits (CSS `font-synthesis`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontSynthesis {
    /// Synthetic emboldening allowed (`font-synthesis: weight`).
    pub weight: bool,
    /// Synthetic obliquing allowed (`font-synthesis: style`).
    pub style: bool,
}

impl FontSynthesis {
    /// The CSS initial value permits both.
    pub fn all() -> Self {
        Self {
            weight: true,
            style: true,
        }
    }
}

/// CSS font-weight value above which synthetic bold kicks in when the face
/// itself is not bold.
pub const WEIGHT_NORMAL: u16 = 400;

/// An immutable slice of input text plus its resolved style snapshot.
///
/// One `StyledRun` is created per distinct element encountered during tree
/// traversal by whatever owns the styled DOM; this crate only consumes it.
#[derive(Debug, Clone)]
pub struct StyledRun {
    /// Addressable text for rendering, already normalized by the caller.
    pub text: String,
    pub direction: Direction,
    pub writing_mode: WritingMode,
    /// ISO 15924 script tag (e.g. `*b"Latn"`), if the style resolved one.
    pub script: Option<[u8; 4]>,
    /// BCP 47 language tag, if the style resolved one.
    pub language: Option<String>,
    /// OpenType features derived from the computed style
    /// (see [`crate::shaping::features_from_style`]).
    pub features: Vec<FeatureSetting>,
    /// Resolved CSS font-weight (100..=900).
    pub font_weight: u16,
    /// True when font-style resolved to italic or oblique.
    pub font_style_oblique: bool,
    pub synthesis: FontSynthesis,
}

impl StyledRun {
    /// A plain horizontal run with default style, mostly for tests and
    /// simple callers.
    pub fn plain(text: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            direction,
            writing_mode: WritingMode::HorizontalTb,
            script: None,
            language: None,
            features: Vec::new(),
            font_weight: WEIGHT_NORMAL,
            font_style_oblique: false,
            synthesis: FontSynthesis::all(),
        }
    }
}

/// Explicit per-character positioning attributes (SVG `x`/`y`/`dx`/`dy`/
/// `rotate` lists).
///
/// All five sequences are addressed per character, not per glyph, and may be
/// shorter than the text; missing entries fall back to pen continuation.
/// The struct itself is never mutated by layout — consumption goes through
/// an internal cursor over cloned working storage, so laying out the same
/// snapshot twice yields identical results.
#[derive(Debug, Clone, Default)]
pub struct PositionAttributes {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub dx: Vec<f64>,
    pub dy: Vec<f64>,
    pub rotate: Vec<f64>,
}

impl PositionAttributes {
    pub fn new() -> Self {
        Self::default()
    }
}
