//! Deterministic mapping from computed font-variant style to OpenType
//! feature settings.

/// A single OpenType feature: 4-character tag plus a boolean/numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSetting {
    pub tag: [u8; 4],
    pub value: u32,
}

impl FeatureSetting {
    pub fn new(tag: &[u8; 4], value: u32) -> Self {
        Self { tag: *tag, value }
    }
}

/// CSS `font-kerning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontKerning {
    #[default]
    Auto,
    Normal,
    None,
}

/// CSS `font-variant-caps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariantCaps {
    #[default]
    Normal,
    SmallCaps,
    AllSmallCaps,
    PetiteCaps,
    AllPetiteCaps,
    Unicase,
    TitlingCaps,
}

/// CSS `font-variant-east-asian` form values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EastAsianForm {
    #[default]
    Normal,
    Jis78,
    Jis83,
    Jis90,
    Simplified,
    Traditional,
}

/// CSS `font-variant-east-asian` width values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EastAsianWidth {
    FullWidth,
    ProportionalWidth,
}

/// CSS `font-variant-ligatures`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariantLigatures {
    #[default]
    Normal,
    /// `none`: every ligature class disabled.
    None,
    /// Any combination of the explicit ligature toggles; `None` fields keep
    /// the font's defaults.
    Explicit {
        common: Option<bool>,
        discretionary: Option<bool>,
        historical: Option<bool>,
        contextual: Option<bool>,
    },
}

/// CSS `font-variant-numeric` figure style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFigure {
    Lining,
    Oldstyle,
}

/// CSS `font-variant-numeric` spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSpacing {
    Proportional,
    Tabular,
}

/// CSS `font-variant-numeric` fraction style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFraction {
    Diagonal,
    Stacked,
}

/// CSS `font-variant-position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontVariantPosition {
    #[default]
    Normal,
    Sub,
    Super,
}

/// The computed font-variant flags that drive feature selection.
#[derive(Debug, Clone, Default)]
pub struct StyleFeatures {
    /// Explicit `font-feature-settings` entries; these seed the output and
    /// are overridden by the derived settings below.
    pub feature_settings: Vec<FeatureSetting>,
    pub kerning: FontKerning,
    /// `font-variant-alternates: historical-forms`.
    pub historical_forms: bool,
    pub caps: FontVariantCaps,
    pub east_asian_form: EastAsianForm,
    pub east_asian_width: Option<EastAsianWidth>,
    pub east_asian_ruby: bool,
    pub ligatures: FontVariantLigatures,
    pub numeric_figure: Option<NumericFigure>,
    pub numeric_spacing: Option<NumericSpacing>,
    pub numeric_fraction: Option<NumericFraction>,
    pub numeric_ordinal: bool,
    pub numeric_slashed_zero: bool,
    pub position: FontVariantPosition,
}

/// Ordered feature map with last-writer-wins upserts, so derived settings
/// override seeded `font-feature-settings` entries in place.
struct FeatureMap {
    entries: Vec<FeatureSetting>,
}

impl FeatureMap {
    fn new(seed: &[FeatureSetting]) -> Self {
        let mut map = Self {
            entries: Vec::new(),
        };
        for setting in seed {
            map.set(&setting.tag, setting.value);
        }
        map
    }

    fn set(&mut self, tag: &[u8; 4], value: u32) {
        if let Some(existing) = self.entries.iter_mut().find(|s| &s.tag == tag) {
            existing.value = value;
        } else {
            self.entries.push(FeatureSetting::new(tag, value));
        }
    }
}

/// Derives the full OpenType feature list for shaping from the computed
/// style flags. The mapping is exhaustive and deterministic; each style
/// property contributes its features in a fixed order.
pub fn features_from_style(style: &StyleFeatures) -> Vec<FeatureSetting> {
    let mut features = FeatureMap::new(&style.feature_settings);

    match style.kerning {
        FontKerning::None => {
            features.set(b"kern", 0);
            features.set(b"vkrn", 0);
        }
        FontKerning::Normal => {
            features.set(b"kern", 1);
            features.set(b"vkrn", 1);
        }
        FontKerning::Auto => {}
    }

    if style.historical_forms {
        features.set(b"hist", 1);
    }

    match style.caps {
        FontVariantCaps::Normal => {}
        FontVariantCaps::SmallCaps => features.set(b"smcp", 1),
        FontVariantCaps::AllSmallCaps => {
            features.set(b"c2sc", 1);
            features.set(b"smcp", 1);
        }
        FontVariantCaps::PetiteCaps => features.set(b"pcap", 1),
        FontVariantCaps::AllPetiteCaps => {
            features.set(b"c2pc", 1);
            features.set(b"pcap", 1);
        }
        FontVariantCaps::Unicase => features.set(b"unic", 1),
        FontVariantCaps::TitlingCaps => features.set(b"titl", 1),
    }

    match style.east_asian_form {
        EastAsianForm::Normal => {}
        EastAsianForm::Jis78 => features.set(b"jp78", 1),
        EastAsianForm::Jis83 => features.set(b"jp83", 1),
        EastAsianForm::Jis90 => features.set(b"jp90", 1),
        EastAsianForm::Simplified => features.set(b"smpl", 1),
        EastAsianForm::Traditional => features.set(b"trad", 1),
    }
    match style.east_asian_width {
        Some(EastAsianWidth::FullWidth) => features.set(b"fwid", 1),
        Some(EastAsianWidth::ProportionalWidth) => features.set(b"pwid", 1),
        None => {}
    }
    if style.east_asian_ruby {
        features.set(b"ruby", 1);
    }

    match style.ligatures {
        FontVariantLigatures::Normal => {}
        FontVariantLigatures::None => {
            features.set(b"liga", 0);
            features.set(b"clig", 0);
            features.set(b"dlig", 0);
            features.set(b"hlig", 0);
            features.set(b"calt", 0);
        }
        FontVariantLigatures::Explicit {
            common,
            discretionary,
            historical,
            contextual,
        } => {
            if let Some(on) = common {
                features.set(b"liga", on as u32);
                features.set(b"clig", on as u32);
            }
            if let Some(on) = discretionary {
                features.set(b"dlig", on as u32);
            }
            if let Some(on) = historical {
                features.set(b"hlig", on as u32);
            }
            if let Some(on) = contextual {
                features.set(b"calt", on as u32);
            }
        }
    }

    match style.numeric_figure {
        Some(NumericFigure::Lining) => features.set(b"lnum", 1),
        Some(NumericFigure::Oldstyle) => features.set(b"onum", 1),
        None => {}
    }
    match style.numeric_spacing {
        Some(NumericSpacing::Proportional) => features.set(b"pnum", 1),
        Some(NumericSpacing::Tabular) => features.set(b"tnum", 1),
        None => {}
    }
    match style.numeric_fraction {
        Some(NumericFraction::Diagonal) => features.set(b"frac", 1),
        Some(NumericFraction::Stacked) => features.set(b"afrc", 1),
        None => {}
    }
    if style.numeric_ordinal {
        features.set(b"ordn", 1);
    }
    if style.numeric_slashed_zero {
        features.set(b"zero", 1);
    }

    match style.position {
        FontVariantPosition::Normal => {}
        FontVariantPosition::Sub => features.set(b"subs", 1),
        FontVariantPosition::Super => features.set(b"sups", 1),
    }

    features.entries
}
