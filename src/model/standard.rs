//! Predefined classifications used across most projects.

use crate::color::Color;
use crate::model::derivation::{NAME_NEGATIVE, NAME_POSITIVE, ScorePalette};
use std::fmt;

/// Commonly used top-level classifications with fixed names and colors.
///
/// `Positive` and `Negative` share their colors with the derived labels of the
/// default [ScorePalette].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardLabel {
    Ignore,
    ImageRoot,
    ImmuneCells,
    Necrosis,
    Negative,
    Other,
    Positive,
    Region,
    Stroma,
    Tumor,
}

impl StandardLabel {
    pub const ALL: [StandardLabel; 10] = [
        StandardLabel::Ignore,
        StandardLabel::ImageRoot,
        StandardLabel::ImmuneCells,
        StandardLabel::Necrosis,
        StandardLabel::Negative,
        StandardLabel::Other,
        StandardLabel::Positive,
        StandardLabel::Region,
        StandardLabel::Stroma,
        StandardLabel::Tumor,
    ];

    /// Returns the label name. `Ignore` and `Region` end with `*`, marking
    /// them as ignored classifications.
    pub fn name(self) -> &'static str {
        match self {
            StandardLabel::Ignore => "Ignore*",
            StandardLabel::ImageRoot => "Image",
            StandardLabel::ImmuneCells => "Immune cells",
            StandardLabel::Necrosis => "Necrosis",
            StandardLabel::Negative => NAME_NEGATIVE,
            StandardLabel::Other => "Other",
            StandardLabel::Positive => NAME_POSITIVE,
            StandardLabel::Region => "Region*",
            StandardLabel::Stroma => "Stroma",
            StandardLabel::Tumor => "Tumor",
        }
    }

    /// Returns the color a standard label is created with.
    pub fn color(self) -> Color {
        match self {
            StandardLabel::Ignore => Color::rgb(180, 180, 180),
            StandardLabel::ImageRoot => Color::rgb(128, 128, 128),
            StandardLabel::ImmuneCells => Color::rgb(160, 90, 160),
            StandardLabel::Necrosis => Color::rgb(50, 50, 50),
            StandardLabel::Negative => ScorePalette::default().negative,
            StandardLabel::Other => Color::rgb(255, 200, 0),
            StandardLabel::Positive => ScorePalette::default().positive,
            StandardLabel::Region => Color::rgb(0, 0, 180),
            StandardLabel::Stroma => Color::rgb(150, 200, 150),
            StandardLabel::Tumor => Color::rgb(200, 0, 0),
        }
    }

    /// Looks up the standard label with exactly this name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|standard| standard.name() == name)
    }
}

impl fmt::Display for StandardLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
