//! Derived "scored" child labels and their default colors.
//!
//! Deriving appends one of the [KnownSuffix] names to an existing label's
//! chain, e.g. `"Tumor"` → `"Tumor: 2+"`. Derivation never terminates a chain:
//! `"Tumor: 2+"` → `"Tumor: 2+: 2+"` is just as valid.

use crate::color::Color;
use crate::model::label::Label;
use crate::model::label_store::LabelStore;
use crate::parser::{ValidationError, normalize_segment};
use std::fmt;
use tracing::trace;

pub const NAME_ONE_PLUS: &str = "1+";
pub const NAME_TWO_PLUS: &str = "2+";
pub const NAME_THREE_PLUS: &str = "3+";
pub const NAME_POSITIVE: &str = "Positive";
pub const NAME_NEGATIVE: &str = "Negative";

// =#========================================================================#=
// KNOWN SUFFIX
// =#========================================================================#=
/// Child names with a fixed meaning and default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownSuffix {
    OnePlus,
    TwoPlus,
    ThreePlus,
    Positive,
    Negative,
}

impl KnownSuffix {
    /// All suffixes, in score order.
    pub const ALL: [KnownSuffix; 5] = [
        KnownSuffix::Negative,
        KnownSuffix::Positive,
        KnownSuffix::OnePlus,
        KnownSuffix::TwoPlus,
        KnownSuffix::ThreePlus,
    ];

    /// Returns the name appended to the chain.
    pub fn name(self) -> &'static str {
        match self {
            KnownSuffix::OnePlus => NAME_ONE_PLUS,
            KnownSuffix::TwoPlus => NAME_TWO_PLUS,
            KnownSuffix::ThreePlus => NAME_THREE_PLUS,
            KnownSuffix::Positive => NAME_POSITIVE,
            KnownSuffix::Negative => NAME_NEGATIVE,
        }
    }

    /// Looks up the suffix with exactly this name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suffix| suffix.name() == name)
    }

    /// Returns 1, 2 or 3 for graded intensities, `None` otherwise.
    pub fn intensity_score(self) -> Option<u8> {
        match self {
            KnownSuffix::OnePlus => Some(1),
            KnownSuffix::TwoPlus => Some(2),
            KnownSuffix::ThreePlus => Some(3),
            KnownSuffix::Positive | KnownSuffix::Negative => None,
        }
    }
}

impl fmt::Display for KnownSuffix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =#========================================================================#=
// SCORE PALETTE
// =#========================================================================#=
/// Base colors for derived labels.
///
/// Graded intensities use their base color brightened by `intensity_factor`;
/// `Positive` and `Negative` use their base colors as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePalette {
    pub one_plus: Color,
    pub two_plus: Color,
    pub three_plus: Color,
    pub positive: Color,
    pub negative: Color,
    pub intensity_factor: f64,
}

impl Default for ScorePalette {
    fn default() -> Self {
        ScorePalette {
            one_plus: Color::rgb(255, 215, 0),
            two_plus: Color::rgb(225, 150, 50),
            three_plus: Color::rgb(200, 50, 50),
            positive: Color::rgb(200, 50, 50),
            negative: Color::rgb(112, 112, 225),
            intensity_factor: 1.25,
        }
    }
}

impl ScorePalette {
    /// Returns the color assigned to a newly derived `suffix` label.
    pub fn color_for(&self, suffix: KnownSuffix) -> Color {
        match suffix {
            KnownSuffix::OnePlus => self.one_plus.scaled(self.intensity_factor),
            KnownSuffix::TwoPlus => self.two_plus.scaled(self.intensity_factor),
            KnownSuffix::ThreePlus => self.three_plus.scaled(self.intensity_factor),
            KnownSuffix::Positive => self.positive,
            KnownSuffix::Negative => self.negative,
        }
    }

    /// Returns the default color for a new label named `name`, if it is a
    /// [KnownSuffix].
    pub fn color_for_name(&self, name: &str) -> Option<Color> {
        KnownSuffix::from_name(name).map(|suffix| self.color_for(suffix))
    }
}

// =#========================================================================#=
// DERIVATION
// =#========================================================================#=
impl LabelStore {
    /// Returns the canonical child of `base` named after `suffix`.
    ///
    /// A new child gets the palette color of `suffix`; an existing one is
    /// returned unchanged.
    ///
    /// # Example
    /// ```
    /// use classlabel::model::{KnownSuffix, LabelStore};
    ///
    /// let store = LabelStore::new();
    /// let tumor = store.resolve("Tumor", None)?;
    /// let one_plus = store.derive(&tumor, KnownSuffix::OnePlus);
    /// assert_eq!(one_plus.to_string(), "Tumor: 1+");
    /// assert_eq!(one_plus.parent(), Some(&tumor));
    /// # Ok::<(), classlabel::parser::ValidationError>(())
    /// ```
    pub fn derive(&self, base: &Label, suffix: KnownSuffix) -> Label {
        trace!(base = %base, suffix = %suffix, "deriving label");
        self.append(base, suffix.name(), None)
    }

    /// Returns the canonical child of `base` with an arbitrary `name`.
    ///
    /// The name is trimmed and validated like a single chain segment.
    pub fn derive_named(&self, base: &Label, name: &str) -> Result<Label, ValidationError> {
        let name = normalize_segment(name)?;
        Ok(self.append(base, &name, None))
    }

    /// Same as [derive_named](Self::derive_named), attaching `color` if the
    /// child is new.
    pub fn derive_named_with_color(
        &self,
        base: &Label,
        name: &str,
        color: Color,
    ) -> Result<Label, ValidationError> {
        let name = normalize_segment(name)?;
        Ok(self.append(base, &name, Some(color)))
    }

    /// Returns the nearest label among `label` and its ancestors whose name
    /// is not a [KnownSuffix], e.g. `"Tumor"` for `"Tumor: Positive: 2+"`.
    ///
    /// Returns the unclassified label if every name in the chain is a known
    /// suffix.
    pub fn non_intensity_ancestor(&self, label: &Label) -> Label {
        std::iter::once(label)
            .chain(label.ancestors())
            .find(|candidate| !candidate.is_unclassified() && candidate.suffix().is_none())
            .cloned()
            .unwrap_or_else(|| self.unclassified().clone())
    }

    fn append(&self, base: &Label, name: &str, color_hint: Option<Color>) -> Label {
        let mut chain = base.chain().to_vec();
        chain.push(name.to_string());
        self.get_or_create(&chain, color_hint)
    }
}
