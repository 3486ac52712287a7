//! The canonical classification label.

use crate::color::Color;
use crate::model::derivation::KnownSuffix;
use crate::parser::join_chain;
pub use crate::parser::UNCLASSIFIED_NAME;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Suffix marking a classification to be ignored, e.g. `"Ignore*"`.
pub const IGNORED_SUFFIX: char = '*';

// =#========================================================================#=
// LABEL
// =#========================================================================#=
/// One node in a classification hierarchy, e.g. `"Tumor: 1+"`.
///
/// A [Label] is a cheap, clonable handle to a node owned by a
/// [LabelStore](crate::model::LabelStore). The store hands out exactly one
/// node per distinct chain, so equality and hashing are by identity: two
/// labels are equal iff they are the same node.
///
/// # Invariants
/// - `chain` is non-empty, except for the unclassified label
/// - `parent.chain` is `chain` without its last name
/// - Labels never change after construction
#[derive(Clone)]
pub struct Label(Arc<LabelNode>);

#[derive(Debug)]
struct LabelNode {
    chain: Vec<String>,
    parent: Option<Label>,
    color: Option<Color>,
    display: String,
}

impl Label {
    /// Creates the unclassified label with the empty chain.
    pub(crate) fn unclassified() -> Self {
        Label(Arc::new(LabelNode {
            chain: Vec::new(),
            parent: None,
            color: None,
            display: UNCLASSIFIED_NAME.to_string(),
        }))
    }

    /// Creates a label below `parent`, or a root label if `parent` is `None`.
    ///
    /// Only called by the store, with a trimmed and validated `name`.
    pub(crate) fn new(parent: Option<&Label>, name: &str, color: Option<Color>) -> Self {
        let mut chain = parent.map(|p| p.chain().to_vec()).unwrap_or_default();
        chain.push(name.to_string());
        let display = join_chain(&chain);
        Label(Arc::new(LabelNode {
            chain,
            parent: parent.cloned(),
            color,
            display,
        }))
    }

    /// Returns the last name of the chain; empty for the unclassified label.
    pub fn name(&self) -> &str {
        self.0.chain.last().map(String::as_str).unwrap_or("")
    }

    /// Returns all names from the root down to this label.
    pub fn chain(&self) -> &[String] {
        &self.0.chain
    }

    /// Returns the parent, or `None` for root labels and unclassified.
    pub fn parent(&self) -> Option<&Label> {
        self.0.parent.as_ref()
    }

    /// Returns the color fixed when this label was first created.
    pub fn color(&self) -> Option<Color> {
        self.0.color
    }

    /// Returns the number of names in the chain (0 for unclassified).
    pub fn depth(&self) -> usize {
        self.0.chain.len()
    }

    /// Returns `true` if this is the unclassified label.
    pub fn is_unclassified(&self) -> bool {
        self.0.chain.is_empty()
    }

    /// Returns `true` for a label without parent that is not unclassified.
    pub fn is_root(&self) -> bool {
        self.depth() == 1
    }

    /// Returns `true` if this label has a parent.
    pub fn is_derived(&self) -> bool {
        self.0.parent.is_some()
    }

    /// Returns the root-most ancestor.
    ///
    /// Root labels and the unclassified label are their own base.
    pub fn base(&self) -> &Label {
        let mut current = self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Iterates over the ancestors, parent first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Returns `true` if `self` is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &Label) -> bool {
        other.ancestors().any(|ancestor| ancestor == self)
    }

    /// Returns the known suffix this label's name corresponds to, if any.
    pub fn suffix(&self) -> Option<KnownSuffix> {
        KnownSuffix::from_name(self.name())
    }

    pub fn is_positive(&self) -> bool {
        self.suffix() == Some(KnownSuffix::Positive)
    }

    pub fn is_negative(&self) -> bool {
        self.suffix() == Some(KnownSuffix::Negative)
    }

    pub fn is_one_plus(&self) -> bool {
        self.suffix() == Some(KnownSuffix::OnePlus)
    }

    pub fn is_two_plus(&self) -> bool {
        self.suffix() == Some(KnownSuffix::TwoPlus)
    }

    pub fn is_three_plus(&self) -> bool {
        self.suffix() == Some(KnownSuffix::ThreePlus)
    }

    /// Returns `true` for `1+`, `2+` and `3+` labels.
    pub fn is_graded_intensity(&self) -> bool {
        self.intensity_score().is_some()
    }

    /// Returns `true` for `Positive`, `1+`, `2+` and `3+` labels.
    pub fn is_positive_or_graded_intensity(&self) -> bool {
        self.is_positive() || self.is_graded_intensity()
    }

    /// Returns the intensity score (1-3) of graded labels.
    pub fn intensity_score(&self) -> Option<u8> {
        self.suffix().and_then(KnownSuffix::intensity_score)
    }

    /// Returns `true` if the name ends with `*`, e.g. `"Ignore*"`.
    pub fn is_ignored(&self) -> bool {
        self.name().ends_with(IGNORED_SUFFIX)
    }

    /// Returns `true` if both handles point at the same node.
    ///
    /// Same as `==`, spelled out for readability at call sites.
    pub fn same_as(&self, other: &Label) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0.display)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Label")
            .field("chain", &self.0.chain)
            .field("color", &self.0.color)
            .finish()
    }
}

// =#========================================================================#=
// ANCESTORS
// =#========================================================================#=
/// Iterator over the ancestors of a [Label], parent first.
pub struct Ancestors<'a> {
    next: Option<&'a Label>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
