//! Raw label input accepted by the normalizer and the store.

use std::fmt;

// =#========================================================================#=
// LABEL INPUT
// =#========================================================================#=
/// The shapes in which a label name can be supplied.
///
/// Usually built implicitly through one of the [From] implementations:
/// - `&str`, `&String` → [Text](Self::Text), e.g. `"Tumor: 1+"`
/// - `Option<&str>` → [Text](Self::Text) or [Absent](Self::Absent)
/// - slices, arrays and vectors of `AsRef<str>` → [Segments](Self::Segments)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelInput<'a> {
    /// No name at all; resolves to the unclassified label.
    Absent,
    /// A single string with `:` separating hierarchy levels.
    Text(&'a str),
    /// Names already split into hierarchy levels, root first.
    Segments(Vec<&'a str>),
}

impl<'a> From<&'a str> for LabelInput<'a> {
    fn from(text: &'a str) -> Self {
        LabelInput::Text(text)
    }
}

impl<'a> From<&'a String> for LabelInput<'a> {
    fn from(text: &'a String) -> Self {
        LabelInput::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for LabelInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        match text {
            Some(text) => LabelInput::Text(text),
            None => LabelInput::Absent,
        }
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for LabelInput<'a> {
    fn from(segments: &'a [S]) -> Self {
        LabelInput::Segments(segments.iter().map(AsRef::as_ref).collect())
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for LabelInput<'a> {
    fn from(segments: &'a [S; N]) -> Self {
        LabelInput::from(segments.as_slice())
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for LabelInput<'a> {
    fn from(segments: &'a Vec<S>) -> Self {
        LabelInput::from(segments.as_slice())
    }
}

impl fmt::Display for LabelInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LabelInput::Absent => Ok(()),
            LabelInput::Text(text) => f.write_str(text),
            LabelInput::Segments(segments) => write!(f, "{segments:?}"),
        }
    }
}
