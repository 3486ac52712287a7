use std::fmt;
use std::fmt::Display;

// =#========================================================================#=
// VALIDATION ERROR KIND
// =#========================================================================#=
/// Reasons a label name can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A segment is empty or whitespace-only where a name is required.
    EmptySegment,
    /// A segment contains a newline (or, in segment form, a `:` separator).
    InvalidCharacter,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationErrorKind::EmptySegment => write!(f, "Empty label segment"),
            ValidationErrorKind::InvalidCharacter => write!(f, "Invalid character in label segment"),
        }
    }
}

// =#========================================================================#=
// VALIDATION ERROR
// =#========================================================================#=
/// Error returned when a raw label cannot be normalized.
///
/// Carries the [kind](ValidationErrorKind), the zero-based index of the
/// offending segment and the input as it was supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at position {segment} in {input:?}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    segment: usize,
    input: String,
}

impl ValidationError {
    /// Create a ValidationError for the segment at `segment` of `input`
    pub fn new(kind: ValidationErrorKind, segment: usize, input: &impl Display) -> Self {
        Self {
            kind,
            segment,
            input: input.to_string(),
        }
    }

    /// Convenience constructor for EmptySegment
    pub fn empty_segment(segment: usize, input: &impl Display) -> Self {
        Self::new(ValidationErrorKind::EmptySegment, segment, input)
    }

    /// Convenience constructor for InvalidCharacter
    pub fn invalid_character(segment: usize, input: &impl Display) -> Self {
        Self::new(ValidationErrorKind::InvalidCharacter, segment, input)
    }

    /// Get the error kind
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Get the zero-based index of the rejected segment
    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Get the rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}
