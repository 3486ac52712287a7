//! Normalization of raw label input into validated name chains.
//!
//! A chain is the ordered list of names from the root classification down to
//! the label itself. Normalizing trims every segment and rejects shapes that
//! cannot name a label:
//! * a newline anywhere →
//!   [InvalidCharacter](crate::parser::ValidationErrorKind::InvalidCharacter)
//! * a blank segment in a chain (`":Child"`, `"My::Class"`, `": :"`) →
//!   [EmptySegment](crate::parser::ValidationErrorKind::EmptySegment)
//!
//! Absent input, empty or whitespace-only text, the text `"Unclassified"` and
//! an empty segment list all normalize to the empty chain, which is the key of
//! the unclassified label.

use crate::parser::label_input::LabelInput;
use crate::parser::validation_error::ValidationError;

/// Separator between hierarchy levels in the text form.
pub const SEPARATOR: char = ':';

/// Separator used when displaying a chain.
pub const DISPLAY_SEPARATOR: &str = ": ";

/// Display text of the unclassified label; parses back to the empty chain.
pub const UNCLASSIFIED_NAME: &str = "Unclassified";

fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Normalizes raw label input into a chain of trimmed, non-empty names.
///
/// # Arguments
/// * `input` - Anything convertible into [LabelInput]
///
/// # Returns
/// * `Ok(Vec<String>)` - The chain, root first; empty for unclassified input
/// * `Err(ValidationError)` - If a segment is blank or has invalid characters
///
/// # Examples
/// ```
/// # use classlabel::parser::normalize;
/// assert_eq!(normalize(" My:\tClass ").unwrap(), vec!["My", "Class"]);
/// assert_eq!(normalize(&["First", " Second "]).unwrap(), vec!["First", "Second"]);
/// assert!(normalize("").unwrap().is_empty());
/// assert!(normalize("Unclassified").unwrap().is_empty());
/// assert!(normalize("My::Class").is_err());
/// ```
pub fn normalize<'a>(input: impl Into<LabelInput<'a>>) -> Result<Vec<String>, ValidationError> {
    let input = input.into();
    match &input {
        LabelInput::Absent => Ok(Vec::new()),
        LabelInput::Text(text) => normalize_text(text, &input),
        LabelInput::Segments(segments) => normalize_segments(segments, &input),
    }
}

/// Validates and trims a single name, e.g. a child name appended to a chain.
///
/// Unlike [normalize], a blank name is an error here and `:` is rejected
/// rather than split.
pub fn normalize_segment(name: &str) -> Result<String, ValidationError> {
    if name.contains(|c: char| is_newline(c) || c == SEPARATOR) {
        return Err(ValidationError::invalid_character(0, &name));
    }
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_segment(0, &name));
    }
    Ok(trimmed.to_string())
}

fn normalize_text(text: &str, input: &LabelInput) -> Result<Vec<String>, ValidationError> {
    if let Some(position) = text.find(is_newline) {
        let segment = text[..position].matches(SEPARATOR).count();
        return Err(ValidationError::invalid_character(segment, input));
    }
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == UNCLASSIFIED_NAME {
        return Ok(Vec::new());
    }
    collect_segments(text.split(SEPARATOR), input)
}

fn normalize_segments(segments: &[&str], input: &LabelInput) -> Result<Vec<String>, ValidationError> {
    if let Some(segment) = segments
        .iter()
        .position(|s| s.contains(|c: char| is_newline(c) || c == SEPARATOR))
    {
        return Err(ValidationError::invalid_character(segment, input));
    }
    // A lone blank name is the same as no name at all
    if segments.len() <= 1 && segments.iter().all(|s| s.trim().is_empty()) {
        return Ok(Vec::new());
    }
    collect_segments(segments.iter().copied(), input)
}

fn collect_segments<'s>(
    parts: impl Iterator<Item = &'s str>,
    input: &LabelInput,
) -> Result<Vec<String>, ValidationError> {
    parts
        .enumerate()
        .map(|(segment, part)| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                Err(ValidationError::empty_segment(segment, input))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

/// Joins a chain for display, e.g. `["Tumor", "1+"]` → `"Tumor: 1+"`.
pub fn join_chain<S: AsRef<str>>(chain: &[S]) -> String {
    let mut joined = String::new();
    for (i, name) in chain.iter().enumerate() {
        if i > 0 {
            joined.push_str(DISPLAY_SEPARATOR);
        }
        joined.push_str(name.as_ref());
    }
    joined
}
