//! Label key normalization: raw names in, validated chains out.
pub mod label_input;
pub mod normalize;
pub mod validation_error;

pub use label_input::LabelInput;
pub use normalize::{UNCLASSIFIED_NAME, join_chain, normalize, normalize_segment};
pub use validation_error::{ValidationError, ValidationErrorKind};
