//! Classlabel is a library for canonical, hierarchical classification labels.
//!
//! Classifications such as `"Tumor"`, `"Tumor: Positive"` or
//! `"Stroma: 2+"` are used as semantic keys all over an analysis, so each
//! distinct label should exist exactly once in memory and be comparable by
//! identity. Core functionality provided:
//! - Normalization: Turn user input (`"My:\tClass"`, `["My", "Class "]`) into
//!   a validated chain of names, rejecting blank segments and newlines.
//!   See [crate::parser].
//! - Interning: A [LabelStore] hands out one [Label] per distinct chain,
//!   also under concurrent creation from many threads.
//! - Derivation: Append scored suffixes (`1+`, `2+`, `3+`, `Positive`,
//!   `Negative`) that get deterministic default colors.
//! - Colors: Packed RGB/RGBA helpers with clamping, see [crate::color].
//!
//! Limitations:
//! - No persistence; store label names and resolve them again on load
//! - Labels are never removed from a store
//!
//! # Usage patterns
//! Create one [LabelStore] and share it (by reference or in an `Arc`)
//! with everything that creates labels.
//!
//! ## Example
//! ```
//! use classlabel::{KnownSuffix, LabelStore};
//!
//! let store = LabelStore::new();
//! let tumor = store.resolve("Tumor", None)?;
//! let scored = store.derive(&tumor, KnownSuffix::TwoPlus);
//!
//! assert_eq!(scored.to_string(), "Tumor: 2+");
//! assert_eq!(store.resolve("Tumor:2+", None)?, scored);
//! assert!(store.resolve("Tumor::2+", None).is_err());
//! # Ok::<(), classlabel::ValidationError>(())
//! ```
//!
//! ## Example Store Configuration
//! ```
//! use classlabel::{LabelStoreBuilder, StandardLabel};
//!
//! let store = LabelStoreBuilder::new()
//!     .with_capacity(1024)
//!     .with_standard_labels()
//!     .build();
//! let stroma = store.standard(StandardLabel::Stroma);
//! assert_eq!(store.find("Stroma")?, Some(stroma));
//! # Ok::<(), classlabel::ValidationError>(())
//! ```

pub mod color;
pub mod model;
pub mod parser;

pub use crate::color::Color;
pub use crate::model::{
    KnownSuffix, Label, LabelStore, LabelStoreBuilder, ScorePalette, StandardLabel,
};
pub use crate::parser::{LabelInput, ValidationError, ValidationErrorKind};
