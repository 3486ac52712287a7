//! Data model for canonical classification labels.
//!
//! # Label representation
//! A [Label] is a handle to one node of a classification hierarchy. Each
//! node knows its full chain of names (root first), its parent and an
//! optional [Color](crate::color::Color). Labels are created only by a
//! [LabelStore], which guarantees one node per distinct chain.
//!
//! # Creating labels
//! - [LabelStore::resolve]: from a `:`-separated name or a list of names
//! - [LabelStore::derive]: append a [KnownSuffix] such as `1+` or `Positive`
//! - [LabelStore::standard]: one of the predefined [StandardLabel]s
//!
//! Configure a store with [LabelStoreBuilder].

pub mod derivation;
pub mod label;
pub mod label_store;
pub mod standard;

pub use derivation::{KnownSuffix, ScorePalette};
pub use label::Label;
pub use label_store::{LabelStore, LabelStoreBuilder};
pub use standard::StandardLabel;
