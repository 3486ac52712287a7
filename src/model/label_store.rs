//! Concurrent interning store for classification labels.
//!
//! A [LabelStore] maps every chain it has seen to exactly one [Label]. The
//! store is append-only and lives as long as its owner; typically one store
//! is created at startup and shared by reference (or in an `Arc`) with
//! everything that needs labels.
//!
//! # Concurrency
//! The map is sharded ([DashMap]). Lookups of existing chains take a shard
//! read lock. A missing chain is inserted through the shard's entry lock, so
//! exactly one thread constructs the label and every racing thread gets that
//! same instance back.

use crate::color::Color;
use crate::model::derivation::ScorePalette;
use crate::model::label::Label;
use crate::model::standard::StandardLabel;
use crate::parser::{LabelInput, ValidationError, normalize};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::fmt;
use tracing::{debug, trace};

/// Default number of chains the map is sized for.
const DEFAULT_CAPACITY: usize = 64;

// =#========================================================================#=
// LABEL STORE
// =#========================================================================#=
/// Hands out one canonical [Label] per distinct chain.
///
/// # Example
/// ```
/// use classlabel::model::LabelStore;
///
/// let store = LabelStore::new();
/// let a = store.resolve("My:Class", None)?;
/// let b = store.resolve(" My:\tClass ", None)?;
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "My: Class");
/// assert_eq!(a.parent().unwrap().name(), "My");
/// # Ok::<(), classlabel::parser::ValidationError>(())
/// ```
pub struct LabelStore {
    labels: DashMap<Vec<String>, Label>,
    unclassified: Label,
    palette: ScorePalette,
}

impl LabelStore {
    /// Creates an empty store with the default [ScorePalette].
    ///
    /// Use [LabelStoreBuilder] for more control.
    pub fn new() -> Self {
        LabelStoreBuilder::new().build()
    }

    /// Normalizes `input` and returns its canonical label.
    ///
    /// `color_hint` is only used if the label does not exist yet; the first
    /// color a label is created with is kept for good.
    ///
    /// # Arguments
    /// * `input` - A `:`-separated name, a list of names, or `None`
    /// * `color_hint` - Color for the label if it gets created by this call
    ///
    /// # Returns
    /// * [Label] - The canonical label; unclassified for absent or empty input
    /// * [ValidationError] - If `input` is invalid; nothing is created then
    pub fn resolve<'a>(
        &self,
        input: impl Into<LabelInput<'a>>,
        color_hint: Option<Color>,
    ) -> Result<Label, ValidationError> {
        let chain = normalize(input)?;
        Ok(self.get_or_create(&chain, color_hint))
    }

    /// Looks up the canonical label for `input` without creating it.
    pub fn find<'a>(
        &self,
        input: impl Into<LabelInput<'a>>,
    ) -> Result<Option<Label>, ValidationError> {
        let chain = normalize(input)?;
        if chain.is_empty() {
            return Ok(Some(self.unclassified.clone()));
        }
        Ok(self.labels.get(chain.as_slice()).map(|found| found.value().clone()))
    }

    /// Returns the canonical label for an already normalized chain.
    ///
    /// Every prefix of `chain` is made canonical first, root first, so that
    /// labels sharing a prefix share their ancestors. `color_hint` only
    /// applies to the label for the full chain; ancestors created on the way
    /// get their [palette](ScorePalette) color, if any.
    ///
    /// `chain` must consist of trimmed, non-empty names without `:` or
    /// newlines, as produced by [normalize] or taken from an existing label.
    pub(crate) fn get_or_create(&self, chain: &[String], color_hint: Option<Color>) -> Label {
        let mut parent: Option<Label> = None;
        for depth in 1..=chain.len() {
            let hint = if depth == chain.len() { color_hint } else { None };
            parent = Some(self.get_or_insert(&chain[..depth], parent.as_ref(), hint));
        }
        parent.unwrap_or_else(|| self.unclassified.clone())
    }

    /// Returns the label for `prefix`, constructing it below `parent` if it
    /// is missing.
    fn get_or_insert(&self, prefix: &[String], parent: Option<&Label>, hint: Option<Color>) -> Label {
        if let Some(existing) = self.labels.get(prefix) {
            return existing.value().clone();
        }

        match self.labels.entry(prefix.to_vec()) {
            Entry::Occupied(entry) => {
                trace!(chain = ?prefix, "label created concurrently, using existing");
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                let name = &prefix[prefix.len() - 1];
                let color = hint.or_else(|| self.palette.color_for_name(name));
                let label = Label::new(parent, name, color);
                debug!(label = %label, color = ?color, "created label");
                entry.insert(label.clone());
                label
            }
        }
    }

    /// Returns this store's unclassified label.
    pub fn unclassified(&self) -> &Label {
        &self.unclassified
    }

    /// Returns the palette used for newly created suffix labels.
    pub fn palette(&self) -> &ScorePalette {
        &self.palette
    }

    /// Returns the canonical label for a predefined classification.
    pub fn standard(&self, standard: StandardLabel) -> Label {
        self.get_or_create(&[standard.name().to_string()], Some(standard.color()))
    }

    /// Returns this store's instance for a label with the same chain.
    ///
    /// Useful for labels handed out by a different store. If the chain is new
    /// here, it is created with `label`'s color.
    pub fn canonicalize(&self, label: &Label) -> Label {
        if self.contains(label) {
            return label.clone();
        }
        self.get_or_create(label.chain(), label.color())
    }

    /// Returns `true` if `label` is an instance handed out by this store.
    pub fn contains(&self, label: &Label) -> bool {
        if label.is_unclassified() {
            return *label == self.unclassified;
        }
        self.labels
            .get(label.chain())
            .is_some_and(|found| found.value() == label)
    }

    /// Returns the number of stored labels, not counting unclassified.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no label besides unclassified exists.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns a snapshot of all stored labels, sorted by chain.
    pub fn labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self
            .labels
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        labels.sort_by(|a, b| a.chain().cmp(b.chain()));
        labels
    }
}

impl Default for LabelStore {
    fn default() -> Self {
        LabelStore::new()
    }
}

impl fmt::Display for LabelStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "LabelStore ({} labels):", self.len())?;
        for label in self.labels() {
            match label.color() {
                Some(color) => writeln!(f, "  {label} [{color}]")?,
                None => writeln!(f, "  {label}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LabelStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LabelStore")
            .field("num_labels", &self.len())
            .field("palette", &self.palette)
            .finish()
    }
}

// =#========================================================================#=
// LABEL STORE BUILDER
// =#========================================================================#=
/// Builder for configuring a [LabelStore].
///
/// # Example
/// ```
/// use classlabel::model::{LabelStoreBuilder, ScorePalette, StandardLabel};
///
/// let store = LabelStoreBuilder::new()
///     .with_capacity(256)
///     .with_palette(ScorePalette::default())
///     .with_standard_labels()
///     .build();
/// assert_eq!(store.len(), StandardLabel::ALL.len());
/// ```
#[derive(Debug, Clone)]
pub struct LabelStoreBuilder {
    capacity: usize,
    palette: ScorePalette,
    standard_labels: bool,
}

impl LabelStoreBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        LabelStoreBuilder {
            capacity: DEFAULT_CAPACITY,
            palette: ScorePalette::default(),
            standard_labels: false,
        }
    }

    /// Sets the number of chains the store is initially sized for.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the colors used for newly created suffix labels.
    pub fn with_palette(mut self, palette: ScorePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Creates all [StandardLabel]s when building.
    pub fn with_standard_labels(mut self) -> Self {
        self.standard_labels = true;
        self
    }

    /// Builds the store.
    pub fn build(self) -> LabelStore {
        let store = LabelStore {
            labels: DashMap::with_capacity(self.capacity),
            unclassified: Label::unclassified(),
            palette: self.palette,
        };
        if self.standard_labels {
            for standard in StandardLabel::ALL {
                store.standard(standard);
            }
        }
        debug!(capacity = self.capacity, num_labels = store.len(), "built label store");
        store
    }
}

impl Default for LabelStoreBuilder {
    fn default() -> Self {
        LabelStoreBuilder::new()
    }
}
