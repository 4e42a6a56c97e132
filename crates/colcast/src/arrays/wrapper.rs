//! Higher-level wrappers around canonical arrays.
//!
//! ## Purpose
//!
//! This module defines the wrapper types the extraction step unwraps: a
//! labeled [`Column`] and a key-holding [`IndexArray`]. Construction
//! routines accept these so that data already living in a higher-level
//! container can be fed back in without manual unwrapping.
//!
//! ## Design notes
//!
//! * **Thin**: Wrappers add metadata (a name, index semantics) and
//!   nothing else; all array behavior stays on [`CanonicalArray`].
//! * **Lazy range indexes**: An index over a contiguous range stays a
//!   [`RangeSpec`] until something forces realization.
//!
//! ## Non-goals
//!
//! * This module does not implement indexing, alignment, or selection.

// Internal dependencies
use crate::arrays::canonical::CanonicalArray;
use crate::arrays::range::RangeSpec;

// ============================================================================
// Column
// ============================================================================

/// A named 1-dimensional column over a canonical array.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: Option<String>,
    values: CanonicalArray,
}

impl Column {
    /// Create an unnamed column.
    pub fn new(values: CanonicalArray) -> Self {
        Self { name: None, values }
    }

    /// Create a named column.
    pub fn named(name: impl Into<String>, values: CanonicalArray) -> Self {
        Self {
            name: Some(name.into()),
            values,
        }
    }

    /// Column name, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The backing array.
    #[inline]
    pub fn values(&self) -> &CanonicalArray {
        &self.values
    }

    /// Consume the column, yielding the backing array.
    pub fn into_values(self) -> CanonicalArray {
        self.values
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// IndexArray
// ============================================================================

/// Key storage for a column: a lazy range or materialized values.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexArray {
    /// Contiguous integer keys, kept lazy.
    Range(RangeSpec),

    /// Materialized keys.
    Values(CanonicalArray),
}

impl IndexArray {
    /// Number of keys.
    pub fn len(&self) -> usize {
        match self {
            Self::Range(rng) => rng.len(),
            Self::Values(values) => values.len(),
        }
    }

    /// Whether the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
