//! Validity-masked array storage.
//!
//! ## Purpose
//!
//! This module provides [`MaskedArray`], the storage type behind the
//! masked dtype family. Values and validity are kept in two parallel
//! buffers, so missing data is representable for every element type
//! without sentinel encoding.
//!
//! ## Design notes
//!
//! * **Mask polarity**: `true` marks a missing element, mirroring the
//!   masked-array convention of the source domain.
//! * **Initialized storage**: Masked-out slots hold an arbitrary but
//!   initialized value (the element type's default), never
//!   uninitialized memory.
//! * **Generics**: Storage is generic; the dtype taxonomy pins the
//!   concrete instantiations (`bool`, `i64`, `f64`).
//!
//! ## Invariants
//!
//! * `values.len() == mask.len()` always holds; the constructor rejects
//!   anything else.
//!
//! ## Non-goals
//!
//! * This module does not decide when masked storage is used (see
//!   `infer` and `engine`).
//! * This module does not convert between element types (see `cast`).

// External dependencies
use ndarray::Array1;

// Internal dependencies
use crate::primitives::errors::ConstructError;

// ============================================================================
// MaskedArray
// ============================================================================

/// Paired value/validity storage; `true` in the mask marks a missing slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray<T> {
    values: Array1<T>,
    mask: Array1<bool>,
}

impl<T: Clone> MaskedArray<T> {
    /// Create a masked array from parallel value and mask buffers.
    pub fn new(values: Array1<T>, mask: Array1<bool>) -> Result<Self, ConstructError> {
        if values.len() != mask.len() {
            return Err(ConstructError::MaskLengthMismatch {
                data_len: values.len(),
                mask_len: mask.len(),
            });
        }
        Ok(Self { values, mask })
    }

    /// Create a fully-valid masked array (no missing slots).
    pub fn dense(values: Array1<T>) -> Self {
        let mask = Array1::from_elem(values.len(), false);
        Self { values, mask }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing elements.
    pub fn null_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Value at `i`, or `None` if the slot is masked out.
    pub fn get(&self, i: usize) -> Option<T> {
        if self.mask[i] {
            None
        } else {
            Some(self.values[i].clone())
        }
    }

    /// The underlying value buffer, including masked-out slots.
    #[inline]
    pub fn values(&self) -> &Array1<T> {
        &self.values
    }

    /// The validity mask (`true` = missing).
    #[inline]
    pub fn mask(&self) -> &Array1<bool> {
        &self.mask
    }

    /// Iterate elements as `Option<T>`.
    pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
        self.values
            .iter()
            .zip(self.mask.iter())
            .map(|(v, &m)| if m { None } else { Some(v.clone()) })
    }
}

impl<T: Clone + Default> MaskedArray<T> {
    /// Build from optional values; `None` slots are masked out and hold
    /// the element default.
    pub fn from_options(values: Vec<Option<T>>) -> Self {
        let mask: Array1<bool> = values.iter().map(Option::is_none).collect();
        let values: Array1<T> = values
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        Self { values, mask }
    }
}
