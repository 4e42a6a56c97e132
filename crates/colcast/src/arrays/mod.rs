//! Layer 2: Arrays
//!
//! # Purpose
//!
//! This layer provides the array representations: the canonical output
//! type, its masked and temporal extension storage, the raw input
//! buffers, lazy ranges, and the wrapper types the extraction step
//! unwraps.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Cast
//!   ↓
//! Layer 3: Infer
//!   ↓
//! Layer 2: Arrays ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Canonical output arrays.
pub mod canonical;

/// Unified input model and raw buffers.
pub mod input;

/// Validity-masked storage.
pub mod masked;

/// Lazy integer ranges and realization.
pub mod range;

/// Temporal extension arrays.
pub mod temporal;

/// Column and index wrappers.
pub mod wrapper;
