//! Layer 3: Infer
//!
//! # Purpose
//!
//! This layer provides the pure dtype-inference rules: the promotion
//! lattice that folds observed scalar kinds into the smallest common
//! dtype, and the temporal refinement rules for datetime-like data.
//! Nothing here allocates arrays or mutates input.
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
//! Layer 3: Infer ← You are here
//!   ↓
//! Layer 2: Arrays
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dtype promotion lattice.
pub mod lattice;

/// Temporal refinement rules.
pub mod temporal;
