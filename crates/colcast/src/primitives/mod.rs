//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the
//! crate: the dtype taxonomy, the scalar cell-value model, and the shared
//! error types. It has zero internal dependencies within the crate.
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
//! Layer 2: Arrays
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Dtype taxonomy, time units, and time zones.
pub mod dtype;

/// Shared error types.
pub mod errors;

/// Scalar cell-value model.
pub mod scalar;
