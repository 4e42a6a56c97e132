//! Layer 4: Cast
//!
//! # Purpose
//!
//! This layer materializes dtype decisions: checked scalar-level numeric
//! conversions, whole-array casting of heterogeneous scalars to a
//! requested dtype, and scalar broadcasting. Everything fails fast with
//! a typed error; nothing wraps or truncates silently.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Cast ← You are here
//!   ↓
//! Layer 3: Infer
//!   ↓
//! Layer 2: Arrays
//!   ↓
//! Layer 1: Primitives
//! ```

/// Whole-array casting and scalar broadcast.
pub mod convert;

/// Checked scalar-level numeric conversions.
pub mod numeric;
