//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates construction: it validates inputs, unwraps
//! containers, and runs the sanitization pipeline that ties the
//! inference and cast layers together.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Cast
//!   ↓
//! Layer 3: Infer
//!   ↓
//! Layer 2: Arrays
//!   ↓
//! Layer 1: Primitives
//! ```

/// Wrapper extraction and datetime-like re-wrapping.
pub mod extract;

/// The central sanitization pipeline.
pub mod sanitize;

/// Validation utilities.
pub mod validator;
