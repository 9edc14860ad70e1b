//! Core numeric primitives (Vector).
//!
//! Feature vectors and probability distributions flowing through the
//! classifier are plain dense vectors; this module provides that type.

mod vector;

pub use vector::Vector;
