//! Core compute primitives (Array, Axis).
//!
//! These types provide the foundation for all statistical reductions.

mod array;

pub use array::{Array, Axis};
