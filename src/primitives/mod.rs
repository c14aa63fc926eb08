//! Core compute primitives (Vector, Matrix).
//!
//! These types are the foundation for every operation in the crate. All
//! numeric routines allocate fresh outputs; nothing mutates its input.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
