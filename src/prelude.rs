//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::analysis::{analyze, QrReport, TOLERANCE};
pub use crate::decomposition::{householder, QrDecomposition};
pub use crate::error::MatrizError;
pub use crate::primitives::{Matrix, Vector};
pub use crate::rotation::{rotate, Direction};
pub use crate::validate;
