//! Matriz: matrix validation, rotation, and QR factorization in pure Rust.
//!
//! Matriz implements the linear-algebra core behind a small matrix-operations
//! service: validating untrusted matrix input, rotating matrices 90 degrees,
//! computing a Householder QR decomposition without delegating to an external
//! numerics package, and analyzing the result's orthogonality and
//! triangularity.
//!
//! Every operation is a pure, stateless function over immutable inputs, so
//! the whole crate is safely callable from concurrent callers with no locking.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_rows(&[
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//! ]).unwrap();
//!
//! let qr = householder(&m);
//! let report = analyze(&qr);
//! assert!(report.is_q_orthogonal);
//! assert!(report.is_r_upper_triangular);
//!
//! let rotated = rotate(&m, Direction::Right);
//! assert_eq!(rotated.to_rows(), vec![vec![3.0, 1.0], vec![4.0, 2.0]]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`validate`]: Shape and finiteness validation of untrusted input
//! - [`rotation`]: 90-degree rotation as an exact index permutation
//! - [`decomposition`]: Householder QR factorization
//! - [`analysis`]: Orthogonality / triangularity checks on QR results
//! - [`error`]: Error types with stable reason codes

pub mod analysis;
pub mod decomposition;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod rotation;
pub mod validate;
