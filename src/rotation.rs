//! 90-degree matrix rotation.
//!
//! Rotation is a pure index permutation: it moves values, never recomputes
//! them, so results are exact with no floating-point rounding.

use crate::error::MatrizError;
use crate::primitives::Matrix;
use std::fmt;
use std::str::FromStr;

/// Rotation direction.
///
/// Callers that accept a free-form string (e.g. a JSON field) parse it with
/// [`FromStr`] before reaching the rotation routine; any defaulting when the
/// string is absent is the caller's concern, not this module's.
///
/// # Examples
///
/// ```
/// use matriz::rotation::Direction;
///
/// let d: Direction = "left".parse().expect("valid direction");
/// assert_eq!(d, Direction::Left);
/// assert!("up".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl Direction {
    /// Canonical string form ("left" / "right").
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MatrizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(MatrizError::BadDirection {
                value: other.to_string(),
            }),
        }
    }
}

/// Rotates a matrix 90 degrees in the given direction.
///
/// An RxC input produces a CxR output in a fresh allocation:
///
/// - right (clockwise): `out[j][R-1-i] = in[i][j]`
/// - left (counter-clockwise): `out[C-1-j][i] = in[i][j]`
#[must_use]
pub fn rotate(matrix: &Matrix<f64>, direction: Direction) -> Matrix<f64> {
    debug_assert!(
        matrix.as_slice().iter().all(|v| v.is_finite()),
        "rotate requires a validated matrix"
    );

    let (rows, cols) = matrix.shape();
    let mut rotated = Matrix::zeros(cols, rows);

    match direction {
        Direction::Right => {
            for i in 0..rows {
                for j in 0..cols {
                    rotated.set(j, rows - 1 - i, matrix.get(i, j));
                }
            }
        }
        Direction::Left => {
            for i in 0..rows {
                for j in 0..cols {
                    rotated.set(cols - 1 - j, i, matrix.get(i, j));
                }
            }
        }
    }

    rotated
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
