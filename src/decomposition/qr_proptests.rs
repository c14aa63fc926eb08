use super::*;
use crate::analysis::{is_orthogonal, is_upper_triangular, TOLERANCE};
use crate::rotation::{rotate, Direction};
use proptest::prelude::*;

/// Strategy: a rectangular matrix with 1..=6 rows and columns and moderate
/// finite entries. Entry magnitude is bounded so accumulated rounding stays
/// well inside TOLERANCE.
fn arb_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1_usize..=6, 1_usize..=6)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(-100.0_f64..100.0, rows * cols)
                .prop_map(move |data| {
                    Matrix::from_vec(rows, cols, data)
                        .expect("strategy generates rows*cols elements")
                })
        })
}

proptest! {
    /// Q*R must reproduce the input elementwise within TOLERANCE.
    #[test]
    fn prop_qr_reconstructs_input(m in arb_matrix()) {
        let qr = householder(&m);
        let product = qr.reconstruct();
        let (rows, cols) = m.shape();
        for i in 0..rows {
            for j in 0..cols {
                prop_assert!(
                    (product.get(i, j) - m.get(i, j)).abs() <= TOLERANCE,
                    "Q*R[{}][{}] = {} differs from {}",
                    i, j, product.get(i, j), m.get(i, j)
                );
            }
        }
    }

    /// Q is always square RxR and orthogonal within TOLERANCE.
    #[test]
    fn prop_q_is_orthogonal(m in arb_matrix()) {
        let qr = householder(&m);
        prop_assert_eq!(qr.q().shape(), (m.n_rows(), m.n_rows()));
        prop_assert!(is_orthogonal(qr.q()));
    }

    /// R is always RxC and zero below the main diagonal.
    #[test]
    fn prop_r_is_upper_triangular(m in arb_matrix()) {
        let qr = householder(&m);
        prop_assert_eq!(qr.r().shape(), m.shape());
        prop_assert!(is_upper_triangular(qr.r()));
    }

    /// Rotating right then left (and left then right) is the exact identity.
    #[test]
    fn prop_rotation_round_trip(m in arb_matrix()) {
        prop_assert_eq!(&rotate(&rotate(&m, Direction::Right), Direction::Left), &m);
        prop_assert_eq!(&rotate(&rotate(&m, Direction::Left), Direction::Right), &m);
    }

    /// Four rotations in the same direction return to the original.
    #[test]
    fn prop_four_rotations_identity(m in arb_matrix()) {
        let mut out = m.clone();
        for _ in 0..4 {
            out = rotate(&out, Direction::Right);
        }
        prop_assert_eq!(&out, &m);
    }
}
