//! End-to-end pipeline tests: untrusted rows -> validation -> rotation or
//! QR factorization -> property analysis.

use matriz::prelude::*;

#[test]
fn qr_pipeline_from_untrusted_rows() {
    let raw = vec![vec![1.0, 2.0], vec![3.0, 4.0]];

    let m = Matrix::from_rows(&raw).expect("input is rectangular and finite");
    let qr = householder(&m);
    let report = analyze(&qr);

    assert_eq!(report.q_dimensions, "2x2");
    assert_eq!(report.r_dimensions, "2x2");
    assert!(report.is_q_orthogonal);
    assert!(report.is_r_upper_triangular);

    let product = qr.reconstruct();
    for i in 0..2 {
        for j in 0..2 {
            assert!((product.get(i, j) - m.get(i, j)).abs() <= TOLERANCE);
        }
    }
}

#[test]
fn rotation_pipeline_matches_wire_scenario() {
    let raw = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let m = Matrix::from_rows(&raw).expect("input is rectangular and finite");

    let right = rotate(&m, Direction::Right);
    assert_eq!(
        right.to_rows(),
        vec![vec![4.0, 1.0], vec![5.0, 2.0], vec![6.0, 3.0]]
    );

    let left = rotate(&m, Direction::Left);
    assert_eq!(
        left.to_rows(),
        vec![vec![3.0, 6.0], vec![2.0, 5.0], vec![1.0, 4.0]]
    );
}

#[test]
fn validation_failures_carry_reason_codes() {
    let empty: Vec<Vec<f64>> = vec![];
    assert_eq!(Matrix::from_rows(&empty).unwrap_err().code(), "empty");

    let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    assert_eq!(
        Matrix::from_rows(&ragged).unwrap_err().code(),
        "irregular-rows"
    );

    let non_finite = vec![vec![1.0, f64::NAN]];
    assert_eq!(
        Matrix::from_rows(&non_finite).unwrap_err().code(),
        "non-finite-value"
    );

    assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).is_ok());
}

#[test]
fn degenerate_single_row_factorizes() {
    let m = Matrix::from_rows(&[vec![5.0, 6.0, 7.0]]).expect("valid single-row input");
    let qr = householder(&m);

    assert_eq!(qr.q().shape(), (1, 1));
    assert!((qr.q().get(0, 0).abs() - 1.0).abs() <= TOLERANCE);

    let product = qr.reconstruct();
    for j in 0..3 {
        assert!((product.get(0, j) - m.get(0, j)).abs() <= TOLERANCE);
    }
}

#[test]
fn direction_parsing_is_the_only_bad_direction_path() {
    let err = "diagonal".parse::<Direction>().unwrap_err();
    assert_eq!(err.code(), "bad-direction");
    assert!(err.to_string().contains("'left' or 'right'"));
}
