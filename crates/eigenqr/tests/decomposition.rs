//! Integration tests for the Gram-Schmidt QR decomposition.
//!
//! Tests verify:
//! - Reconstruction: Q @ R ≈ A
//! - Orthogonality: Q^T @ Q ≈ I
//! - R is upper triangular
//! - Zero-norm columns are skipped without dividing by zero

use eigenqr::decomposition::{decompose, decompose_into};
use eigenqr::math::{multiply, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Helper Functions
// ============================================================================

/// Random matrix with a dominant diagonal so it stays well conditioned.
fn random_matrix(n: usize, rng: &mut StdRng) -> Matrix<f64> {
    let mut m = Matrix::allocate(n, n).unwrap();
    for i in 0..n {
        for j in 0..n {
            m[(i, j)] = rng.gen_range(-1.0..1.0);
        }
        m[(i, i)] += n as f64;
    }
    m
}

fn assert_allclose(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    for (i, (x, y)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
        assert!(
            (x - y).abs() <= tol,
            "{}: element {} differs: {} vs {}",
            msg,
            i,
            x,
            y
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn qr_reconstructs_random_matrices() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [1, 2, 3, 5, 8] {
        let a = random_matrix(n, &mut rng);
        let qr = decompose(&a).unwrap();
        let product = multiply(&qr.q, &qr.r).unwrap();
        assert_allclose(&product, &a, 1e-10, &format!("n={}", n));
    }
}

#[test]
fn q_is_orthogonal() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in [2, 4, 6] {
        let a = random_matrix(n, &mut rng);
        let qr = decompose(&a).unwrap();
        let qtq = multiply(&qr.q.transpose(), &qr.q).unwrap();
        let id = Matrix::identity(n).unwrap();
        assert_allclose(&qtq, &id, 1e-8, &format!("Q^T Q, n={}", n));
    }
}

#[test]
fn r_is_upper_triangular_with_nonnegative_diagonal() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_matrix(5, &mut rng);
    let qr = decompose(&a).unwrap();
    for i in 0..5 {
        assert!(qr.r[(i, i)] >= 0.0);
        for j in 0..i {
            assert_eq!(qr.r[(i, j)], 0.0, "R[{}, {}] below diagonal", i, j);
        }
    }
}

#[test]
fn identity_decomposes_to_identity() {
    let id: Matrix<f64> = Matrix::identity(4).unwrap();
    let qr = decompose(&id).unwrap();
    assert_eq!(qr.q, id);
    assert_eq!(qr.r, id);
}

#[test]
fn known_two_by_two() {
    let a: Matrix<f64> = Matrix::from_shape_vec((2, 2), vec![3.0, 1.0, 4.0, 2.0]).unwrap();
    let qr = decompose(&a).unwrap();
    // First column (3, 4) has norm 5.
    assert!((qr.r[(0, 0)] - 5.0).abs() < 1e-15);
    assert!((qr.q[(0, 0)] - 0.6).abs() < 1e-15);
    assert!((qr.q[(1, 0)] - 0.8).abs() < 1e-15);
    // (0.6, 0.8) . (1, 2) = 2.2
    assert!((qr.r[(0, 1)] - 2.2).abs() < 1e-14);
    assert!((qr.r[(1, 1)] - 0.4).abs() < 1e-14);
}

#[test]
fn zero_column_is_skipped() {
    let a: Matrix<f64> = Matrix::from_shape_vec((2, 2), vec![0.0, 1.0, 0.0, 2.0]).unwrap();
    let qr = decompose(&a).unwrap();

    assert_eq!(qr.r[(0, 0)], 0.0);
    assert_eq!(qr.r[(0, 1)], 0.0);
    assert_eq!(qr.q[(0, 0)], 0.0);
    assert_eq!(qr.q[(1, 0)], 0.0);
    assert!(qr.q.as_slice().iter().all(|v| v.is_finite()));

    let norm = 5.0f64.sqrt();
    assert!((qr.r[(1, 1)] - norm).abs() < 1e-15);
    let product = multiply(&qr.q, &qr.r).unwrap();
    assert_allclose(&product, &a, 1e-14, "zero column reconstruction");
}

#[test]
fn all_zero_matrix_stays_zero() {
    let a: Matrix<f64> = Matrix::allocate(3, 3).unwrap();
    let qr = decompose(&a).unwrap();
    assert!(qr.q.as_slice().iter().all(|&v| v == 0.0));
    assert!(qr.r.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn decompose_into_reuses_buffers() {
    let mut rng = StdRng::seed_from_u64(21);
    let a = random_matrix(4, &mut rng);
    let mut q = Matrix::allocate(4, 4).unwrap();
    let mut r = Matrix::allocate(4, 4).unwrap();

    decompose_into(&a, &mut q, &mut r);
    let first = (q.clone(), r.clone());
    decompose_into(&a, &mut q, &mut r);
    assert_eq!(q, first.0);
    assert_eq!(r, first.1);
}

#[test]
fn single_precision_is_supported() {
    let a = Matrix::from_shape_vec((2, 2), vec![2.0f32, 1.0, 1.0, 3.0]).unwrap();
    let qr = decompose(&a).unwrap();
    let product = multiply(&qr.q, &qr.r).unwrap();
    for (x, y) in product.as_slice().iter().zip(a.as_slice()) {
        assert!((x - y).abs() < 1e-5);
    }
}
