use approx::assert_relative_eq;
use log::LevelFilter;
use nalgebra::{dmatrix, dvector, DMatrix, DVector};
use yui_linop::{DiffEqOperator, MatrixOperator, OperatorSum, ScalarOperator, ScaledOperator};
use yui_linop::util::log::init_test_logger;

// (I - h A) u_{n+1} = u_n
fn step(a: &DMatrix<f64>, u: &DVector<f64>, h: f64) -> DVector<f64> {
    let n = a.nrows();
    let w: MatrixOperator = MatrixOperator::new(DMatrix::identity(n, n) - a * h);
    w.ldiv(u).unwrap()
}

#[test]
fn constant_decay() {
    let _ = init_test_logger(LevelFilter::Debug);

    let a: MatrixOperator = MatrixOperator::new(dmatrix![-1.0, 0.0; 0.0, -2.0]);
    let h = 0.01;
    let n = 100;

    // a constant operator can be factorized once.
    let w: MatrixOperator = MatrixOperator::new(DMatrix::identity(2, 2) - a.matrix() * h);
    let f = w.factorize().unwrap();
    assert!(f.is_constant());

    let mut u = dvector![1.0, 1.0];
    for _ in 0..n {
        f.ldiv_mut(&mut u).unwrap();
    }

    let exact = dvector![(-1.0_f64).exp(), (-2.0_f64).exp()];
    assert_relative_eq!(u, exact, epsilon = 1e-2);

    let r = (1.0_f64 / 1.02).powi(100);
    assert_relative_eq!(u[1], r, epsilon = 1e-10);
}

#[test]
fn time_dependent() {
    let _ = init_test_logger(LevelFilter::Debug);

    // u' = -t u, u(0) = 1
    let mut a: MatrixOperator = MatrixOperator::with_update(DMatrix::zeros(1, 1), |a, _, _, t| {
        a[(0, 0)] = -t
    });
    assert!(!a.is_constant());

    let h = 0.001;
    let mut u = dvector![1.0];
    let mut t = 0.0;

    for _ in 0..1000 {
        t += h;
        a.update_coefficients(&u, &(), t);
        u = step(a.matrix(), &u, h);
    }

    assert_relative_eq!(u[0], (-t * t / 2.0_f64).exp(), epsilon = 1e-3);
}

#[test]
fn composed_rhs() {
    let _ = init_test_logger(LevelFilter::Debug);

    // f(u, p, t) = p * t * A u + u
    let coeff: ScalarOperator<f64, DVector<f64>, f64> = ScalarOperator::with_update(0.0, |_, _, p, t| p * t);
    let a: MatrixOperator<DMatrix<f64>, f64> = MatrixOperator::new(dmatrix![0.0, 1.0; -1.0, 0.0]);
    let id: ScalarOperator<f64, DVector<f64>, f64> = ScalarOperator::new(1.0);

    let mut f = OperatorSum::new(ScaledOperator::new(coeff, a), id).unwrap();
    assert!(!f.is_constant());
    assert_eq!(f.shape(), Some((2, 2)));

    let u = dvector![1.0, 2.0];
    let du = f.apply(&u, &0.5, 2.0).unwrap();
    assert_eq!(du, dvector![3.0, 1.0]);

    let mut dv = DVector::zeros(2);
    f.apply_to(&mut dv, &u, &0.5, 2.0).unwrap();
    assert_eq!(dv, du);
}

#[test]
fn sparse_matches_dense() {
    let _ = init_test_logger(LevelFilter::Debug);

    let n = 5;
    let entries = (0..n).flat_map(|i| {
        let mut e = vec![(i, i, 2.0)];
        if i > 0 { e.push((i, i - 1, -1.0)) }
        if i + 1 < n { e.push((i, i + 1, -1.0)) }
        e
    });
    let sp = yui_linop::csc_from_entries((n, n), entries).unwrap();
    let dn = DMatrix::from(&sp);

    let mut s: MatrixOperator<_> = MatrixOperator::new(sp);
    let mut d: MatrixOperator = MatrixOperator::new(dn);

    let u = DVector::from_fn(n, |i, _| (i + 1) as f64);
    assert_eq!(s.apply(&u, &(), 0.0), d.apply(&u, &(), 0.0));

    let x = s.sparse_cholesky().unwrap().ldiv(&u).unwrap();
    let y = d.cholesky().unwrap().ldiv(&u).unwrap();
    assert_relative_eq!(x, y, epsilon = 1e-12);
}
