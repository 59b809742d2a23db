use log::debug;
use nalgebra::{ComplexField, DMatrix, DVector, Dyn, RealField};
use nalgebra::linalg::{Cholesky, ColPivQR, LU, PermutationSequence, QR, SVD, UDU};
use crate::OpError;
use crate::err::ensure;
use super::{check_hermitian, check_square, FactType, Factorization};
use super::triang::{solve_triangular, tr_solve_triangular, TriangularType::{Lower, Upper}};

pub struct LuFact<T>
where T: ComplexField {
    lu: LU<T, Dyn, Dyn>,
    n: usize
}

impl<T> LuFact<T>
where T: ComplexField {
    pub fn new(a: DMatrix<T>) -> Result<Self, OpError> {
        check_square(&a)?;
        debug!("LU: {:?}", a.shape());

        let n = a.nrows();
        let lu = LU::new(a);
        ensure!(lu.is_invertible(), OpError::Singular(FactType::Lu));

        Ok(Self { lu, n })
    }
}

impl<T> Factorization<T> for LuFact<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType {
        FactType::Lu
    }

    fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        let mut x = b.clone();
        ensure!(self.lu.solve_mut(&mut x), OpError::Singular(FactType::Lu));
        Ok(x)
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        let mut a = self.lu.l() * self.lu.u();
        self.lu.p().inv_permute_rows(&mut a);
        Ok(a)
    }
}

// Solves in the least squares sense when the matrix is tall.
// With column pivoting, `A P = Q R` and the diagonal of `R`
// is non-increasing in modulus.
pub struct QrFact<T>
where T: ComplexField {
    q: DMatrix<T>,
    r: DMatrix<T>,
    p: Option<PermutationSequence<Dyn>>
}

impl<T> QrFact<T>
where T: ComplexField {
    pub fn new(a: DMatrix<T>) -> Result<Self, OpError> {
        debug!("QR: {:?}", a.shape());

        let qr = QR::new(a);
        let (q, r) = qr.unpack();
        Ok(Self { q, r, p: None })
    }

    pub fn new_pivoted(a: DMatrix<T>) -> Result<Self, OpError> {
        debug!("QR (column pivoted): {:?}", a.shape());

        let qr = ColPivQR::new(a);
        let (q, r, p) = qr.unpack();
        Ok(Self { q, r, p: Some(p) })
    }

    pub fn is_pivoted(&self) -> bool {
        self.p.is_some()
    }

    pub fn r(&self) -> &DMatrix<T> {
        &self.r
    }
}

impl<T> Factorization<T> for QrFact<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType {
        FactType::Qr
    }

    fn shape(&self) -> (usize, usize) {
        (self.q.nrows(), self.r.ncols())
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        let (m, n) = self.shape();
        ensure!(m >= n, OpError::unsupported("solving an underdetermined system", "QR"));

        let qtb = self.q.adjoint() * b;
        let Some(mut x) = solve_triangular(Upper, &self.r, &qtb) else {
            return Err(OpError::Singular(FactType::Qr))
        };
        if let Some(p) = &self.p {
            p.inv_permute_rows(&mut x);
        }
        Ok(x)
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        let mut a = &self.q * &self.r;
        if let Some(p) = &self.p {
            p.inv_permute_columns(&mut a);
        }
        Ok(a)
    }
}

pub struct CholeskyFact<T>
where T: ComplexField {
    chol: Cholesky<T, Dyn>
}

impl<T> CholeskyFact<T>
where T: ComplexField {
    pub fn new(a: DMatrix<T>) -> Result<Self, OpError> {
        check_square(&a)?;
        check_hermitian(FactType::Cholesky, &a)?;
        debug!("Cholesky: {:?}", a.shape());

        let Some(chol) = Cholesky::new(a) else {
            return Err(OpError::failed(FactType::Cholesky, "matrix is not positive definite"))
        };
        Ok(Self { chol })
    }
}

impl<T> Factorization<T> for CholeskyFact<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType {
        FactType::Cholesky
    }

    fn shape(&self) -> (usize, usize) {
        self.chol.l_dirty().shape()
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        let mut x = b.clone();
        self.chol.solve_mut(&mut x);
        Ok(x)
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        let l = self.chol.l();
        Ok(&l * l.adjoint())
    }
}

// A = U D U^T, U upper triangular, D diagonal.
pub struct LdltFact<T>
where T: ComplexField {
    u: DMatrix<T>,
    d: DVector<T>
}

impl<T> LdltFact<T>
where T: RealField {
    pub fn new(a: DMatrix<T>) -> Result<Self, OpError> {
        check_square(&a)?;
        check_hermitian(FactType::Ldlt, &a)?;
        ensure!(!a.is_empty(), OpError::failed(FactType::Ldlt, "matrix is empty"));
        debug!("LDLT: {:?}", a.shape());

        let Some(udu) = UDU::new(a) else {
            return Err(OpError::Singular(FactType::Ldlt))
        };
        Ok(Self { u: udu.u, d: udu.d })
    }
}

impl<T> LdltFact<T>
where T: ComplexField {
    pub fn d(&self) -> &DVector<T> {
        &self.d
    }
}

impl<T> Factorization<T> for LdltFact<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType {
        FactType::Ldlt
    }

    fn shape(&self) -> (usize, usize) {
        self.u.shape()
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        ensure!(self.d.iter().all(|d| !d.is_zero()), OpError::Singular(FactType::Ldlt));

        let Some(mut z) = solve_triangular(Upper, &self.u, b) else {
            return Err(OpError::Singular(FactType::Ldlt))
        };
        for (i, d) in self.d.iter().enumerate() {
            z.row_mut(i).apply(|x| *x /= d.clone());
        }
        tr_solve_triangular(Upper, &self.u, &z).ok_or(OpError::Singular(FactType::Ldlt))
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        let d = DMatrix::from_diagonal(&self.d);
        Ok(&self.u * d * self.u.transpose())
    }
}

// P A P^T = L D L^*, L unit lower triangular and D block diagonal
// with 1x1 and 2x2 blocks. Pivots are chosen by the Bunch-Kaufman
// rule, so indefinite matrices need no positive pivots.
pub struct BunchKaufmanFact<T>
where T: ComplexField {
    l: DMatrix<T>,
    d: DMatrix<T>,
    blocks: Vec<(usize, usize)>,
    perm: Vec<usize>
}

impl<T> BunchKaufmanFact<T>
where T: ComplexField {
    pub fn new(a: DMatrix<T>) -> Result<Self, OpError> {
        check_square(&a)?;
        check_hermitian(FactType::BunchKaufman, &a)?;
        debug!("Bunch-Kaufman: {:?}", a.shape());

        let n = a.nrows();
        let alpha: T::RealField = nalgebra::convert((1.0 + 17f64.sqrt()) / 8.0);
        let zero = nalgebra::zero::<T::RealField>();

        let mut a = a;
        let mut l = DMatrix::identity(n, n);
        let mut d = DMatrix::zeros(n, n);
        let mut blocks = vec![];
        let mut perm: Vec<usize> = (0..n).collect();

        let mut k = 0;
        while k < n {
            let akk = a[(k, k)].clone().modulus();
            let (r, colmax) = max_modulus(&a, k, k + 1..n).unwrap_or((k, zero.clone()));
            ensure!(akk > zero || colmax > zero, OpError::Singular(FactType::BunchKaufman));

            // (row to bring to the front, block size)
            let (p, s) = if akk >= alpha.clone() * colmax.clone() {
                (k, 1)
            } else {
                // |a[r, j]| = |a[j, r]|, so the row maximum is read from column r.
                let rowmax = max_modulus(&a, r, (k..n).filter(|&i| i != r)).map(|(_, v)| v).unwrap_or(zero.clone());
                if akk.clone() * rowmax.clone() >= alpha.clone() * colmax.clone() * colmax {
                    (k, 1)
                } else if a[(r, r)].clone().modulus() >= alpha.clone() * rowmax {
                    (r, 1)
                } else {
                    (r, 2)
                }
            };

            let q = k + s - 1;
            if p != q {
                a.swap_rows(p, q);
                a.swap_columns(p, q);
                for j in 0..k {
                    l.swap((p, j), (q, j));
                }
                perm.swap(p, q);
            }

            let e = a.view_range(k..k + s, k..k + s).into_owned();
            let Some(e_inv) = e.clone().try_inverse() else {
                return Err(OpError::Singular(FactType::BunchKaufman))
            };

            let c = a.view_range(k + s.., k..k + s).into_owned();
            let lk = &c * e_inv;
            let update = &lk * c.adjoint();

            let mut rest = a.view_range_mut(k + s.., k + s..);
            rest -= update;

            l.view_range_mut(k + s.., k..k + s).copy_from(&lk);
            d.view_range_mut(k..k + s, k..k + s).copy_from(&e);
            blocks.push((k, s));

            k += s;
        }

        Ok(Self { l, d, blocks, perm })
    }

    pub fn l(&self) -> &DMatrix<T> {
        &self.l
    }

    pub fn d(&self) -> &DMatrix<T> {
        &self.d
    }

    // (first index, size) of each diagonal block of `D`.
    pub fn blocks(&self) -> &[(usize, usize)] {
        &self.blocks
    }

    pub fn perm(&self) -> &[usize] {
        &self.perm
    }
}

// the entry of largest modulus in column `j` among `rows`.
fn max_modulus<T, I>(a: &DMatrix<T>, j: usize, rows: I) -> Option<(usize, T::RealField)>
where T: ComplexField, I: Iterator<Item = usize> {
    let mut max: Option<(usize, T::RealField)> = None;
    for i in rows {
        let v = a[(i, j)].clone().modulus();
        if max.as_ref().map_or(true, |(_, w)| v > *w) {
            max = Some((i, v));
        }
    }
    max
}

impl<T> Factorization<T> for BunchKaufmanFact<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType {
        FactType::BunchKaufman
    }

    fn shape(&self) -> (usize, usize) {
        self.l.shape()
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        let n = self.perm.len();
        let y = DMatrix::from_fn(n, b.ncols(), |i, j| b[(self.perm[i], j)].clone());

        let Some(mut z) = solve_triangular(Lower, &self.l, &y) else {
            return Err(OpError::Singular(FactType::BunchKaufman))
        };

        for &(k, s) in &self.blocks {
            let Some(e_inv) = self.d.view_range(k..k + s, k..k + s).into_owned().try_inverse() else {
                return Err(OpError::Singular(FactType::BunchKaufman))
            };
            let w = e_inv * z.rows(k, s);
            z.rows_mut(k, s).copy_from(&w);
        }

        let Some(v) = solve_triangular(Upper, &self.l.adjoint(), &z) else {
            return Err(OpError::Singular(FactType::BunchKaufman))
        };

        let mut x = DMatrix::zeros(n, b.ncols());
        for (i, &p) in self.perm.iter().enumerate() {
            x.row_mut(p).copy_from(&v.row(i));
        }
        Ok(x)
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        let b = &self.l * &self.d * self.l.adjoint();
        let n = self.perm.len();

        let mut a = DMatrix::zeros(n, n);
        for (i, &pi) in self.perm.iter().enumerate() {
            for (j, &pj) in self.perm.iter().enumerate() {
                a[(pi, pj)] = b[(i, j)].clone();
            }
        }
        Ok(a)
    }
}

// A = L Q, obtained from the QR decomposition of A^*.
// Solves with the minimum norm solution when the matrix is wide.
pub struct LqFact<T>
where T: ComplexField {
    l: DMatrix<T>,
    q: DMatrix<T>
}

impl<T> LqFact<T>
where T: ComplexField {
    pub fn new(a: DMatrix<T>) -> Result<Self, OpError> {
        debug!("LQ: {:?}", a.shape());

        let qr = QR::new(a.adjoint());
        let (q, r) = qr.unpack();
        Ok(Self { l: r.adjoint(), q: q.adjoint() })
    }
}

impl<T> Factorization<T> for LqFact<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType {
        FactType::Lq
    }

    fn shape(&self) -> (usize, usize) {
        (self.l.nrows(), self.q.ncols())
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        let (m, n) = self.shape();
        ensure!(m <= n, OpError::unsupported("solving an overdetermined system", "LQ"));

        let Some(y) = solve_triangular(Lower, &self.l, b) else {
            return Err(OpError::Singular(FactType::Lq))
        };
        Ok(self.q.adjoint() * y)
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        Ok(&self.l * &self.q)
    }
}

pub struct SvdFact<T>
where T: ComplexField {
    svd: SVD<T, Dyn, Dyn>,
    eps: T::RealField
}

impl<T> SvdFact<T>
where T: ComplexField {
    // singular values below `eps` are treated as zero when solving.
    pub fn new(a: DMatrix<T>, eps: T::RealField) -> Result<Self, OpError> {
        ensure!(!a.is_empty(), OpError::failed(FactType::Svd, "matrix is empty"));
        debug!("SVD: {:?}", a.shape());

        let svd = SVD::new(a, true, true);
        Ok(Self { svd, eps })
    }

    pub fn default_eps() -> T::RealField {
        nalgebra::convert(1.0e-12)
    }

    pub fn singular_values(&self) -> &DVector<T::RealField> {
        &self.svd.singular_values
    }
}

impl<T> Factorization<T> for SvdFact<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType {
        FactType::Svd
    }

    fn shape(&self) -> (usize, usize) {
        let m = self.svd.u.as_ref().map(|u| u.nrows()).unwrap_or(0);
        let n = self.svd.v_t.as_ref().map(|v_t| v_t.ncols()).unwrap_or(0);
        (m, n)
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        self.svd.solve(b, self.eps.clone()).map_err(|e|
            OpError::failed(FactType::Svd, e)
        )
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        self.svd.clone().recompose().map_err(|e|
            OpError::failed(FactType::Svd, e)
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, Complex};
    use super::*;

    fn a() -> DMatrix<f64> {
        dmatrix![
            4.0, -1.0,  0.0;
           -1.0,  4.0, -1.0;
            0.0, -1.0,  4.0
        ]
    }

    fn b() -> DMatrix<f64> {
        dmatrix![1.0; 2.0; 3.0]
    }

    fn check<F>(a: &DMatrix<f64>, f: &F)
    where F: Factorization<f64> {
        assert_eq!(f.shape(), a.shape());
        assert_relative_eq!(f.recompose().unwrap(), *a, epsilon = 1e-10);

        let x = f.solve(&b()).unwrap();
        assert_relative_eq!(a * x, b(), epsilon = 1e-10);
    }

    #[test]
    fn lu() {
        let a = dmatrix![1.0, 2.0, 0.0; 3.0, 1.0, 1.0; 0.0, 2.0, 5.0];
        let f = LuFact::new(a.clone()).unwrap();
        assert_eq!(f.fact_type(), FactType::Lu);
        check(&a, &f);
    }

    #[test]
    fn lu_singular() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        assert_eq!(LuFact::new(a).err(), Some(OpError::Singular(FactType::Lu)));
    }

    #[test]
    fn lu_not_square() {
        let a = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
        assert_eq!(LuFact::new(a).err(), Some(OpError::NotSquare((2, 3))));
    }

    #[test]
    fn qr() {
        let f = QrFact::new(a()).unwrap();
        check(&a(), &f);
    }

    #[test]
    fn qr_least_squares() {
        // fit y = c0 + c1 x through (0, 1), (1, 3), (2, 5).
        let a = dmatrix![1.0, 0.0; 1.0, 1.0; 1.0, 2.0];
        let y = dmatrix![1.0; 3.0; 5.0];
        let f = QrFact::new(a.clone()).unwrap();

        assert_eq!(f.shape(), (3, 2));
        assert_relative_eq!(f.recompose().unwrap(), a, epsilon = 1e-12);

        let c = f.solve(&y).unwrap();
        assert_relative_eq!(c, dmatrix![1.0; 2.0], epsilon = 1e-12);
    }

    #[test]
    fn qr_pivoted() {
        let f = QrFact::new_pivoted(a()).unwrap();
        assert!(f.is_pivoted());
        check(&a(), &f);
        assert!(!QrFact::new(a()).unwrap().is_pivoted());
    }

    #[test]
    fn qr_pivoted_order() {
        let a = dmatrix![
            1.0, 0.0, 0.0;
            0.0, 3.0, 0.0;
            0.0, 0.0, 2.0
        ];
        let f = QrFact::new_pivoted(a.clone()).unwrap();
        let d: Vec<f64> = f.r().diagonal().iter().map(|x| x.abs()).collect();
        assert_relative_eq!(d[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(d[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(d[2], 1.0, epsilon = 1e-12);
        check(&a, &f);
    }

    #[test]
    fn qr_pivoted_least_squares() {
        let a = dmatrix![1.0, 0.0; 1.0, 1.0; 1.0, 2.0];
        let y = dmatrix![1.0; 3.0; 5.0];
        let f = QrFact::new_pivoted(a.clone()).unwrap();

        assert_eq!(f.shape(), (3, 2));
        assert_relative_eq!(f.recompose().unwrap(), a, epsilon = 1e-12);

        let c = f.solve(&y).unwrap();
        assert_relative_eq!(c, dmatrix![1.0; 2.0], epsilon = 1e-12);
    }

    #[test]
    fn cholesky() {
        let f = CholeskyFact::new(a()).unwrap();
        check(&a(), &f);
    }

    #[test]
    fn cholesky_not_posdef() {
        let a = dmatrix![1.0, 2.0; 2.0, 1.0];
        let e = CholeskyFact::new(a).err().unwrap();
        assert!(matches!(e, OpError::Factorization { kind: FactType::Cholesky, .. }));
    }

    #[test]
    fn cholesky_not_hermitian() {
        let a = dmatrix![2.0, 1.0; 0.0, 2.0];
        let e = CholeskyFact::new(a).err().unwrap();
        assert_eq!(e, OpError::failed(FactType::Cholesky, "matrix is not hermitian"));
    }

    #[test]
    fn cholesky_complex() {
        let i = Complex::new(0.0_f64, 1.0);
        let one = Complex::new(1.0_f64, 0.0);
        let a = dmatrix![one * 2.0, i; -i, one * 2.0];
        let f = CholeskyFact::new(a.clone()).unwrap();
        assert!((f.recompose().unwrap() - &a).norm() < 1e-12);
    }

    #[test]
    fn ldlt() {
        let f = LdltFact::new(a()).unwrap();
        check(&a(), &f);
    }

    #[test]
    fn ldlt_indefinite() {
        let a = dmatrix![1.0, 2.0; 2.0, 1.0];
        let f = LdltFact::new(a.clone()).unwrap();
        assert!(f.d().iter().any(|&d| d < 0.0));
        check_2x2(&a, &f);
    }

    fn check_2x2<F>(a: &DMatrix<f64>, f: &F)
    where F: Factorization<f64> {
        assert_relative_eq!(f.recompose().unwrap(), *a, epsilon = 1e-12);
        let b = dmatrix![3.0; 3.0];
        let x = f.solve(&b).unwrap();
        assert_relative_eq!(a * x, b, epsilon = 1e-12);
    }

    #[test]
    fn bunch_kaufman() {
        let a = dmatrix![1.0, 2.0; 2.0, 1.0];
        let f = BunchKaufmanFact::new(a.clone()).unwrap();
        assert_eq!(f.fact_type(), FactType::BunchKaufman);
        assert_eq!(f.blocks(), &[(0, 2)]);
        check_2x2(&a, &f);
    }

    #[test]
    fn bunch_kaufman_swap() {
        // the larger diagonal entry is moved to the front.
        let a = dmatrix![1.0, 4.0; 4.0, 10.0];
        let f = BunchKaufmanFact::new(a.clone()).unwrap();
        assert_eq!(f.blocks(), &[(0, 1), (1, 1)]);
        assert_eq!(f.perm(), &[1, 0]);
        assert_relative_eq!(f.d()[(0, 0)], 10.0);
        assert_relative_eq!(f.d()[(1, 1)], -0.6, epsilon = 1e-12);
        check_2x2(&a, &f);
    }

    #[test]
    fn bunch_kaufman_zero_diagonal() {
        let a = dmatrix![
            0.0, 1.0, 2.0;
            1.0, 0.0, 3.0;
            2.0, 3.0, 0.0
        ];
        let f = BunchKaufmanFact::new(a.clone()).unwrap();
        assert_eq!(f.blocks(), &[(0, 2), (2, 1)]);
        assert_eq!(f.perm(), &[0, 2, 1]);

        let l = f.l();
        for i in 0..3 {
            assert_eq!(l[(i, i)], 1.0);
            for j in i + 1..3 {
                assert_eq!(l[(i, j)], 0.0);
            }
        }
        assert_relative_eq!(l[(2, 0)], 1.5, epsilon = 1e-12);
        assert_relative_eq!(l[(2, 1)], 0.5, epsilon = 1e-12);
        assert_relative_eq!(f.d()[(2, 2)], -3.0, epsilon = 1e-12);

        check(&a, &f);
    }

    #[test]
    fn bunch_kaufman_singular() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        assert_eq!(BunchKaufmanFact::new(a).err(), Some(OpError::Singular(FactType::BunchKaufman)));
    }

    #[test]
    fn bunch_kaufman_complex() {
        let i = Complex::new(0.0_f64, 1.0);
        let zero = Complex::new(0.0_f64, 0.0);
        let a = dmatrix![zero, i; -i, zero];
        let f = BunchKaufmanFact::new(a.clone()).unwrap();
        assert_eq!(f.blocks(), &[(0, 2)]);
        assert!((f.recompose().unwrap() - &a).norm() < 1e-12);

        let b = dmatrix![i; Complex::new(1.0, 0.0)];
        let x = f.solve(&b).unwrap();
        assert!((&a * x - b).norm() < 1e-12);
    }

    #[test]
    fn bunch_kaufman_empty() {
        let f = BunchKaufmanFact::new(DMatrix::<f64>::zeros(0, 0)).unwrap();
        assert_eq!(f.shape(), (0, 0));
        assert!(f.blocks().is_empty());
    }

    #[test]
    fn lq() {
        let f = LqFact::new(a()).unwrap();
        check(&a(), &f);
    }

    #[test]
    fn lq_min_norm() {
        // x + y = 2 has minimum norm solution (1, 1).
        let a = dmatrix![1.0, 1.0];
        let f = LqFact::new(a.clone()).unwrap();

        assert_eq!(f.shape(), (1, 2));
        assert_relative_eq!(f.recompose().unwrap(), a, epsilon = 1e-12);

        let x = f.solve(&dmatrix![2.0]).unwrap();
        assert_relative_eq!(x, dmatrix![1.0; 1.0], epsilon = 1e-12);
    }

    #[test]
    fn lq_overdetermined() {
        let a = dmatrix![1.0; 1.0];
        let f = LqFact::new(a).unwrap();
        assert!(matches!(f.solve(&dmatrix![1.0; 1.0]), Err(OpError::Unsupported { .. })));
    }

    #[test]
    fn svd() {
        let f = SvdFact::new(a(), SvdFact::<f64>::default_eps()).unwrap();
        check(&a(), &f);
        assert_eq!(f.singular_values().len(), 3);
    }

    #[test]
    fn svd_empty() {
        let e = SvdFact::new(DMatrix::<f64>::zeros(0, 0), 1e-12).err();
        assert_eq!(e, Some(OpError::failed(FactType::Svd, "matrix is empty")));

        let e = SvdFact::new(DMatrix::<f64>::zeros(0, 3), 1e-12).err();
        assert_eq!(e, Some(OpError::failed(FactType::Svd, "matrix is empty")));
    }

    #[test]
    fn svd_rank_deficient() {
        let a = dmatrix![1.0, 1.0; 1.0, 1.0];
        let f = SvdFact::new(a.clone(), 1e-10).unwrap();
        let x = f.solve(&dmatrix![2.0; 2.0]).unwrap();
        assert_relative_eq!(x, dmatrix![1.0; 1.0], epsilon = 1e-10);
    }
}
