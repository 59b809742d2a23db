use std::fmt::Debug;
use std::ops::Mul;
use delegate::delegate;
use log::{info, trace};
use nalgebra::{ComplexField, DMatrix, DVector, RealField};
use nalgebra_sparse::CscMatrix;
use crate::{DiffEqOperator, FactorizedMatrixOperator, LinMap, MatrixRule, OpError, OpNorm, RealOf, Time, UpdateRule};
use crate::err::{ensure, ensure_dim};
use crate::fact::{self, BunchKaufmanFact, CholeskyFact, LdltFact, LqFact, LuFact, QrFact, SparseCholeskyFact, SvdFact};

macro_rules! impl_factorizations {
    ($(($name:ident, $into_name:ident, $fact:ident)),*) => {$(
        pub fn $name(&self) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
            let f = $fact::new(self.dense_for(stringify!($name)))?;
            Ok(FactorizedMatrixOperator::new(f))
        }

        pub fn $into_name(self) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
            let f = $fact::new(self.into_dense_for(stringify!($name)))?;
            Ok(FactorizedMatrixOperator::new(f))
        }
    )*};
}

/// A matrix `A(u, p, t)` acting on state vectors,
/// with an update rule that rewrites `A` in place.
pub struct MatrixOperator<M = DMatrix<f64>, P = ()>
where M: LinMap {
    matrix: M,
    rule: MatrixRule<M, P>
}

impl<M, P> MatrixOperator<M, P>
where M: LinMap {
    pub fn new(matrix: M) -> Self {
        Self { matrix, rule: UpdateRule::Default }
    }

    pub fn with_update<F>(matrix: M, f: F) -> Self
    where F: Fn(&mut M, &DVector<M::Elem>, &P, Time<M::Elem>) + 'static {
        Self { matrix, rule: UpdateRule::Custom(Box::new(f)) }
    }

    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut M {
        &mut self.matrix
    }

    pub fn into_matrix(self) -> M {
        self.matrix
    }

    // bypasses the update rule.
    pub fn set_value(&mut self, matrix: M) {
        self.matrix = matrix
    }

    pub fn rule(&self) -> &MatrixRule<M, P> {
        &self.rule
    }

    delegate! { to self.matrix {
        pub fn shape(&self) -> (usize, usize);
        pub fn nrows(&self) -> usize;
        pub fn ncols(&self) -> usize;
        pub fn is_square(&self) -> bool;
        pub fn is_real(&self) -> bool;
        pub fn is_symmetric(&self) -> bool;
        pub fn is_hermitian(&self) -> bool;
        pub fn is_posdef(&self) -> bool;
        pub fn opnorm(&self, p: OpNorm) -> RealOf<M::Elem>;
        pub fn to_dense(&self) -> DMatrix<M::Elem>;
    }}

    pub fn size(&self, d: usize) -> usize {
        let (m, n) = self.shape();
        match d {
            0 => m,
            1 => n,
            _ => 1
        }
    }

    // the operator 2-norm.
    pub fn norm(&self) -> RealOf<M::Elem> {
        self.opnorm(OpNorm::default())
    }

    pub fn into_dense(self) -> DMatrix<M::Elem> {
        self.matrix.into_dense()
    }

    pub fn get(&self, i: usize, j: usize) -> Result<M::Elem, OpError> {
        self.check_index(i, j)?;
        Ok(self.matrix.entry(i, j))
    }

    pub fn set(&mut self, i: usize, j: usize, a: M::Elem) -> Result<(), OpError> {
        self.check_index(i, j)?;
        self.matrix.set_entry(i, j, a)
    }

    // column-major.
    pub fn get_linear(&self, k: usize) -> Result<M::Elem, OpError> {
        let (i, j) = self.linear_index(k);
        self.get(i, j)
    }

    pub fn set_linear(&mut self, k: usize, a: M::Elem) -> Result<(), OpError> {
        let (i, j) = self.linear_index(k);
        self.set(i, j, a)
    }

    fn linear_index(&self, k: usize) -> (usize, usize) {
        let m = usize::max(self.nrows(), 1);
        (k % m, k / m)
    }

    fn check_index(&self, i: usize, j: usize) -> Result<(), OpError> {
        let (m, n) = self.shape();
        ensure!(i < m && j < n, OpError::OutOfBounds { index: (i, j), shape: (m, n) });
        Ok(())
    }

    pub fn exp(&self) -> Result<DMatrix<M::Elem>, OpError> {
        ensure!(self.is_square(), OpError::NotSquare(self.shape()));
        Ok(self.dense_for("exp").exp())
    }

    pub fn div(&self, a: &M::Elem) -> M {
        self.matrix.div_scalar(a)
    }

    pub fn mul_to(&self, y: &mut DVector<M::Elem>, x: &DVector<M::Elem>) -> Result<(), OpError> {
        ensure_dim!((self.ncols(), 1), x.shape());
        ensure_dim!((self.nrows(), 1), y.shape());
        self.matrix.mul_vec_to(y, x);
        Ok(())
    }

    pub fn ldiv(&self, b: &DVector<M::Elem>) -> Result<DVector<M::Elem>, OpError> {
        ensure_dim!((self.nrows(), 1), b.shape());
        self.factorize()?.ldiv(b)
    }

    pub fn ldiv_mat(&self, b: &DMatrix<M::Elem>) -> Result<DMatrix<M::Elem>, OpError> {
        ensure_dim!((self.nrows(), b.ncols()), b.shape());
        self.factorize()?.ldiv_mat(b)
    }

    pub fn ldiv_to(&self, y: &mut DVector<M::Elem>, b: &DVector<M::Elem>) -> Result<(), OpError> {
        ensure_dim!((self.ncols(), 1), y.shape());
        ensure_dim!((self.nrows(), 1), b.shape());
        self.factorize()?.ldiv_to(y, b)
    }

    pub fn factorize(&self) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        let f = fact::factorize(self.dense_for("factorize"))?;
        Ok(FactorizedMatrixOperator::from_boxed(f))
    }

    pub fn into_factorize(self) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        let f = fact::factorize(self.into_dense_for("factorize"))?;
        Ok(FactorizedMatrixOperator::from_boxed(f))
    }

    fn dense_for(&self, op: &str) -> DMatrix<M::Elem> {
        if M::SPARSE {
            info!("{op}: convert sparse matrix {:?} to dense.", self.shape());
        }
        self.matrix.to_dense()
    }

    fn into_dense_for(self, op: &str) -> DMatrix<M::Elem> {
        if M::SPARSE {
            info!("{op}: convert sparse matrix {:?} to dense.", self.shape());
        }
        self.matrix.into_dense()
    }

    impl_factorizations!(
        (lu, into_lu, LuFact),
        (qr, into_qr, QrFact),
        (cholesky, into_cholesky, CholeskyFact),
        (bunch_kaufman, into_bunch_kaufman, BunchKaufmanFact),
        (lq, into_lq, LqFact)
    );

    // with `pivot`, QR with column pivoting.
    pub fn qr_with(&self, pivot: bool) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        let a = self.dense_for("qr");
        let f = if pivot { QrFact::new_pivoted(a)? } else { QrFact::new(a)? };
        Ok(FactorizedMatrixOperator::new(f))
    }

    pub fn into_qr_with(self, pivot: bool) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        let a = self.into_dense_for("qr");
        let f = if pivot { QrFact::new_pivoted(a)? } else { QrFact::new(a)? };
        Ok(FactorizedMatrixOperator::new(f))
    }

    pub fn svd(&self) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        self.svd_with(SvdFact::<M::Elem>::default_eps())
    }

    pub fn into_svd(self) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        self.into_svd_with(SvdFact::<M::Elem>::default_eps())
    }

    // singular values below `eps` are ignored when solving.
    pub fn svd_with(&self, eps: RealOf<M::Elem>) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        let f = SvdFact::new(self.dense_for("svd"), eps)?;
        Ok(FactorizedMatrixOperator::new(f))
    }

    pub fn into_svd_with(self, eps: RealOf<M::Elem>) -> Result<FactorizedMatrixOperator<M::Elem>, OpError> {
        let f = SvdFact::new(self.into_dense_for("svd"), eps)?;
        Ok(FactorizedMatrixOperator::new(f))
    }
}

impl<M, P> MatrixOperator<M, P>
where M: LinMap, M::Elem: RealField {
    impl_factorizations!(
        (ldlt, into_ldlt, LdltFact)
    );
}

impl<T, P> MatrixOperator<CscMatrix<T>, P>
where T: RealField {
    // factorizes without converting to dense.
    pub fn sparse_cholesky(&self) -> Result<FactorizedMatrixOperator<T>, OpError> {
        let f = SparseCholeskyFact::new(&self.matrix)?;
        Ok(FactorizedMatrixOperator::new(f))
    }
}

impl<M, P> From<M> for MatrixOperator<M, P>
where M: LinMap {
    fn from(matrix: M) -> Self {
        Self::new(matrix)
    }
}

impl<M, P> Debug for MatrixOperator<M, P>
where M: LinMap + Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixOperator")
            .field("matrix", &self.matrix)
            .field("rule", &self.rule)
            .finish()
    }
}

impl<T, M, P> DiffEqOperator<DVector<T>, P> for MatrixOperator<M, P>
where T: ComplexField, M: LinMap<Elem = T> {
    type Elem = T;

    fn update_coefficients(&mut self, u: &DVector<T>, p: &P, t: Time<T>) -> &mut Self {
        if let UpdateRule::Custom(f) = &self.rule {
            trace!("update matrix coefficients: {:?}", self.matrix.shape());
            f(&mut self.matrix, u, p, t);
        }
        self
    }

    fn is_constant(&self) -> bool {
        self.rule.is_default()
    }

    fn eval(&self, u: &DVector<T>) -> Result<DVector<T>, OpError> {
        ensure_dim!((self.ncols(), 1), u.shape());
        Ok(self.matrix.mul_vec(u))
    }

    fn eval_to(&self, du: &mut DVector<T>, u: &DVector<T>) -> Result<(), OpError> {
        self.mul_to(du, u)
    }

    fn shape(&self) -> Option<(usize, usize)> {
        Some(self.matrix.shape())
    }

    fn has_ldiv(&self) -> bool { true }
    fn has_ldiv_to(&self) -> bool { true }
    fn has_exp(&self) -> bool { self.matrix.is_square() }
}

macro_rules! impl_mul {
    ($x:ident, $method:ident) => {
        impl<'a, 'b, T, M, P> Mul<&'b $x<T>> for &'a MatrixOperator<M, P>
        where T: ComplexField, M: LinMap<Elem = T> {
            type Output = $x<T>;
            fn mul(self, rhs: &'b $x<T>) -> Self::Output {
                self.matrix.$method(rhs)
            }
        }

        impl<'a, T, M, P> Mul<$x<T>> for &'a MatrixOperator<M, P>
        where T: ComplexField, M: LinMap<Elem = T> {
            type Output = $x<T>;
            fn mul(self, rhs: $x<T>) -> Self::Output {
                self.matrix.$method(&rhs)
            }
        }
    };
}

impl_mul!(DVector, mul_vec);
impl_mul!(DMatrix, mul_mat);

#[cfg(feature = "serde")]
impl<M, P> serde::Serialize for MatrixOperator<M, P>
where M: LinMap + serde::Serialize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        self.matrix.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, M, P> serde::Deserialize<'de> for MatrixOperator<M, P>
where M: LinMap + serde::Deserialize<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let matrix = M::deserialize(deserializer)?;
        Ok(Self::new(matrix))
    }
}
