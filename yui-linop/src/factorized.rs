use std::fmt::Debug;
use nalgebra::{ComplexField, DMatrix, DVector};
use crate::{DiffEqOperator, OpError, Time};
use crate::err::{ensure, ensure_dim};
use crate::fact::{FactType, Factorization};

/// A constant operator holding a factorization of some matrix `A`.
///
/// It can only solve `A x = b` and reconstruct `A`.
/// A new one must be created when the source matrix changes.
pub struct FactorizedMatrixOperator<T>
where T: ComplexField {
    fact: Box<dyn Factorization<T>>
}

impl<T> FactorizedMatrixOperator<T>
where T: ComplexField {
    pub fn new<F>(fact: F) -> Self
    where F: Factorization<T> + 'static {
        Self::from_boxed(Box::new(fact))
    }

    pub fn from_boxed(fact: Box<dyn Factorization<T>>) -> Self {
        Self { fact }
    }

    pub fn factorization(&self) -> &dyn Factorization<T> {
        self.fact.as_ref()
    }

    pub fn fact_type(&self) -> FactType {
        self.fact.fact_type()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.fact.shape()
    }

    pub fn nrows(&self) -> usize {
        self.shape().0
    }

    pub fn ncols(&self) -> usize {
        self.shape().1
    }

    pub fn is_constant(&self) -> bool {
        true
    }

    pub fn update_coefficients<U, P>(&self, _u: &U, _p: &P, _t: Time<T>) -> &Self {
        self
    }

    pub fn ldiv(&self, b: &DVector<T>) -> Result<DVector<T>, OpError> {
        ensure_dim!((self.nrows(), 1), b.shape());
        self.fact.solve_vec(b)
    }

    pub fn ldiv_mat(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        ensure_dim!((self.nrows(), b.ncols()), b.shape());
        self.fact.solve(b)
    }

    pub fn ldiv_to(&self, y: &mut DVector<T>, b: &DVector<T>) -> Result<(), OpError> {
        ensure_dim!((self.ncols(), 1), y.shape());
        let x = self.ldiv(b)?;
        y.copy_from(&x);
        Ok(())
    }

    // overwrites `b` with the solution.
    pub fn ldiv_mut(&self, b: &mut DVector<T>) -> Result<(), OpError> {
        let (m, n) = self.shape();
        ensure!(m == n, OpError::NotSquare((m, n)));

        let x = self.ldiv(b)?;
        b.copy_from(&x);
        Ok(())
    }

    pub fn to_dense(&self) -> Result<DMatrix<T>, OpError> {
        self.fact.recompose()
    }
}

impl<T> Debug for FactorizedMatrixOperator<T>
where T: ComplexField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorizedMatrixOperator")
            .field("fact_type", &self.fact_type())
            .field("shape", &self.shape())
            .finish()
    }
}

impl<T, P> DiffEqOperator<DVector<T>, P> for FactorizedMatrixOperator<T>
where T: ComplexField {
    type Elem = T;

    fn update_coefficients(&mut self, _u: &DVector<T>, _p: &P, _t: Time<T>) -> &mut Self {
        self
    }

    fn is_constant(&self) -> bool {
        true
    }

    fn eval(&self, _u: &DVector<T>) -> Result<DVector<T>, OpError> {
        Err(OpError::unsupported("mul", "FactorizedMatrixOperator"))
    }

    fn eval_to(&self, _du: &mut DVector<T>, _u: &DVector<T>) -> Result<(), OpError> {
        Err(OpError::unsupported("mul!", "FactorizedMatrixOperator"))
    }

    fn shape(&self) -> Option<(usize, usize)> {
        Some(self.fact.shape())
    }

    fn has_mul(&self) -> bool { false }
    fn has_mul_to(&self) -> bool { false }
    fn has_ldiv(&self) -> bool { true }
    fn has_ldiv_to(&self) -> bool { true }
}
