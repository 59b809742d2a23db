use nalgebra::{ComplexField, DVector};
use num_traits::One;
use crate::{DiffEqOperator, OpError, Operand, ScalarOperator, Time};
use crate::err::{ensure, ensure_dim};

/// `a(u, p, t) * L(u, p, t)`.
pub struct ScaledOperator<T, L, U = DVector<T>, P = ()>
where T: ComplexField {
    coeff: ScalarOperator<T, U, P>,
    inner: L
}

impl<T, L, U, P> ScaledOperator<T, L, U, P>
where T: ComplexField {
    pub fn new(coeff: ScalarOperator<T, U, P>, inner: L) -> Self {
        Self { coeff, inner }
    }

    pub fn coeff(&self) -> &ScalarOperator<T, U, P> {
        &self.coeff
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_parts(self) -> (ScalarOperator<T, U, P>, L) {
        (self.coeff, self.inner)
    }
}

impl<T, L, U, P> DiffEqOperator<U, P> for ScaledOperator<T, L, U, P>
where T: ComplexField, U: Operand<T>, L: DiffEqOperator<U, P, Elem = T> {
    type Elem = T;

    fn update_coefficients(&mut self, u: &U, p: &P, t: Time<T>) -> &mut Self {
        self.coeff.update_coefficients(u, p, t.clone());
        self.inner.update_coefficients(u, p, t);
        self
    }

    fn is_constant(&self) -> bool {
        self.coeff.is_constant() && self.inner.is_constant()
    }

    fn eval(&self, u: &U) -> Result<U, OpError> {
        let mut v = self.inner.eval(u)?;
        v.scale_by(self.coeff.value());
        Ok(v)
    }

    fn eval_to(&self, du: &mut U, u: &U) -> Result<(), OpError> {
        self.inner.eval_to(du, u)?;
        du.scale_by(self.coeff.value());
        Ok(())
    }

    fn shape(&self) -> Option<(usize, usize)> {
        self.inner.shape()
    }

    fn has_mul(&self) -> bool { self.inner.has_mul() }
    fn has_mul_to(&self) -> bool { self.inner.has_mul_to() }
}

/// `A(u, p, t) + B(u, p, t)`.
pub struct OperatorSum<A, B> {
    a: A,
    b: B
}

impl<A, B> OperatorSum<A, B> {
    // a scalar operand must be added to a square one.
    pub fn new<U, P>(a: A, b: B) -> Result<Self, OpError>
    where A: DiffEqOperator<U, P>, B: DiffEqOperator<U, P, Elem = A::Elem> {
        match (a.shape(), b.shape()) {
            (Some(s), Some(t)) => ensure_dim!(s, t),
            (Some(s), None) | (None, Some(s)) => ensure!(s.0 == s.1, OpError::NotSquare(s)),
            (None, None) => ()
        }
        Ok(Self { a, b })
    }

    pub fn lhs(&self) -> &A {
        &self.a
    }

    pub fn rhs(&self) -> &B {
        &self.b
    }

    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B, U, P> DiffEqOperator<U, P> for OperatorSum<A, B>
where A: DiffEqOperator<U, P>, B: DiffEqOperator<U, P, Elem = A::Elem>, U: Operand<A::Elem> {
    type Elem = A::Elem;

    fn update_coefficients(&mut self, u: &U, p: &P, t: Time<A::Elem>) -> &mut Self {
        self.a.update_coefficients(u, p, t.clone());
        self.b.update_coefficients(u, p, t);
        self
    }

    fn is_constant(&self) -> bool {
        self.a.is_constant() && self.b.is_constant()
    }

    fn eval(&self, u: &U) -> Result<U, OpError> {
        let mut v = self.a.eval(u)?;
        let w = self.b.eval(u)?;
        v.add_scaled(&<A::Elem as One>::one(), &w);
        Ok(v)
    }

    fn eval_to(&self, du: &mut U, u: &U) -> Result<(), OpError> {
        self.a.eval_to(du, u)?;
        let w = self.b.eval(u)?;
        du.add_scaled(&<A::Elem as One>::one(), &w);
        Ok(())
    }

    fn shape(&self) -> Option<(usize, usize)> {
        self.a.shape().or(self.b.shape())
    }

    fn has_mul(&self) -> bool { self.a.has_mul() && self.b.has_mul() }
    fn has_mul_to(&self) -> bool { self.a.has_mul_to() && self.b.has_mul_to() }
}
