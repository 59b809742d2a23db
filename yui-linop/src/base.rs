use nalgebra::ComplexField;
use crate::OpError;

pub type Time<T> = <T as ComplexField>::RealField;

/// The capability set shared by all operators that a solver
/// evaluates as `L(u, p, t)`.
///
/// `update_coefficients` refreshes the operator from `(u, p, t)`,
/// `eval` / `eval_to` act on `u` with the current coefficients,
/// and `apply` / `apply_to` do both in this order.
pub trait DiffEqOperator<U, P> {
    type Elem: ComplexField;

    fn update_coefficients(&mut self, u: &U, p: &P, t: Time<Self::Elem>) -> &mut Self;
    fn is_constant(&self) -> bool;

    fn eval(&self, u: &U) -> Result<U, OpError>;
    fn eval_to(&self, du: &mut U, u: &U) -> Result<(), OpError>;

    fn apply(&mut self, u: &U, p: &P, t: Time<Self::Elem>) -> Result<U, OpError> {
        self.update_coefficients(u, p, t).eval(u)
    }

    fn apply_to(&mut self, du: &mut U, u: &U, p: &P, t: Time<Self::Elem>) -> Result<(), OpError> {
        self.update_coefficients(u, p, t).eval_to(du, u)
    }

    // `None` for scalars.
    fn shape(&self) -> Option<(usize, usize)>;

    // 0: rows, 1: cols. trailing dimensions are 1.
    fn size(&self, d: usize) -> usize {
        match (self.shape(), d) {
            (Some((m, _)), 0) => m,
            (Some((_, n)), 1) => n,
            _ => 1
        }
    }

    fn is_square(&self) -> bool {
        match self.shape() {
            Some((m, n)) => m == n,
            None => true
        }
    }

    fn has_mul(&self) -> bool { true }
    fn has_mul_to(&self) -> bool { true }
    fn has_ldiv(&self) -> bool { false }
    fn has_ldiv_to(&self) -> bool { false }
    fn has_exp(&self) -> bool { false }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpNorm {
    One,
    #[default]
    Two,
    Inf
}
