use std::fmt::Debug;
use nalgebra::DVector;
use crate::{LinMap, Time};

/// How an operator refreshes its coefficients from `(u, p, t)`.
///
/// `Default` is the reserved rule of constant operators.
pub enum UpdateRule<F: ?Sized> {
    Default,
    Custom(Box<F>)
}

impl<F: ?Sized> UpdateRule<F> {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl<F: ?Sized> Default for UpdateRule<F> {
    fn default() -> Self {
        Self::Default
    }
}

impl<F: ?Sized> Debug for UpdateRule<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Custom(_) => write!(f, "Custom")
        }
    }
}

// (value, u, p, t) -> new value
pub type ScalarRule<T, U, P> = UpdateRule<dyn Fn(T, &U, &P, Time<T>) -> T>;

// (matrix, u, p, t), updates the matrix in place.
pub type MatrixRule<M, P> = UpdateRule<dyn Fn(&mut M, &DVector<<M as LinMap>::Elem>, &P, Time<<M as LinMap>::Elem>)>;
