use nalgebra::{ComplexField, DMatrix, DVector, RealField};
use num_traits::Zero;
use crate::OpNorm;

pub type RealOf<T> = <T as ComplexField>::RealField;

/// The matrix kinds a `MatrixOperator` can wrap.
///
/// Every method forwards to the storage's own kernels;
/// shapes are checked by the callers.
pub trait LinMap: Clone {
    type Elem: ComplexField;

    // whether dense-only operations must convert first.
    const SPARSE: bool = false;

    fn shape(&self) -> (usize, usize);

    fn nrows(&self) -> usize { self.shape().0 }
    fn ncols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }

    fn entry(&self, i: usize, j: usize) -> Self::Elem;
    fn set_entry(&mut self, i: usize, j: usize, a: Self::Elem) -> Result<(), crate::OpError>;

    fn mul_vec(&self, x: &DVector<Self::Elem>) -> DVector<Self::Elem>;
    fn mul_mat(&self, x: &DMatrix<Self::Elem>) -> DMatrix<Self::Elem>;
    fn mul_vec_to(&self, y: &mut DVector<Self::Elem>, x: &DVector<Self::Elem>);
    fn div_scalar(&self, a: &Self::Elem) -> Self;

    fn is_real(&self) -> bool;
    fn is_symmetric(&self) -> bool;
    fn is_hermitian(&self) -> bool;
    fn opnorm(&self, p: OpNorm) -> RealOf<Self::Elem>;

    fn to_dense(&self) -> DMatrix<Self::Elem>;
    fn into_dense(self) -> DMatrix<Self::Elem> {
        self.to_dense()
    }

    fn is_posdef(&self) -> bool {
        self.is_hermitian() && self.to_dense().cholesky().is_some()
    }
}

pub(crate) fn max_of<R, I>(itr: I) -> R
where R: RealField, I: IntoIterator<Item = R> {
    itr.into_iter().fold(R::zero(), |a, b|
        if b > a { b } else { a }
    )
}

pub(crate) fn abs_sum<'a, T, I>(itr: I) -> RealOf<T>
where T: ComplexField, I: IntoIterator<Item = &'a T> {
    itr.into_iter().fold(RealOf::<T>::zero(), |s, a|
        s + a.clone().modulus()
    )
}

pub(crate) fn spectral_norm<T>(a: &DMatrix<T>) -> RealOf<T>
where T: ComplexField {
    if a.is_empty() {
        return RealOf::<T>::zero()
    }
    max_of(a.singular_values().iter().cloned())
}
