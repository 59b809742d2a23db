use nalgebra::{ComplexField, DMatrix, DVector};
use num_traits::Zero;
use crate::{LinMap, OpError, OpNorm, RealOf};
use crate::linmap::{abs_sum, max_of, spectral_norm};

impl<T> LinMap for DMatrix<T>
where T: ComplexField {
    type Elem = T;

    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn entry(&self, i: usize, j: usize) -> T {
        self[(i, j)].clone()
    }

    fn set_entry(&mut self, i: usize, j: usize, a: T) -> Result<(), OpError> {
        self[(i, j)] = a;
        Ok(())
    }

    fn mul_vec(&self, x: &DVector<T>) -> DVector<T> {
        self * x
    }

    fn mul_mat(&self, x: &DMatrix<T>) -> DMatrix<T> {
        self * x
    }

    fn mul_vec_to(&self, y: &mut DVector<T>, x: &DVector<T>) {
        y.gemv(T::one(), self, x, T::zero())
    }

    fn div_scalar(&self, a: &T) -> Self {
        self / a.clone()
    }

    fn is_real(&self) -> bool {
        self.iter().all(|a| a.clone().imaginary().is_zero())
    }

    fn is_symmetric(&self) -> bool {
        self.is_square() && self == &self.transpose()
    }

    fn is_hermitian(&self) -> bool {
        self.is_square() && self == &self.adjoint()
    }

    fn opnorm(&self, p: OpNorm) -> RealOf<T> {
        match p {
            OpNorm::One => max_of(self.column_iter().map(|c| abs_sum(c.iter()))),
            OpNorm::Inf => max_of(self.row_iter().map(|r| abs_sum(r.iter()))),
            OpNorm::Two => spectral_norm(self)
        }
    }

    fn to_dense(&self) -> DMatrix<T> {
        self.clone()
    }

    fn into_dense(self) -> DMatrix<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector, Complex};
    use super::*;

    #[test]
    fn shape() {
        let a = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
        assert_eq!(LinMap::shape(&a), (2, 3));
        assert!(!LinMap::is_square(&a));
    }

    #[test]
    fn entry() {
        let mut a = dmatrix![1.0, 2.0; 3.0, 4.0];
        assert_eq!(a.entry(1, 0), 3.0);

        a.set_entry(1, 0, 10.0).unwrap();
        assert_eq!(a, dmatrix![1.0, 2.0; 10.0, 4.0]);
    }

    #[test]
    fn mul() {
        let a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let x = dvector![1.0, -1.0];
        assert_eq!(a.mul_vec(&x), dvector![-1.0, -1.0]);

        let mut y = dvector![5.0, 5.0];
        a.mul_vec_to(&mut y, &x);
        assert_eq!(y, dvector![-1.0, -1.0]);

        let b = dmatrix![1.0, 0.0; 0.0, 2.0];
        assert_eq!(a.mul_mat(&b), dmatrix![1.0, 4.0; 3.0, 8.0]);
    }

    #[test]
    fn symmetric() {
        let a = dmatrix![2.0, 1.0; 1.0, 3.0];
        assert!(a.is_symmetric());
        assert!(a.is_hermitian());
        assert!(a.is_real());
        assert!(a.is_posdef());

        let b = dmatrix![2.0, 1.0; 0.0, 3.0];
        assert!(!b.is_symmetric());
        assert!(!b.is_posdef());

        let c = dmatrix![1.0, 2.0; 2.0, 1.0]; // eigenvalues 3, -1
        assert!(c.is_symmetric());
        assert!(!c.is_posdef());
    }

    #[test]
    fn hermitian() {
        let i = Complex::new(0.0_f64, 1.0);
        let one = Complex::new(1.0_f64, 0.0);
        let a = dmatrix![one, i; -i, one];

        assert!(a.is_hermitian());
        assert!(!a.is_symmetric());
        assert!(!a.is_real());
    }

    #[test]
    fn opnorm() {
        let a = dmatrix![1.0, -2.0; 3.0, 4.0];
        assert_eq!(a.opnorm(OpNorm::One), 6.0);
        assert_eq!(a.opnorm(OpNorm::Inf), 7.0);

        let d = dmatrix![3.0, 0.0; 0.0, -5.0];
        assert_relative_eq!(d.opnorm(OpNorm::Two), 5.0, epsilon = 1e-12);
    }
}
