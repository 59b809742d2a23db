use log::debug;
use nalgebra::{DMatrix, RealField};
use nalgebra_sparse::CscMatrix;
use nalgebra_sparse::factorization::CscCholesky;
use crate::{LinMap, OpError};
use crate::err::ensure;
use super::{check_hermitian, FactType, Factorization};

// Cholesky factorization that keeps the sparsity of `A`.
pub struct SparseCholeskyFact<T>
where T: RealField {
    chol: CscCholesky<T>
}

impl<T> SparseCholeskyFact<T>
where T: RealField {
    pub fn new(a: &CscMatrix<T>) -> Result<Self, OpError> {
        ensure!(a.is_square(), OpError::NotSquare(LinMap::shape(a)));
        check_hermitian(FactType::Cholesky, a)?;
        debug!("sparse Cholesky: {:?}, nnz = {}", LinMap::shape(a), a.nnz());

        let chol = CscCholesky::factor(a).map_err(|_|
            OpError::failed(FactType::Cholesky, "matrix is not positive definite")
        )?;
        Ok(Self { chol })
    }

    pub fn l(&self) -> &CscMatrix<T> {
        self.chol.l()
    }
}

impl<T> Factorization<T> for SparseCholeskyFact<T>
where T: RealField {
    fn fact_type(&self) -> FactType {
        FactType::Cholesky
    }

    fn shape(&self) -> (usize, usize) {
        let n = self.chol.l().nrows();
        (n, n)
    }

    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError> {
        Ok(self.chol.solve(b))
    }

    fn recompose(&self) -> Result<DMatrix<T>, OpError> {
        let l = self.chol.l();
        let lt = l.transpose();
        let a = l * &lt;
        Ok(DMatrix::from(&a))
    }
}
