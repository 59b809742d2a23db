use derive_more::Display;
use log::debug;
use nalgebra::{ComplexField, DMatrix, DVector};
use crate::{LinMap, OpError};

mod dense;
mod sparse;
pub mod triang;

pub use dense::*;
pub use sparse::*;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum FactType {
    #[display("LU")]
    Lu,
    #[display("QR")]
    Qr,
    #[display("Cholesky")]
    Cholesky,
    #[display("LDLT")]
    Ldlt,
    #[display("Bunch-Kaufman")]
    BunchKaufman,
    #[display("LQ")]
    Lq,
    #[display("SVD")]
    Svd,
}

/// A factorized matrix that can solve `A x = b` and
/// reconstruct `A`, but supports no other arithmetic.
pub trait Factorization<T>
where T: ComplexField {
    fn fact_type(&self) -> FactType;
    fn shape(&self) -> (usize, usize);

    // `b` must have `self.shape().0` rows.
    fn solve(&self, b: &DMatrix<T>) -> Result<DMatrix<T>, OpError>;
    fn recompose(&self) -> Result<DMatrix<T>, OpError>;

    fn solve_vec(&self, b: &DVector<T>) -> Result<DVector<T>, OpError> {
        let b = DMatrix::from_column_slice(b.nrows(), 1, b.as_slice());
        let x = self.solve(&b)?;
        Ok(x.column(0).into_owned())
    }
}

/// Chooses a factorization from the structure of `a`:
/// rectangular matrices get QR (tall) or LQ (wide),
/// hermitian ones Cholesky with Bunch-Kaufman as fallback,
/// and everything else LU.
pub fn factorize<T>(a: DMatrix<T>) -> Result<Box<dyn Factorization<T>>, OpError>
where T: ComplexField {
    let (m, n) = a.shape();

    if m > n {
        debug!("factorize {:?}: tall, use QR", (m, n));
        return Ok(Box::new(QrFact::new(a)?))
    } else if m < n {
        debug!("factorize {:?}: wide, use LQ", (m, n));
        return Ok(Box::new(LqFact::new(a)?))
    }

    if LinMap::is_hermitian(&a) {
        match CholeskyFact::new(a.clone()) {
            Ok(c) => {
                debug!("factorize {:?}: hermitian positive definite, use Cholesky", (m, n));
                return Ok(Box::new(c))
            },
            Err(_) => {
                debug!("factorize {:?}: hermitian indefinite, use Bunch-Kaufman", (m, n));
                return Ok(Box::new(BunchKaufmanFact::new(a)?))
            }
        }
    }

    debug!("factorize {:?}: use LU", (m, n));
    Ok(Box::new(LuFact::new(a)?))
}

pub(crate) fn check_square<T>(a: &DMatrix<T>) -> Result<(), OpError>
where T: ComplexField {
    if a.is_square() {
        Ok(())
    } else {
        Err(OpError::NotSquare(a.shape()))
    }
}

pub(crate) fn check_hermitian<M>(kind: FactType, a: &M) -> Result<(), OpError>
where M: LinMap {
    if crate::config::is_symmetry_check_enabled() && !a.is_hermitian() {
        Err(OpError::failed(kind, "matrix is not hermitian"))
    } else {
        Ok(())
    }
}
