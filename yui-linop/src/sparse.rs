use log::trace;
use nalgebra::{ComplexField, DMatrix, DVector};
use nalgebra_sparse::{CooMatrix, CscMatrix, SparseEntryMut};
use num_traits::Zero;
use crate::{LinMap, OpError, OpNorm, RealOf};
use crate::err::{ensure, ensure_dim};
use crate::linmap::{max_of, spectral_norm};

// zeros are dropped.
pub fn csc_from_entries<T, I>(shape: (usize, usize), entries: I) -> Result<CscMatrix<T>, OpError>
where T: ComplexField, I: IntoIterator<Item = (usize, usize, T)> {
    let (m, n) = shape;
    let mut coo = CooMatrix::new(m, n);
    for (i, j, a) in entries {
        ensure!(i < m && j < n, OpError::OutOfBounds { index: (i, j), shape });
        if a.is_zero() {
            continue;
        }
        coo.push(i, j, a)
    }
    Ok(CscMatrix::from(&coo))
}

// `data` lists all `m * n` entries row by row.
pub fn csc_from_dense_data<T, I>(shape: (usize, usize), data: I) -> Result<CscMatrix<T>, OpError>
where T: ComplexField, I: IntoIterator<Item = T> {
    let (m, n) = shape;
    let data: Vec<T> = data.into_iter().collect();
    ensure_dim!((m * n, 1), (data.len(), 1));

    csc_from_entries(
        shape,
        data.into_iter().enumerate().map(|(k, a)| (k / n, k % n, a))
    )
}

impl<T> LinMap for CscMatrix<T>
where T: ComplexField {
    type Elem = T;

    const SPARSE: bool = true;

    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn entry(&self, i: usize, j: usize) -> T {
        self.get_entry(i, j).map(|e| e.into_value()).unwrap_or_else(T::zero)
    }

    fn set_entry(&mut self, i: usize, j: usize, a: T) -> Result<(), OpError> {
        match self.get_entry_mut(i, j) {
            Some(SparseEntryMut::NonZero(e)) => {
                *e = a;
                Ok(())
            },
            _ => Err(OpError::unsupported("assignment to a structural zero", "CscMatrix"))
        }
    }

    fn mul_vec(&self, x: &DVector<T>) -> DVector<T> {
        self * x
    }

    fn mul_mat(&self, x: &DMatrix<T>) -> DMatrix<T> {
        self * x
    }

    fn mul_vec_to(&self, y: &mut DVector<T>, x: &DVector<T>) {
        let z: DVector<T> = self * x;
        y.copy_from(&z)
    }

    fn div_scalar(&self, a: &T) -> Self {
        let mut res = self.clone();
        res.values_mut().iter_mut().for_each(|v| *v /= a.clone());
        res
    }

    fn is_real(&self) -> bool {
        self.values().iter().all(|a| a.clone().imaginary().is_zero())
    }

    fn is_symmetric(&self) -> bool {
        self.nrows() == self.ncols() &&
        self.triplet_iter().all(|(i, j, a)|
            &self.entry(j, i) == a
        )
    }

    fn is_hermitian(&self) -> bool {
        self.nrows() == self.ncols() &&
        self.triplet_iter().all(|(i, j, a)|
            self.entry(j, i) == a.clone().conjugate()
        )
    }

    fn opnorm(&self, p: OpNorm) -> RealOf<T> {
        let (m, n) = (self.nrows(), self.ncols());
        match p {
            OpNorm::One => {
                let mut sums = vec![RealOf::<T>::zero(); n];
                for (_, j, a) in self.triplet_iter() {
                    sums[j] += a.clone().modulus();
                }
                max_of(sums)
            },
            OpNorm::Inf => {
                let mut sums = vec![RealOf::<T>::zero(); m];
                for (i, _, a) in self.triplet_iter() {
                    sums[i] += a.clone().modulus();
                }
                max_of(sums)
            },
            OpNorm::Two => spectral_norm(&self.to_dense())
        }
    }

    fn to_dense(&self) -> DMatrix<T> {
        trace!("densify sparse matrix: shape = {:?}, nnz = {}", (self.nrows(), self.ncols()), self.nnz());
        DMatrix::from(self)
    }
}
