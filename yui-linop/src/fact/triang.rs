use nalgebra::{ComplexField, DMatrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangularType {
    Upper, Lower
}

impl TriangularType {
    pub fn is_upper(&self) -> bool {
        match self {
            Self::Upper => true,
            Self::Lower => false
        }
    }
}

// `None` if a diagonal entry is zero.
pub fn solve_triangular<T>(t: TriangularType, a: &DMatrix<T>, b: &DMatrix<T>) -> Option<DMatrix<T>>
where T: ComplexField {
    assert_eq!(a.nrows(), b.nrows());

    if t.is_upper() {
        a.solve_upper_triangular(b)
    } else {
        a.solve_lower_triangular(b)
    }
}

// solves `a^T x = b`.
pub fn tr_solve_triangular<T>(t: TriangularType, a: &DMatrix<T>, b: &DMatrix<T>) -> Option<DMatrix<T>>
where T: ComplexField {
    assert_eq!(a.ncols(), b.nrows());

    if t.is_upper() {
        a.tr_solve_upper_triangular(b)
    } else {
        a.tr_solve_lower_triangular(b)
    }
}
