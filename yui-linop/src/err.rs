use derive_more::Display;
use crate::fact::FactType;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum OpError {
    #[display("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch { expected: (usize, usize), found: (usize, usize) },

    #[display("index {index:?} out of bounds for shape {shape:?}")]
    OutOfBounds { index: (usize, usize), shape: (usize, usize) },

    #[display("matrix of shape {_0:?} is not square")]
    NotSquare((usize, usize)),

    #[display("`{op}` is not supported by {by}")]
    Unsupported { op: &'static str, by: &'static str },

    #[display("{_0} factorization is singular")]
    Singular(FactType),

    #[display("{kind} factorization failed: {reason}")]
    Factorization { kind: FactType, reason: String },
}

impl std::error::Error for OpError {}

impl OpError {
    pub(crate) fn dim(expected: (usize, usize), found: (usize, usize)) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    pub(crate) fn unsupported(op: &'static str, by: &'static str) -> Self {
        Self::Unsupported { op, by }
    }

    pub(crate) fn failed<S: ToString>(kind: FactType, reason: S) -> Self {
        Self::Factorization { kind, reason: reason.to_string() }
    }
}

macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            return Err($err);
        }
    }}
}

macro_rules! ensure_dim {
    ($expected:expr, $found:expr) => {{
        let (e, f) = ($expected, $found);
        if e != f {
            return Err($crate::OpError::dim(e, f));
        }
    }}
}

pub(crate) use {ensure, ensure_dim};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = OpError::dim((2, 1), (3, 1));
        assert_eq!(e.to_string(), "dimension mismatch: expected (2, 1), found (3, 1)");

        let e = OpError::unsupported("mul", "FactorizedMatrixOperator");
        assert_eq!(e.to_string(), "`mul` is not supported by FactorizedMatrixOperator");

        let e = OpError::Singular(FactType::Lu);
        assert_eq!(e.to_string(), "LU factorization is singular");
    }

    #[test]
    fn ensure_dim() {
        fn check(n: usize) -> Result<(), OpError> {
            ensure_dim!((2, 1), (n, 1));
            Ok(())
        }
        assert_eq!(check(2), Ok(()));
        assert_eq!(check(3), Err(OpError::dim((2, 1), (3, 1))));
    }
}
