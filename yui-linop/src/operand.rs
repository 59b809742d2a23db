use nalgebra::{Complex, ComplexField, DMatrix, DVector};

/// Values an operator can act on: scalars, state vectors and
/// column blocks of state vectors.
pub trait Operand<T>: Clone {
    fn dims(&self) -> (usize, usize);
    fn scale_by(&mut self, a: &T);
    fn unscale_by(&mut self, a: &T);

    // self += a * x
    fn add_scaled(&mut self, a: &T, x: &Self);

    fn scaled_by(&self, a: &T) -> Self {
        let mut x = self.clone();
        x.scale_by(a);
        x
    }

    fn unscaled_by(&self, a: &T) -> Self {
        let mut x = self.clone();
        x.unscale_by(a);
        x
    }
}

impl<T> Operand<T> for DVector<T>
where T: ComplexField {
    fn dims(&self) -> (usize, usize) {
        self.shape()
    }

    fn scale_by(&mut self, a: &T) {
        *self *= a.clone()
    }

    fn unscale_by(&mut self, a: &T) {
        *self /= a.clone()
    }

    fn add_scaled(&mut self, a: &T, x: &Self) {
        self.axpy(a.clone(), x, T::one())
    }
}

impl<T> Operand<T> for DMatrix<T>
where T: ComplexField {
    fn dims(&self) -> (usize, usize) {
        self.shape()
    }

    fn scale_by(&mut self, a: &T) {
        *self *= a.clone()
    }

    fn unscale_by(&mut self, a: &T) {
        *self /= a.clone()
    }

    fn add_scaled(&mut self, a: &T, x: &Self) {
        *self += x * a.clone()
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {$(
        impl Operand<$t> for $t {
            fn dims(&self) -> (usize, usize) {
                (1, 1)
            }

            fn scale_by(&mut self, a: &$t) {
                *self *= *a
            }

            fn unscale_by(&mut self, a: &$t) {
                *self /= *a
            }

            fn add_scaled(&mut self, a: &$t, x: &Self) {
                *self += *a * *x
            }
        }
    )*};
}

impl_scalar_operand!(f32, f64, Complex<f32>, Complex<f64>);
