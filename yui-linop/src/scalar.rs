use std::fmt::Debug;
use std::ops::{Div, Mul};
use log::trace;
use nalgebra::{Complex, ComplexField, DMatrix, DVector};
use crate::{DiffEqOperator, OpError, Operand, ScalarRule, Time, UpdateRule};
use crate::err::ensure_dim;

/// A scalar coefficient `a(u, p, t)` acting by scalar multiplication.
pub struct ScalarOperator<T, U = DVector<T>, P = ()>
where T: ComplexField {
    value: T,
    rule: ScalarRule<T, U, P>
}

impl<T, U, P> ScalarOperator<T, U, P>
where T: ComplexField {
    pub fn new(value: T) -> Self {
        Self { value, rule: UpdateRule::Default }
    }

    pub fn with_update<F>(value: T, f: F) -> Self
    where F: Fn(T, &U, &P, Time<T>) -> T + 'static {
        Self { value, rule: UpdateRule::Custom(Box::new(f)) }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    // bypasses the update rule.
    pub fn set_value(&mut self, value: T) {
        self.value = value
    }

    pub fn rule(&self) -> &ScalarRule<T, U, P> {
        &self.rule
    }

    pub fn abs(&self) -> Time<T> {
        self.value.clone().modulus()
    }

    pub fn exp(&self) -> T {
        self.value.clone().exp()
    }

    // x / a
    pub fn ldiv<X>(&self, x: &X) -> X
    where X: Operand<T> {
        x.unscaled_by(&self.value)
    }

    pub fn ldiv_to<X>(&self, y: &mut X, b: &X) -> Result<(), OpError>
    where X: Operand<T> {
        ensure_dim!(y.dims(), b.dims());
        y.clone_from(b);
        y.unscale_by(&self.value);
        Ok(())
    }

    pub fn lmul<X>(&self, b: &mut X)
    where X: Operand<T> {
        b.scale_by(&self.value)
    }

    pub fn rmul<X>(&self, b: &mut X)
    where X: Operand<T> {
        b.scale_by(&self.value)
    }

    pub fn mul_to<X>(&self, y: &mut X, b: &X) -> Result<(), OpError>
    where X: Operand<T> {
        ensure_dim!(y.dims(), b.dims());
        y.clone_from(b);
        y.scale_by(&self.value);
        Ok(())
    }

    // y += a x
    pub fn axpy<X>(&self, x: &X, y: &mut X) -> Result<(), OpError>
    where X: Operand<T> {
        ensure_dim!(y.dims(), x.dims());
        y.add_scaled(&self.value, x);
        Ok(())
    }
}

impl<T, U, P> From<T> for ScalarOperator<T, U, P>
where T: ComplexField {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, U, P> Debug for ScalarOperator<T, U, P>
where T: ComplexField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarOperator")
            .field("value", &self.value)
            .field("rule", &self.rule)
            .finish()
    }
}

impl<T, U, P> DiffEqOperator<U, P> for ScalarOperator<T, U, P>
where T: ComplexField, U: Operand<T> {
    type Elem = T;

    fn update_coefficients(&mut self, u: &U, p: &P, t: Time<T>) -> &mut Self {
        if let UpdateRule::Custom(f) = &self.rule {
            trace!("update scalar coefficient.");
            self.value = f(self.value.clone(), u, p, t);
        }
        self
    }

    fn is_constant(&self) -> bool {
        self.rule.is_default()
    }

    fn eval(&self, u: &U) -> Result<U, OpError> {
        Ok(u.scaled_by(&self.value))
    }

    fn eval_to(&self, du: &mut U, u: &U) -> Result<(), OpError> {
        self.mul_to(du, u)
    }

    fn shape(&self) -> Option<(usize, usize)> {
        None
    }

    fn has_ldiv(&self) -> bool { true }
    fn has_ldiv_to(&self) -> bool { true }
    fn has_exp(&self) -> bool { true }
}

macro_rules! impl_operand_ops {
    ($($x:ident),*) => {$(
        impl<'a, 'b, T, U, P> Mul<&'b $x<T>> for &'a ScalarOperator<T, U, P>
        where T: ComplexField {
            type Output = $x<T>;
            fn mul(self, rhs: &'b $x<T>) -> Self::Output {
                rhs.scaled_by(&self.value)
            }
        }

        impl<'a, T, U, P> Mul<$x<T>> for &'a ScalarOperator<T, U, P>
        where T: ComplexField {
            type Output = $x<T>;
            fn mul(self, mut rhs: $x<T>) -> Self::Output {
                rhs.scale_by(&self.value);
                rhs
            }
        }

        // x * a
        impl<'a, 'b, T, U, P> Mul<&'b ScalarOperator<T, U, P>> for &'a $x<T>
        where T: ComplexField {
            type Output = $x<T>;
            fn mul(self, rhs: &'b ScalarOperator<T, U, P>) -> Self::Output {
                self.scaled_by(&rhs.value)
            }
        }

        impl<'b, T, U, P> Mul<&'b ScalarOperator<T, U, P>> for $x<T>
        where T: ComplexField {
            type Output = $x<T>;
            fn mul(mut self, rhs: &'b ScalarOperator<T, U, P>) -> Self::Output {
                self.scale_by(&rhs.value);
                self
            }
        }

        // x / a
        impl<'a, 'b, T, U, P> Div<&'b ScalarOperator<T, U, P>> for &'a $x<T>
        where T: ComplexField {
            type Output = $x<T>;
            fn div(self, rhs: &'b ScalarOperator<T, U, P>) -> Self::Output {
                self.unscaled_by(&rhs.value)
            }
        }

        impl<'b, T, U, P> Div<&'b ScalarOperator<T, U, P>> for $x<T>
        where T: ComplexField {
            type Output = $x<T>;
            fn div(mut self, rhs: &'b ScalarOperator<T, U, P>) -> Self::Output {
                self.unscale_by(&rhs.value);
                self
            }
        }
    )*};
}

impl_operand_ops!(DVector, DMatrix);

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl<'a, 'b, U, P> Mul<&'b $t> for &'a ScalarOperator<$t, U, P> {
            type Output = $t;
            fn mul(self, rhs: &'b $t) -> Self::Output {
                self.value * rhs
            }
        }

        impl<'a, U, P> Mul<$t> for &'a ScalarOperator<$t, U, P> {
            type Output = $t;
            fn mul(self, rhs: $t) -> Self::Output {
                self.value * rhs
            }
        }

        impl<'b, U, P> Mul<&'b ScalarOperator<$t, U, P>> for $t {
            type Output = $t;
            fn mul(self, rhs: &'b ScalarOperator<$t, U, P>) -> Self::Output {
                self * rhs.value
            }
        }

        impl<'b, U, P> Div<&'b ScalarOperator<$t, U, P>> for $t {
            type Output = $t;
            fn div(self, rhs: &'b ScalarOperator<$t, U, P>) -> Self::Output {
                self / rhs.value
            }
        }
    )*};
}

impl_scalar_ops!(f32, f64, Complex<f32>, Complex<f64>);

impl<'a, 'b, T, U, P> Div<&'b T> for &'a ScalarOperator<T, U, P>
where T: ComplexField {
    type Output = T;
    fn div(self, rhs: &'b T) -> Self::Output {
        self.value.clone() / rhs.clone()
    }
}

impl<'a, T, U, P> Div<T> for &'a ScalarOperator<T, U, P>
where T: ComplexField {
    type Output = T;
    fn div(self, rhs: T) -> Self::Output {
        self.value.clone() / rhs
    }
}

#[cfg(feature = "serde")]
impl<T, U, P> serde::Serialize for ScalarOperator<T, U, P>
where T: ComplexField + serde::Serialize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, U, P> serde::Deserialize<'de> for ScalarOperator<T, U, P>
where T: ComplexField + serde::Deserialize<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let value = T::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}
