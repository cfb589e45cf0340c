//! Типы элементов матриц

use std::fmt::{Debug, Display};

use ndarray::LinalgScalar;
use num_complex::Complex;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Граница диапазона `[-RANDOM_INT_BOUND, RANDOM_INT_BOUND]` для случайных целых
pub const RANDOM_INT_BOUND: i8 = 100;

/// Элемент матрицы: всё, что умеет умножать `ndarray`, плюс сравнение и печать.
pub trait Scalar: LinalgScalar + PartialEq + Display + Debug {}

impl<T> Scalar for T where T: LinalgScalar + PartialEq + Display + Debug {}

/// Элемент, для которого определено случайное заполнение по умолчанию.
///
/// Вещественные числа берутся равномерно из `[-1, 1]`, целые со знаком из
/// `[-RANDOM_INT_BOUND, RANDOM_INT_BOUND]`, у комплексных обе части
/// выбираются независимо.
pub trait RandomScalar: Scalar {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_random_float {
    ($($t:ty),*) => {$(
        impl RandomScalar for $t {
            fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Uniform::new_inclusive(-1.0, 1.0).sample(rng)
            }
        }

        impl RandomScalar for Complex<$t> {
            fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let unit = Uniform::new_inclusive(-1.0, 1.0);
                Complex::new(unit.sample(rng), unit.sample(rng))
            }
        }
    )*};
}

macro_rules! impl_random_int {
    ($($t:ty),*) => {$(
        impl RandomScalar for $t {
            fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let bound = RANDOM_INT_BOUND as $t;
                Uniform::new_inclusive(-bound, bound).sample(rng)
            }
        }
    )*};
}

impl_random_float!(f32, f64);
impl_random_int!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = f64::random(&mut rng);
            assert!((-1.0..=1.0).contains(&x));

            let n = i32::random(&mut rng);
            assert!(n.abs() <= RANDOM_INT_BOUND as i32);

            let z = Complex::<f32>::random(&mut rng);
            assert!(z.re.abs() <= 1.0 && z.im.abs() <= 1.0);
        }
    }
}
