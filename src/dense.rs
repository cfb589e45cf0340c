//! Связь с плотными матрицами
//!
//! Плотная матрица динамического размера это `ndarray::Array2`, плотная
//! матрица фиксированного размера это массив `[[T; N]; N]` по строкам.

use ndarray::{Array2, ArrayBase, Data, Ix2};
use rand::Rng;
use rand_distr::Distribution;

use crate::error::{Error, Result};
use crate::scalar::RandomScalar;

/// Матрица симметрична, если она квадратная и совпадает с транспонированной
pub fn is_symmetric<T, S>(matrix: &ArrayBase<S, Ix2>) -> bool
where
    T: PartialEq,
    S: Data<Elem = T>,
{
    matrix.is_square() && *matrix == matrix.t()
}

pub fn is_symmetric_array<T: PartialEq, const N: usize>(matrix: &[[T; N]; N]) -> bool {
    (0..N).all(|i| (i + 1..N).all(|j| matrix[i][j] == matrix[j][i]))
}

/// Копирует верхний треугольник квадратной матрицы в нижний
pub fn make_symmetric<T, S>(matrix: &ArrayBase<S, Ix2>) -> Result<Array2<T>>
where
    T: Clone,
    S: Data<Elem = T>,
{
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(Error::InvalidShape { rows, cols });
    }
    Ok(Array2::from_shape_fn((rows, cols), |(i, j)| {
        if i <= j {
            matrix[[i, j]].clone()
        } else {
            matrix[[j, i]].clone()
        }
    }))
}

/// Плотная матрица со случайными элементами из диапазона по умолчанию для `T`
pub fn random<T, R>(rows: usize, cols: usize, rng: &mut R) -> Array2<T>
where
    T: RandomScalar,
    R: Rng + ?Sized,
{
    Array2::from_shape_simple_fn((rows, cols), || T::random(rng))
}

pub fn random_with<T, D, R>(rows: usize, cols: usize, distr: D, rng: &mut R) -> Array2<T>
where
    D: Distribution<T>,
    R: Rng + ?Sized,
{
    Array2::from_shape_simple_fn((rows, cols), || distr.sample(rng))
}

pub fn from_array<T: Clone, const N: usize>(matrix: &[[T; N]; N]) -> Array2<T> {
    Array2::from_shape_fn((N, N), |(i, j)| matrix[i][j].clone())
}

/// Переводит матрицу `N x N` в массив фиксированного размера
pub fn to_array<T, S, const N: usize>(matrix: &ArrayBase<S, Ix2>) -> Result<[[T; N]; N]>
where
    T: Copy,
    S: Data<Elem = T>,
{
    let (rows, cols) = matrix.dim();
    if rows != N || cols != N {
        return Err(Error::InvalidShape { rows, cols });
    }
    Ok(std::array::from_fn(|i| std::array::from_fn(|j| matrix[[i, j]])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn symmetry_check() {
        assert!(is_symmetric(&array![[1, 2, 3], [2, 2, 3], [3, 3, 3]]));
        assert!(!is_symmetric(&array![[1, 2, 3], [1, 2, 3], [1, 2, 3]]));
        assert!(!is_symmetric(&array![[1, 2], [2, 1], [0, 0]]));
        assert!(is_symmetric_array(&[[1, 5], [5, 1]]));
        assert!(!is_symmetric_array(&[[1, 5], [4, 1]]));
    }

    #[test]
    fn make_symmetric_mirrors_upper() {
        let m = array![[1, 2, 3], [1, 2, 3], [1, 2, 3]];
        assert_eq!(
            make_symmetric(&m).unwrap(),
            array![[1, 2, 3], [2, 2, 3], [3, 3, 3]]
        );
        assert_eq!(
            make_symmetric(&array![[1, 2, 3]]),
            Err(Error::InvalidShape { rows: 1, cols: 3 })
        );
    }

    #[test]
    fn array_conversion() {
        let a = [[1, 2], [3, 4]];
        let dense = from_array(&a);
        assert_eq!(dense, array![[1, 2], [3, 4]]);
        assert_eq!(to_array::<_, _, 2>(&dense).unwrap(), a);
        assert!(to_array::<i32, _, 3>(&dense).is_err());
    }
}
