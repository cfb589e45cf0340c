//! Симметричные матрицы фиксированной размерности

use std::fmt;
use std::ops::Index;

use ndarray::{ArrayBase, Data, Ix2};
use rand::Rng;
use rand_distr::Distribution;

use super::{packed_index, packed_len, upper_triangle, PackedSymmetric, SymmetricMatrix};
use crate::error::{Error, Result};
use crate::scalar::{RandomScalar, Scalar};

/// Симметричная матрица размерности `N`, хранящая верхний треугольник в
/// массиве `[T; LEN]` без выделения памяти в куче.
///
/// `LEN` обязан быть равен `(N² + N) / 2`; несогласованный тип отвергается
/// при компиляции первого же конструктора. Удобнее пользоваться макросом
/// [`fixed_symmetric!`](crate::fixed_symmetric) или псевдонимами вроде
/// [`SymmetricMatrix3`](crate::SymmetricMatrix3).
///
/// Подходит для небольших матриц: весь буфер лежит внутри значения.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSymmetricMatrix<T, const N: usize, const LEN: usize> {
    elements: [T; LEN],
}

impl<T: Scalar, const N: usize, const LEN: usize> FixedSymmetricMatrix<T, N, LEN> {
    const LAYOUT: () = assert!(
        LEN == packed_len(N),
        "LEN must equal (N * N + N) / 2 for FixedSymmetricMatrix<T, N, LEN>"
    );

    /// Размерность, известная на этапе компиляции
    pub const DIM: usize = N;

    /// Нулевая матрица
    pub fn zeros() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT;
        Self { elements: [T::zero(); LEN] }
    }

    /// Строит матрицу из упакованного верхнего треугольника
    pub fn from_packed(elements: [T; LEN]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT;
        Self { elements }
    }

    pub fn try_from_packed(elements: &[T]) -> Result<Self> {
        let elements: [T; LEN] = elements
            .try_into()
            .map_err(|_| Error::InvalidPackedLength { len: elements.len() })?;
        Ok(Self::from_packed(elements))
    }

    /// Строит матрицу из плотного массива `N x N`, копируя верхний треугольник.
    ///
    /// Форма проверяется системой типов, ошибок быть не может.
    pub fn from_array(matrix: &[[T; N]; N]) -> Self {
        let mut result = Self::zeros();
        for (slot, (row, col)) in result.elements.iter_mut().zip(upper_triangle(N)) {
            *slot = matrix[row][col];
        }
        result
    }

    /// Строит матрицу из плотной матрицы `ndarray`, размер которой известен
    /// только во время выполнения.
    pub fn from_dense<S>(matrix: &ArrayBase<S, Ix2>) -> Result<Self>
    where
        S: Data<Elem = T>,
    {
        let (rows, cols) = matrix.dim();
        if rows != N || cols != N {
            return Err(Error::InvalidShape { rows, cols });
        }
        log::trace!("packing {}x{} dense matrix into fixed storage", N, N);

        let mut result = Self::zeros();
        for (slot, (row, col)) in result.elements.iter_mut().zip(upper_triangle(N)) {
            *slot = matrix[[row, col]];
        }
        Ok(result)
    }

    /// Заполняет упакованные элементы независимыми выборками из `distr`
    pub fn from_distribution<D, R>(distr: D, rng: &mut R) -> Self
    where
        D: Distribution<T>,
        R: Rng + ?Sized,
    {
        let mut result = Self::zeros();
        for slot in result.elements.iter_mut() {
            *slot = distr.sample(rng);
        }
        result
    }

    /// Полный плотный массив `N x N`
    pub fn to_array(&self) -> [[T; N]; N] {
        let mut result = [[T::zero(); N]; N];
        for ((i, j), &value) in upper_triangle(N).zip(&self.elements) {
            result[i][j] = value;
            result[j][i] = value;
        }
        result
    }

    /// Симметричен ли массив `N x N`
    pub fn is_symmetric(matrix: &[[T; N]; N]) -> bool {
        crate::dense::is_symmetric_array(matrix)
    }

    pub fn into_packed(self) -> [T; LEN] {
        self.elements
    }
}

impl<T: RandomScalar, const N: usize, const LEN: usize> FixedSymmetricMatrix<T, N, LEN> {
    /// Матрица со случайными элементами из диапазона по умолчанию для `T`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        log::trace!("random fixed symmetric matrix of dimension {}", N);
        let mut result = Self::zeros();
        for slot in result.elements.iter_mut() {
            *slot = T::random(rng);
        }
        result
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> PackedSymmetric<T>
    for FixedSymmetricMatrix<T, N, LEN>
{
    #[inline]
    fn dim(&self) -> usize {
        N
    }

    #[inline]
    fn as_packed(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    fn as_packed_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> Default for FixedSymmetricMatrix<T, N, LEN> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> Index<(usize, usize)>
    for FixedSymmetricMatrix<T, N, LEN>
{
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.elements[packed_index(row, col, N)]
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> From<&[[T; N]; N]>
    for FixedSymmetricMatrix<T, N, LEN>
{
    fn from(matrix: &[[T; N]; N]) -> Self {
        Self::from_array(matrix)
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> From<FixedSymmetricMatrix<T, N, LEN>>
    for SymmetricMatrix<T>
{
    fn from(matrix: FixedSymmetricMatrix<T, N, LEN>) -> Self {
        // длина согласована с N конструктором исходной матрицы
        SymmetricMatrix::from_parts(matrix.elements.to_vec(), N)
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> TryFrom<&SymmetricMatrix<T>>
    for FixedSymmetricMatrix<T, N, LEN>
{
    type Error = Error;

    fn try_from(matrix: &SymmetricMatrix<T>) -> Result<Self> {
        crate::ensure_dim!("conversion", N, matrix.dim());
        Self::try_from_packed(matrix.as_packed())
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> fmt::Display
    for FixedSymmetricMatrix<T, N, LEN>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    type Sym3 = FixedSymmetricMatrix<i32, 3, 6>;

    #[test]
    fn from_array_keeps_upper_triangle() {
        let m = Sym3::from_array(&[[1, 2, 3], [1, 2, 3], [1, 2, 3]]);
        assert_eq!(m.as_packed(), &[1, 2, 3, 2, 3, 3]);
        assert_eq!(m.to_array(), [[1, 2, 3], [2, 2, 3], [3, 3, 3]]);
        assert_eq!(m[(2, 0)], 3);
        assert_eq!(m.get(1, 0), 2);
    }

    #[test]
    fn from_dense_checks_shape() {
        let square = array![[1, 2], [3, 4]];
        assert_eq!(
            FixedSymmetricMatrix::<i32, 2, 3>::from_dense(&square)
                .unwrap()
                .as_packed(),
            &[1, 2, 4]
        );
        assert_eq!(
            Sym3::from_dense(&square),
            Err(Error::InvalidShape { rows: 2, cols: 2 })
        );
        let wide = array![[1, 2, 3], [4, 5, 6]];
        assert_eq!(
            Sym3::from_dense(&wide),
            Err(Error::InvalidShape { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn set_writes_both_halves() {
        let mut m = Sym3::zeros();
        m.set(2, 0, 7);
        assert_eq!(m.get(0, 2), 7);
        assert_eq!(m.get(2, 0), 7);
        assert_eq!(m.as_packed(), &[0, 0, 7, 0, 0, 0]);
    }

    #[test]
    fn try_from_packed_length() {
        assert!(Sym3::try_from_packed(&[1, 2, 3, 4, 5, 6]).is_ok());
        assert_eq!(
            Sym3::try_from_packed(&[1, 2, 3]),
            Err(Error::InvalidPackedLength { len: 3 })
        );
    }

    #[test]
    fn renders_full_grid() {
        let m = Sym3::from_packed([1, 2, 3, 4, 5, 6]);
        assert_eq!(m.to_string(), "1 2 3\n2 4 5\n3 5 6\n");

        let f = FixedSymmetricMatrix::<f64, 2, 3>::from_packed([1.0, 0.5, 2.0]);
        assert_eq!(format!("{:.2}", f), "1.00 0.50\n0.50 2.00\n");
    }
}
