//! Симметричные матрицы динамической размерности

use std::fmt;
use std::ops::Index;

use ndarray::{ArrayBase, Data, Ix2};
use rand::Rng;
use rand_distr::Distribution;

use super::{
    checked_packed_len, dimension_from_len, packed_index, packed_len, upper_triangle,
    PackedSymmetric,
};
use crate::error::{Error, Result};
use crate::scalar::{RandomScalar, Scalar};

/// Симметричная матрица, размерность которой задаётся во время выполнения.
///
/// Верхний треугольник хранится в `Vec` в куче, поэтому тип годится и для
/// больших матриц. Размерность не меняется после построения.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricMatrix<T> {
    elements: Vec<T>,
    dim: usize,
}

impl<T: Scalar> SymmetricMatrix<T> {
    /// Пустая матрица размерности 0
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            dim: 0,
        }
    }

    /// Нулевая матрица размерности `dim`.
    ///
    /// # Panics
    ///
    /// Если `(dim² + dim) / 2` не помещается в `usize`.
    pub fn zeros(dim: usize) -> Self {
        let len = checked_packed_len(dim)
            .unwrap_or_else(|| panic!("dimension {} overflows the packed buffer length", dim));
        Self {
            elements: vec![T::zero(); len],
            dim,
        }
    }

    /// Длина `elements` уже согласована с `dim`
    pub(crate) fn from_parts(elements: Vec<T>, dim: usize) -> Self {
        debug_assert_eq!(elements.len(), packed_len(dim));
        Self { elements, dim }
    }

    /// Строит матрицу из квадратной плотной матрицы, копируя верхний треугольник
    pub fn from_dense<S>(matrix: &ArrayBase<S, Ix2>) -> Result<Self>
    where
        S: Data<Elem = T>,
    {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(Error::InvalidShape { rows, cols });
        }
        log::trace!("packing {}x{} dense matrix", rows, cols);

        let elements = upper_triangle(rows)
            .map(|(row, col)| matrix[[row, col]])
            .collect();
        Ok(Self::from_parts(elements, rows))
    }

    /// Строит матрицу из упакованного верхнего треугольника, восстанавливая
    /// размерность по длине: `n = (sqrt(8 * len + 1) - 1) / 2`.
    ///
    /// Длина, не являющаяся треугольным числом, даёт
    /// [`Error::InvalidPackedLength`].
    pub fn from_packed(elements: Vec<T>) -> Result<Self> {
        let len = elements.len();
        let dim = dimension_from_len(len).ok_or(Error::InvalidPackedLength { len })?;
        log::trace!("recovered dimension {} from {} packed elements", dim, len);
        Ok(Self::from_parts(elements, dim))
    }

    /// Как [`from_packed`](Self::from_packed), но с явно заданной размерностью
    pub fn from_packed_with_dim(elements: Vec<T>, dim: usize) -> Result<Self> {
        if checked_packed_len(dim) != Some(elements.len()) {
            return Err(Error::InvalidPackedLength {
                len: elements.len(),
            });
        }
        Ok(Self::from_parts(elements, dim))
    }

    /// Заполняет матрицу размерности `dim` выборками из `distr`
    pub fn from_distribution<D, R>(dim: isize, distr: D, rng: &mut R) -> Result<Self>
    where
        D: Distribution<T>,
        R: Rng + ?Sized,
    {
        let dim = checked_dim(dim)?;
        let elements = distr.sample_iter(rng).take(packed_len(dim)).collect();
        Ok(Self::from_parts(elements, dim))
    }

    /// Симметрична ли плотная матрица. Неквадратная матрица не симметрична.
    pub fn is_symmetric<S>(matrix: &ArrayBase<S, Ix2>) -> bool
    where
        S: Data<Elem = T>,
    {
        crate::dense::is_symmetric(matrix)
    }

    pub fn into_packed(self) -> Vec<T> {
        self.elements
    }
}

impl<T: RandomScalar> SymmetricMatrix<T> {
    /// Матрица размерности `dim` со случайными элементами.
    ///
    /// Отрицательная размерность или размерность, для которой длина буфера
    /// переполняет `usize`, даёт [`Error::InvalidDimension`].
    pub fn random<R: Rng + ?Sized>(dim: isize, rng: &mut R) -> Result<Self> {
        let dim = checked_dim(dim)?;
        log::trace!("random symmetric matrix of dimension {}", dim);
        let elements = (0..packed_len(dim)).map(|_| T::random(rng)).collect();
        Ok(Self::from_parts(elements, dim))
    }
}

fn checked_dim(dim: isize) -> Result<usize> {
    usize::try_from(dim)
        .ok()
        .filter(|&n| checked_packed_len(n).is_some())
        .ok_or(Error::InvalidDimension(dim))
}

impl<T: Scalar> PackedSymmetric<T> for SymmetricMatrix<T> {
    #[inline]
    fn dim(&self) -> usize {
        self.dim
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

impl<T: Scalar> Default for SymmetricMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Index<(usize, usize)> for SymmetricMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.elements[packed_index(row, col, self.dim)]
    }
}

impl<T: Scalar> TryFrom<Vec<T>> for SymmetricMatrix<T> {
    type Error = Error;

    fn try_from(elements: Vec<T>) -> Result<Self> {
        Self::from_packed(elements)
    }
}

impl<T: Scalar> fmt::Display for SymmetricMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(f, self)
    }
}
