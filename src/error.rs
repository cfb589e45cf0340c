//! Ошибки операций над симметричными матрицами

use thiserror::Error;

/// Ошибки, возникающие при построении матриц и арифметике над ними
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Симметричную матрицу можно построить только из квадратной
    #[error("cannot build a symmetric matrix from a non-square {rows}x{cols} matrix")]
    InvalidShape { rows: usize, cols: usize },
    /// Число упакованных элементов не является треугольным числом
    /// (или не совпадает с заявленной размерностью)
    #[error("{len} packed elements do not form the upper triangle of a square matrix")]
    InvalidPackedLength { len: usize },
    #[error("cannot construct a matrix with negative dimension {0}")]
    InvalidDimension(isize),
    /// Размерности операндов бинарной операции не совпадают
    #[error("{op} cannot be performed for dimensions {left} and {right}")]
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[doc(hidden)]
pub fn dimension_mismatch(op: &'static str, left: usize, right: usize) -> Error {
    log::debug!("{}: dimension {} does not match {}", op, left, right);
    Error::DimensionMismatch { op, left, right }
}
