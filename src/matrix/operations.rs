//! Операции над симметричными матрицами
//!
//! Сложение и вычитание двух упакованных матриц выполняется прямо над
//! буферами: раскладка у операндов и результата одинакова. Сумма с плотной
//! матрицей и любое произведение возвращают `Array2`, так как результат в
//! общем случае не симметричен.
//!
//! Для двух матриц фиксированной размерности определены операторы `+`, `-`
//! и `*`: несовпадение размерностей там просто не компилируется. Во всех
//! остальных сочетаниях размерность проверяется во время выполнения.

use std::ops::{Add, Mul, Sub};

use ndarray::{Array2, ArrayBase, Data, Ix2};

use super::{upper_triangle, FixedSymmetricMatrix, PackedSymmetric};
use crate::dense;
use crate::error::Result;
use crate::scalar::Scalar;

/// Арифметика для любых упакованных симметричных матриц.
///
/// Реализована для всех типов с [`PackedSymmetric`]; второй операнд может
/// быть матрицей другого вида той же размерности. Тип результата сложения
/// совпадает с типом левого операнда.
pub trait SymmetricOps<T: Scalar>: PackedSymmetric<T> + Clone {
    /// Поэлементная сумма упакованных буферов
    fn try_add<O>(&self, other: &O) -> Result<Self>
    where
        O: PackedSymmetric<T> + ?Sized,
    {
        zip_packed(self, other, "addition", |a, b| a + b)
    }

    fn try_sub<O>(&self, other: &O) -> Result<Self>
    where
        O: PackedSymmetric<T> + ?Sized,
    {
        zip_packed(self, other, "subtraction", |a, b| a - b)
    }

    /// Сумма с плотной матрицей `n x n`.
    ///
    /// Ячейки `(i, j)` и `(j, i)` складываются с разными элементами плотной
    /// матрицы, поэтому результат не обязательно симметричен.
    fn add_dense<S>(&self, other: &ArrayBase<S, Ix2>) -> Result<Array2<T>>
    where
        S: Data<Elem = T>,
    {
        combine_dense(self, other, "addition", |a, b| a + b)
    }

    fn sub_dense<S>(&self, other: &ArrayBase<S, Ix2>) -> Result<Array2<T>>
    where
        S: Data<Elem = T>,
    {
        combine_dense(self, other, "subtraction", |a, b| a - b)
    }

    /// Произведение двух упакованных матриц через плотное представление
    fn try_mul<O>(&self, other: &O) -> Result<Array2<T>>
    where
        O: PackedSymmetric<T> + ?Sized,
    {
        ensure_dim!("multiplication", self.dim(), other.dim());
        log::debug!(
            "materializing dense operands for {0}x{0} multiplication",
            self.dim()
        );
        Ok(self.to_dense().dot(&other.to_dense()))
    }

    /// `self * other`; у `other` должно быть `n` строк
    fn mul_dense<S>(&self, other: &ArrayBase<S, Ix2>) -> Result<Array2<T>>
    where
        S: Data<Elem = T>,
    {
        ensure_dim!("multiplication", self.dim(), other.nrows());
        log::debug!(
            "materializing dense operand for {}x{} * {}x{} multiplication",
            self.dim(),
            self.dim(),
            other.nrows(),
            other.ncols()
        );
        Ok(self.to_dense().dot(other))
    }

    /// `other * self`; у `other` должно быть `n` столбцов
    fn left_mul_dense<S>(&self, other: &ArrayBase<S, Ix2>) -> Result<Array2<T>>
    where
        S: Data<Elem = T>,
    {
        ensure_dim!("multiplication", other.ncols(), self.dim());
        log::debug!(
            "materializing dense operand for {}x{} * {}x{} multiplication",
            other.nrows(),
            other.ncols(),
            self.dim(),
            self.dim()
        );
        Ok(other.dot(&self.to_dense()))
    }
}

impl<T: Scalar, M: PackedSymmetric<T> + Clone> SymmetricOps<T> for M {}

fn zip_packed<T, M, O, F>(lhs: &M, rhs: &O, op: &'static str, f: F) -> Result<M>
where
    T: Scalar,
    M: PackedSymmetric<T> + Clone,
    O: PackedSymmetric<T> + ?Sized,
    F: Fn(T, T) -> T,
{
    ensure_dim!(op, lhs.dim(), rhs.dim());
    let mut result = lhs.clone();
    for (a, &b) in result.as_packed_mut().iter_mut().zip(rhs.as_packed()) {
        *a = f(*a, b);
    }
    Ok(result)
}

fn combine_dense<T, M, S, F>(
    lhs: &M,
    rhs: &ArrayBase<S, Ix2>,
    op: &'static str,
    f: F,
) -> Result<Array2<T>>
where
    T: Scalar,
    M: PackedSymmetric<T> + ?Sized,
    S: Data<Elem = T>,
    F: Fn(T, T) -> T,
{
    let n = lhs.dim();
    ensure_dim!(op, n, rhs.nrows());
    ensure_dim!(op, n, rhs.ncols());

    let mut result = Array2::zeros((n, n));
    for ((i, j), &value) in upper_triangle(n).zip(lhs.as_packed()) {
        result[[i, j]] = f(value, rhs[[i, j]]);
        result[[j, i]] = f(value, rhs[[j, i]]);
    }
    Ok(result)
}

fn combine_array<T, const N: usize, const LEN: usize, F>(
    lhs: &FixedSymmetricMatrix<T, N, LEN>,
    rhs: &[[T; N]; N],
    f: F,
) -> [[T; N]; N]
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    let mut result = [[T::zero(); N]; N];
    for ((i, j), &value) in upper_triangle(N).zip(lhs.as_packed()) {
        result[i][j] = f(value, rhs[i][j]);
        result[j][i] = f(value, rhs[j][i]);
    }
    result
}

impl<T: Scalar, const N: usize, const LEN: usize> Add for FixedSymmetricMatrix<T, N, LEN> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, &b) in self.as_packed_mut().iter_mut().zip(rhs.as_packed()) {
            *a = *a + b;
        }
        self
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> Sub for FixedSymmetricMatrix<T, N, LEN> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (a, &b) in self.as_packed_mut().iter_mut().zip(rhs.as_packed()) {
            *a = *a - b;
        }
        self
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> Add<[[T; N]; N]>
    for FixedSymmetricMatrix<T, N, LEN>
{
    type Output = [[T; N]; N];

    fn add(self, rhs: [[T; N]; N]) -> [[T; N]; N] {
        combine_array(&self, &rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> Sub<[[T; N]; N]>
    for FixedSymmetricMatrix<T, N, LEN>
{
    type Output = [[T; N]; N];

    fn sub(self, rhs: [[T; N]; N]) -> [[T; N]; N] {
        combine_array(&self, &rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> Mul for FixedSymmetricMatrix<T, N, LEN> {
    type Output = Array2<T>;

    fn mul(self, rhs: Self) -> Array2<T> {
        self.to_dense().dot(&rhs.to_dense())
    }
}

impl<T: Scalar, const N: usize, const LEN: usize> Mul<[[T; N]; N]>
    for FixedSymmetricMatrix<T, N, LEN>
{
    type Output = Array2<T>;

    fn mul(self, rhs: [[T; N]; N]) -> Array2<T> {
        self.to_dense().dot(&dense::from_array(&rhs))
    }
}
