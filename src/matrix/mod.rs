//! Модуль для работы с симметричными матрицами
//!
//! Предоставляет:
//! - Отображение индексов `(row, col)` в упакованный буфер
//! - Матрицы фиксированной и динамической размерности
//! - Операции над матрицами, в том числе смешанные с `ndarray`
//!
//! Хранится только верхний треугольник (`row <= col`), построчно: для строки
//! `r` подряд лежат столбцы `r..n`. Элемент `(r, c)` при `r > c` берётся из
//! той же ячейки, что и `(c, r)`, поэтому симметрия обеспечена самой схемой
//! хранения.

use std::fmt;

use ndarray::Array2;

use crate::scalar::Scalar;

mod dynamic;
mod fixed;
pub mod operations;

pub use dynamic::SymmetricMatrix;
pub use fixed::FixedSymmetricMatrix;

/// Число элементов верхнего треугольника матрицы `n x n`
#[inline]
pub const fn packed_len(n: usize) -> usize {
    (n * n + n) / 2
}

/// Как [`packed_len`], но возвращает `None` при переполнении `usize`
#[inline]
pub const fn checked_packed_len(n: usize) -> Option<usize> {
    match n.checked_mul(n) {
        Some(square) => match square.checked_add(n) {
            Some(sum) => Some(sum / 2),
            None => None,
        },
        None => None,
    }
}

/// Смещение элемента `(row, col)` в упакованном буфере матрицы размерности `n`.
///
/// # Panics
///
/// Если `row >= n` или `col >= n`.
#[inline]
pub fn packed_index(row: usize, col: usize, n: usize) -> usize {
    match checked_packed_index(row, col, n) {
        Some(index) => index,
        None => panic!(
            "index ({}, {}) out of bounds for symmetric matrix of dimension {}",
            row, col, n
        ),
    }
}

/// Как [`packed_index`], но возвращает `None` вне границ.
#[inline]
pub fn checked_packed_index(row: usize, col: usize, n: usize) -> Option<usize> {
    if row >= n || col >= n {
        return None;
    }
    let (r, c) = if row <= col { (row, col) } else { (col, row) };
    // r*n - r*(r-1)/2 + (c-r), записано без вычитания при r = 0
    Some(r * n - r * r.saturating_sub(1) / 2 + (c - r))
}

/// Восстанавливает размерность по длине упакованного буфера.
///
/// Возвращает `None`, если `len` не треугольное число.
pub fn dimension_from_len(len: usize) -> Option<usize> {
    // в u128: рядом с usize::MAX значение n² не помещается в usize
    let triangular = |n: usize| (n as u128 * n as u128 + n as u128) / 2;
    let target = len as u128;

    // n = (sqrt(8*len + 1) - 1) / 2, затем уточняем целочисленно
    let mut n = (((8.0 * len as f64 + 1.0).sqrt() - 1.0) / 2.0) as usize;
    while triangular(n) > target {
        n -= 1;
    }
    while triangular(n + 1) <= target {
        n += 1;
    }
    (triangular(n) == target).then_some(n)
}

/// Пары `(row, col)` верхнего треугольника в порядке хранения
pub fn upper_triangle(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |row| (row..n).map(move |col| (row, col)))
}

/// Общий набор возможностей упакованных симметричных матриц.
///
/// Реализуется матрицами фиксированной и динамической размерности; через
/// него работают смешанные операции из [`operations`].
///
/// Экземпляр не синхронизирован: запись через [`set`](Self::set) требует
/// `&mut`, разделять матрицу между потоками для записи нужно снаружи.
pub trait PackedSymmetric<T: Scalar> {
    /// Размерность матрицы
    fn dim(&self) -> usize;

    /// Упакованный верхний треугольник
    fn as_packed(&self) -> &[T];

    fn as_packed_mut(&mut self) -> &mut [T];

    /// Число хранимых элементов, `(n² + n) / 2`
    fn len(&self) -> usize {
        self.as_packed().len()
    }

    fn is_empty(&self) -> bool {
        self.dim() == 0
    }

    /// Значение элемента `(row, col)`.
    ///
    /// # Panics
    ///
    /// Если индекс выходит за границы матрицы.
    fn get(&self, row: usize, col: usize) -> T {
        self.as_packed()[packed_index(row, col, self.dim())]
    }

    fn try_get(&self, row: usize, col: usize) -> Option<T> {
        checked_packed_index(row, col, self.dim()).map(|i| self.as_packed()[i])
    }

    /// Записывает значение в `(row, col)` и, тем самым, в `(col, row)`.
    ///
    /// # Panics
    ///
    /// Если индекс выходит за границы матрицы.
    fn set(&mut self, row: usize, col: usize, value: T) {
        let index = packed_index(row, col, self.dim());
        self.as_packed_mut()[index] = value;
    }

    /// Строит полную плотную матрицу, копируя каждый элемент в `(i, j)` и `(j, i)`
    fn to_dense(&self) -> Array2<T> {
        let n = self.dim();
        let mut dense = Array2::zeros((n, n));
        for ((i, j), &value) in upper_triangle(n).zip(self.as_packed()) {
            dense[[i, j]] = value;
            dense[[j, i]] = value;
        }
        dense
    }

    /// Все элементы равны нулю
    fn is_zero(&self) -> bool {
        self.as_packed().iter().all(|x| x.is_zero())
    }
}

/// Печатает все `n x n` элементов построчно, через пробел, каждая строка
/// завершается `\n`. Точность форматтера применяется к каждому элементу.
pub(crate) fn render<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    matrix: &impl PackedSymmetric<T>,
) -> fmt::Result {
    let n = matrix.dim();
    for row in 0..n {
        for col in 0..n {
            if col > 0 {
                f.write_str(" ")?;
            }
            let value = matrix.get(row, col);
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, value)?,
                None => write!(f, "{}", value)?,
            }
        }
        f.write_str("\n")?;
    }
    Ok(())
}
