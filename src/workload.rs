//! Нагрузки для сравнения плотных и упакованных матриц
//!
//! Используются бинарником бенчмарков и демонстрацией: готовят пары
//! операндов в обоих представлениях и выполняют над ними одну операцию.

use ndarray::Array2;
use rand::Rng;
use serde::Serialize;

use crate::dense;
use crate::error::Result;
use crate::matrix::operations::SymmetricOps;
use crate::matrix::{PackedSymmetric, SymmetricMatrix};
use crate::scalar::{RandomScalar, Scalar};

/// Измеряемая операция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Сложение
    Add,
    /// Вычитание
    Sub,
    /// Умножение
    Mul,
    /// Чтение всех `n x n` элементов по индексу
    Access,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Access];
}

/// Представление операндов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Две плотные матрицы `ndarray`
    Dense,
    /// Две упакованные матрицы
    Packed,
    /// Упакованная матрица слева, плотная справа
    PackedDense,
}

impl Representation {
    pub const ALL: [Representation; 3] = [Self::Dense, Self::Packed, Self::PackedDense];
}

/// Результат операции в том виде, в котором его вернула библиотека
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Dense(Array2<T>),
    Packed(SymmetricMatrix<T>),
    Scalar(T),
}

impl<T: Scalar> Outcome<T> {
    /// Число элементов, в которых результаты расходятся
    pub fn count_differences(&self, other: &Outcome<T>) -> usize {
        match (self.to_dense(), other.to_dense()) {
            (Some(a), Some(b)) if a.dim() == b.dim() => {
                a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
            }
            (None, None) => usize::from(self != other),
            (Some(a), _) | (_, Some(a)) => a.len(),
        }
    }

    fn to_dense(&self) -> Option<Array2<T>> {
        match self {
            Outcome::Dense(m) => Some(m.clone()),
            Outcome::Packed(m) => Some(m.to_dense()),
            Outcome::Scalar(_) => None,
        }
    }
}

/// Операнды одной размерности в обоих представлениях.
///
/// Плотные матрицы симметричны, поэтому упакованные хранят ту же информацию
/// и результаты всех представлений должны совпадать.
#[derive(Debug, Clone)]
pub struct Operands<T> {
    pub dense_a: Array2<T>,
    pub dense_b: Array2<T>,
    pub packed_a: SymmetricMatrix<T>,
    pub packed_b: SymmetricMatrix<T>,
}

/// Инициализирует операнды заданной размерности случайными значениями
pub fn initialize_operands<T, R>(dim: usize, rng: &mut R) -> Result<Operands<T>>
where
    T: RandomScalar,
    R: Rng + ?Sized,
{
    let dense_a = dense::make_symmetric(&dense::random::<T, _>(dim, dim, rng))?;
    let dense_b = dense::make_symmetric(&dense::random::<T, _>(dim, dim, rng))?;
    let packed_a = SymmetricMatrix::from_dense(&dense_a)?;
    let packed_b = SymmetricMatrix::from_dense(&dense_b)?;
    Ok(Operands {
        dense_a,
        dense_b,
        packed_a,
        packed_b,
    })
}

/// Выполняет одну операцию над операндами в заданном представлении
pub fn apply<T: Scalar>(
    operation: Operation,
    representation: Representation,
    operands: &Operands<T>,
) -> Result<Outcome<T>> {
    let Operands {
        dense_a,
        dense_b,
        packed_a,
        packed_b,
    } = operands;

    let outcome = match (operation, representation) {
        (Operation::Add, Representation::Dense) => Outcome::Dense(dense_a + dense_b),
        (Operation::Add, Representation::Packed) => Outcome::Packed(packed_a.try_add(packed_b)?),
        (Operation::Add, Representation::PackedDense) => {
            Outcome::Dense(packed_a.add_dense(dense_b)?)
        }
        (Operation::Sub, Representation::Dense) => Outcome::Dense(dense_a - dense_b),
        (Operation::Sub, Representation::Packed) => Outcome::Packed(packed_a.try_sub(packed_b)?),
        (Operation::Sub, Representation::PackedDense) => {
            Outcome::Dense(packed_a.sub_dense(dense_b)?)
        }
        (Operation::Mul, Representation::Dense) => Outcome::Dense(dense_a.dot(dense_b)),
        (Operation::Mul, Representation::Packed) => Outcome::Dense(packed_a.try_mul(packed_b)?),
        (Operation::Mul, Representation::PackedDense) => {
            Outcome::Dense(packed_a.mul_dense(dense_b)?)
        }
        (Operation::Access, Representation::Dense) => Outcome::Scalar(dense_access_all(dense_a)),
        (Operation::Access, Representation::Packed | Representation::PackedDense) => {
            Outcome::Scalar(access_all(packed_a))
        }
    };
    Ok(outcome)
}

/// Сумма всех элементов, прочитанных по индексу `(row, col)`
pub fn access_all<T: Scalar, M: PackedSymmetric<T> + ?Sized>(matrix: &M) -> T {
    let n = matrix.dim();
    let mut sum = T::zero();
    for row in 0..n {
        for col in 0..n {
            sum = sum + matrix.get(row, col);
        }
    }
    sum
}

pub fn dense_access_all<T: Scalar>(matrix: &Array2<T>) -> T {
    let (rows, cols) = matrix.dim();
    let mut sum = T::zero();
    for row in 0..rows {
        for col in 0..cols {
            sum = sum + matrix[[row, col]];
        }
    }
    sum
}

/// Сравнивает результат с эталонным и сообщает о расхождениях в лог
pub fn compare_results<T: Scalar>(reference: &Outcome<T>, result: &Outcome<T>) -> bool {
    let diff_count = reference.count_differences(result);
    if diff_count > 0 {
        log::warn!("results differ in {} elements", diff_count);
        false
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn all_representations_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let operands = initialize_operands::<i64, _>(6, &mut rng).unwrap();
        for operation in Operation::ALL {
            let reference = apply(operation, Representation::Dense, &operands).unwrap();
            for representation in Representation::ALL {
                let outcome = apply(operation, representation, &operands).unwrap();
                assert!(
                    compare_results(&reference, &outcome),
                    "{:?} {:?}",
                    operation,
                    representation
                );
            }
        }
    }

    #[test]
    fn differences_are_counted() {
        let a = Outcome::Dense(ndarray::array![[1, 2], [2, 1]]);
        let b = Outcome::Packed(SymmetricMatrix::from_packed(vec![1, 3, 1]).unwrap());
        assert_eq!(a.count_differences(&b), 2);
        assert_eq!(Outcome::Scalar(1).count_differences(&Outcome::Scalar(2)), 1);
    }
}
