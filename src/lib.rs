//! Packed symmetric matrices interoperating with `ndarray`
//!
//! Хранится только верхний треугольник матрицы. Есть два варианта:
//! [`FixedSymmetricMatrix`] с размерностью в типе (буфер внутри значения) и
//! [`SymmetricMatrix`] с размерностью, известной только во время выполнения
//! (буфер в куче). Оба реализуют [`PackedSymmetric`] и [`SymmetricOps`] и могут
//! участвовать в общих операциях, если размерности совпадают.

#[macro_use]
mod macros {
    /// Возвращает [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
    /// из текущей функции, если размерности различаются
    #[macro_export]
    macro_rules! ensure_dim {
        ($op:expr, $left:expr, $right:expr) => {{
            let (left, right): (usize, usize) = ($left, $right);
            if left != right {
                return Err($crate::error::dimension_mismatch($op, left, right));
            }
        }};
    }

    /// Тип симметричной матрицы фиксированной размерности:
    /// `fixed_symmetric!(f64, 5)` это `FixedSymmetricMatrix<f64, 5, 15>`.
    #[macro_export]
    macro_rules! fixed_symmetric {
        ($t:ty, $n:literal) => {
            $crate::FixedSymmetricMatrix<$t, $n, { ($n * $n + $n) / 2 }>
        };
    }
}

pub mod dense;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod utils;
pub mod workload;

pub use error::{Error, Result};
pub use matrix::operations::SymmetricOps;
pub use matrix::{FixedSymmetricMatrix, PackedSymmetric, SymmetricMatrix};
pub use scalar::{RandomScalar, Scalar};

use num_complex::Complex;

pub type SymmetricMatrix2<T> = FixedSymmetricMatrix<T, 2, 3>;
pub type SymmetricMatrix3<T> = FixedSymmetricMatrix<T, 3, 6>;
pub type SymmetricMatrix4<T> = FixedSymmetricMatrix<T, 4, 10>;

pub type SymmetricMatrix2i = SymmetricMatrix2<i32>;
pub type SymmetricMatrix2f = SymmetricMatrix2<f32>;
pub type SymmetricMatrix2d = SymmetricMatrix2<f64>;
pub type SymmetricMatrix2cf = SymmetricMatrix2<Complex<f32>>;
pub type SymmetricMatrix2cd = SymmetricMatrix2<Complex<f64>>;
pub type SymmetricMatrix3i = SymmetricMatrix3<i32>;
pub type SymmetricMatrix3f = SymmetricMatrix3<f32>;
pub type SymmetricMatrix3d = SymmetricMatrix3<f64>;
pub type SymmetricMatrix3cf = SymmetricMatrix3<Complex<f32>>;
pub type SymmetricMatrix3cd = SymmetricMatrix3<Complex<f64>>;
pub type SymmetricMatrix4i = SymmetricMatrix4<i32>;
pub type SymmetricMatrix4f = SymmetricMatrix4<f32>;
pub type SymmetricMatrix4d = SymmetricMatrix4<f64>;
pub type SymmetricMatrix4cf = SymmetricMatrix4<Complex<f32>>;
pub type SymmetricMatrix4cd = SymmetricMatrix4<Complex<f64>>;

pub type SymmetricMatrixXi = SymmetricMatrix<i32>;
pub type SymmetricMatrixXf = SymmetricMatrix<f32>;
pub type SymmetricMatrixXd = SymmetricMatrix<f64>;
pub type SymmetricMatrixXcf = SymmetricMatrix<Complex<f32>>;
pub type SymmetricMatrixXcd = SymmetricMatrix<Complex<f64>>;
