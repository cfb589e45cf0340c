//! Пример использования библиотеки

use anyhow::{Context, Result};
use ndarray::array;
use num_complex::Complex;
use rand::{rngs::StdRng, SeedableRng};
use symmat::{
    dense, fixed_symmetric, Error, FixedSymmetricMatrix, PackedSymmetric, SymmetricMatrix,
    SymmetricMatrix3d, SymmetricMatrix3i, SymmetricMatrixXd, SymmetricMatrixXi, SymmetricOps,
};

const SEED: u64 = 2018;

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(SEED);

    println!("Построение симметричной матрицы из плотной");
    let dense_matrix = array![[1, 2, 3], [1, 2, 3], [1, 2, 3]];
    let from_dense = SymmetricMatrixXi::from_dense(&dense_matrix)?;
    println!("Плотная матрица:\n{}\n", dense_matrix);
    println!("Хранится только верхний треугольник: {:?}", from_dense.as_packed());
    println!("Восстановленная матрица:\n{}", from_dense);
    println!(
        "Исходная матрица симметрична: {}, восстановленная: {}\n",
        dense::is_symmetric(&dense_matrix),
        dense::is_symmetric(&from_dense.to_dense())
    );

    println!("Построение из упакованного списка");
    let from_packed = SymmetricMatrix::from_packed(vec![2, 2, 2, 3, 3, 4])?;
    println!(
        "Размерность {} восстановлена по длине {}:\n{}",
        from_packed.dim(),
        from_packed.len(),
        from_packed
    );

    println!("Случайные матрицы");
    let fixed_random = SymmetricMatrix3d::random(&mut rng);
    let dynamic_random = SymmetricMatrixXi::random(3, &mut rng)?;
    let complex_random = SymmetricMatrix::<Complex<f64>>::random(2, &mut rng)?;
    println!("Фиксированная размерность, f64:\n{:.3}", fixed_random);
    println!("Динамическая размерность, i32:\n{}", dynamic_random);
    println!("Комплексные элементы:\n{:.2}", complex_random);

    println!("Сложение и вычитание");
    let fixed = SymmetricMatrix3i::from_array(&[[1, 2, 3], [2, 3, 3], [3, 3, 4]]);
    let sum = fixed + fixed;
    let difference = sum - fixed;
    println!("{}+\n{}=\n{}", fixed, fixed, sum);
    println!("{}-\n{}=\n{}", sum, fixed, difference);

    let mixed = fixed.try_add(&dynamic_random)?;
    println!("Фиксированная + динамическая:\n{}", mixed);

    let plain = [[1, 0, 0], [5, 1, 0], [6, 7, 1]];
    let dense_sum = fixed + plain;
    println!(
        "Симметричная + плотная (результат плотный и не обязательно симметричный):\n{:?}\n",
        dense_sum
    );

    println!("Умножение");
    let dense_f64 = array![[1.0, 2.0, 3.0], [2.0, 3.0, 4.0], [3.0, 4.0, 5.0]];
    let dynamic_f64 = SymmetricMatrixXd::from_dense(&dense_f64)?;
    let fixed_f64: fixed_symmetric!(f64, 3) = FixedSymmetricMatrix::from_dense(&dense_f64)?;
    let product = fixed_f64.try_mul(&dynamic_f64)?;
    println!("Симметричная * симметричная:\n{}\n", product);
    let product = fixed_f64.mul_dense(&dense_f64)?;
    println!("Симметричная * плотная:\n{}\n", product);

    println!("Обработка ошибок");
    let small = SymmetricMatrixXi::random(2, &mut rng)?;
    let large = SymmetricMatrixXi::random(3, &mut rng)?;
    report(small.try_add(&large).map(|_| ()));
    report(SymmetricMatrixXi::from_dense(&array![[1, 2, 3], [4, 5, 6]]).map(|_| ()));
    report(SymmetricMatrixXi::random(-1, &mut rng).map(|_| ()));
    report(SymmetricMatrixXi::from_packed(vec![1, 2, 3, 4]).map(|_| ()));

    // Несовпадение фиксированных размерностей не компилируется:
    // SymmetricMatrix2i::random(&mut rng) + SymmetricMatrix3i::random(&mut rng)

    let checked = small
        .try_mul(&large)
        .context("multiplication of 2x2 and 3x3 matrices");
    if let Err(e) = checked {
        println!("  {:#}", e);
    }

    Ok(())
}

fn report(result: std::result::Result<(), Error>) {
    match result {
        Ok(()) => println!("  ошибки нет"),
        Err(e) => println!("  {}", e),
    }
}
