use ndarray::array;
use num_complex::Complex;
use rand::{rngs::StdRng, SeedableRng};
use symmat::{
    dense, PackedSymmetric, SymmetricMatrix, SymmetricMatrix3cf, SymmetricMatrixXcd, SymmetricOps,
};

fn c64(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

#[test]
fn round_trip_mirrors_upper_triangle() {
    let mut rng = StdRng::seed_from_u64(11);
    let source = dense::random::<Complex<f64>, _>(6, 6, &mut rng);
    let matrix = SymmetricMatrixXcd::from_dense(&source).unwrap();
    assert_eq!(matrix.to_dense(), dense::make_symmetric(&source).unwrap());

    let source = dense::random::<Complex<f32>, _>(3, 3, &mut rng);
    let fixed = SymmetricMatrix3cf::from_dense(&source).unwrap();
    assert_eq!(fixed.to_dense(), dense::make_symmetric(&source).unwrap());
}

#[test]
fn arithmetic_matches_dense() {
    let mut rng = StdRng::seed_from_u64(12);
    let a = SymmetricMatrixXcd::random(5, &mut rng).unwrap();
    let b = SymmetricMatrixXcd::random(5, &mut rng).unwrap();
    let (da, db) = (a.to_dense(), b.to_dense());

    assert_eq!(a.try_add(&b).unwrap().to_dense(), &da + &db);
    assert_eq!(a.try_sub(&b).unwrap().to_dense(), &da - &db);
    assert_eq!(a.try_mul(&b).unwrap(), da.dot(&db));
    assert!(a.try_sub(&a).unwrap().is_zero());
}

#[test]
fn fixed_and_dynamic_complex_operands() {
    let mut rng = StdRng::seed_from_u64(13);
    let fixed = SymmetricMatrix3cf::random(&mut rng);
    let dynamic = SymmetricMatrix::<Complex<f32>>::random(3, &mut rng).unwrap();
    let (df, dd) = (fixed.to_dense(), dynamic.to_dense());

    assert_eq!(fixed.try_add(&dynamic).unwrap().to_dense(), &df + &dd);
    assert_eq!(fixed.try_sub(&dynamic).unwrap().to_dense(), &df - &dd);
    assert_eq!(fixed.try_mul(&dynamic).unwrap(), df.dot(&dd));
    assert_eq!((fixed + fixed).to_dense(), &df + &df);
    assert!(fixed
        .as_packed()
        .iter()
        .all(|z| z.re.abs() <= 1.0 && z.im.abs() <= 1.0));
}

#[test]
fn complex_rendering() {
    let elements = vec![c64(1.0, 0.0), c64(0.5, -1.0), c64(2.0, 2.0)];
    let matrix = SymmetricMatrixXcd::from_packed(elements).unwrap();
    assert_eq!(
        format!("{:.1}", matrix),
        "1.0+0.0i 0.5-1.0i\n0.5-1.0i 2.0+2.0i\n"
    );

    let fixed = SymmetricMatrix3cf::from_dense(&array![
        [Complex::new(1.0, 1.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)],
        [Complex::new(9.0, 9.0), Complex::new(2.0, 0.0), Complex::new(0.0, -1.0)],
        [Complex::new(9.0, 9.0), Complex::new(9.0, 9.0), Complex::new(3.0, 0.5)],
    ])
    .unwrap();
    assert_eq!(
        format!("{:.1}", fixed),
        "1.0+1.0i 0.0+0.0i 0.0+0.0i\n0.0+0.0i 2.0+0.0i 0.0-1.0i\n0.0+0.0i 0.0-1.0i 3.0+0.5i\n"
    );
}
