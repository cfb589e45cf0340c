use ndarray::array;
use rand::{rngs::StdRng, SeedableRng};
use symmat::{
    dense, fixed_symmetric, Error, FixedSymmetricMatrix, PackedSymmetric, SymmetricMatrix,
    SymmetricMatrix3i, SymmetricOps,
};

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn mixed_arithmetic_matches_dense() {
    let mut rng = rng();
    let fixed: fixed_symmetric!(i64, 8) = FixedSymmetricMatrix::random(&mut rng);
    let dynamic = SymmetricMatrix::<i64>::random(8, &mut rng).unwrap();
    let (df, dd) = (fixed.to_dense(), dynamic.to_dense());

    let sum = fixed.try_add(&dynamic).unwrap();
    assert_eq!(sum.to_dense(), &df + &dd);
    let sum = dynamic.try_add(&fixed).unwrap();
    assert_eq!(sum.to_dense(), &dd + &df);

    assert_eq!(fixed.try_sub(&dynamic).unwrap().to_dense(), &df - &dd);
    assert_eq!(fixed.try_mul(&dynamic).unwrap(), df.dot(&dd));
    assert_eq!(dynamic.try_mul(&fixed).unwrap(), dd.dot(&df));
}

#[test]
fn mixed_difference_of_equal_values_is_zero() {
    let mut rng = rng();
    let fixed: fixed_symmetric!(i32, 5) = FixedSymmetricMatrix::random(&mut rng);
    let dynamic = SymmetricMatrix::from(fixed);
    assert!(fixed.try_sub(&dynamic).unwrap().is_zero());
    assert!(dynamic.try_sub(&fixed).unwrap().is_zero());
}

#[test]
fn conversion_between_stores() {
    let dynamic = SymmetricMatrix::from_packed(vec![2, 2, 2, 3, 3, 4]).unwrap();
    let fixed = SymmetricMatrix3i::try_from(&dynamic).unwrap();
    assert_eq!(fixed.as_packed(), dynamic.as_packed());
    assert_eq!(SymmetricMatrix::from(fixed), dynamic);

    let larger = SymmetricMatrix::<i32>::zeros(4);
    assert_eq!(
        SymmetricMatrix3i::try_from(&larger),
        Err(Error::DimensionMismatch {
            op: "conversion",
            left: 3,
            right: 4
        })
    );
}

#[test]
fn dense_operands() {
    let fixed = SymmetricMatrix3i::from_array(&[[1, 2, 3], [2, 4, 5], [3, 5, 6]]);
    let other = array![[1, 0, 0], [5, 1, 0], [6, 7, 1]];

    let sum = fixed.add_dense(&other).unwrap();
    assert_eq!(sum, &fixed.to_dense() + &other);
    assert!(!dense::is_symmetric(&sum));

    let product = fixed.mul_dense(&other).unwrap();
    assert_eq!(product, fixed.to_dense().dot(&other));
    let product = fixed.left_mul_dense(&other).unwrap();
    assert_eq!(product, other.dot(&fixed.to_dense()));
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let mut rng = rng();
    let fixed: fixed_symmetric!(i32, 3) = FixedSymmetricMatrix::random(&mut rng);
    let dynamic = SymmetricMatrix::<i32>::random(4, &mut rng).unwrap();

    assert!(matches!(
        fixed.try_add(&dynamic),
        Err(Error::DimensionMismatch { left: 3, right: 4, .. })
    ));
    assert!(matches!(
        fixed.try_sub(&dynamic),
        Err(Error::DimensionMismatch { left: 3, right: 4, .. })
    ));
    assert!(matches!(
        fixed.try_mul(&dynamic),
        Err(Error::DimensionMismatch { left: 3, right: 4, .. })
    ));
    assert!(matches!(
        dynamic.try_add(&fixed),
        Err(Error::DimensionMismatch { left: 4, right: 3, .. })
    ));
}
