//! Fixed-scenario and seeded-random exercises of the arithmetic surface,
//! reusing output buffers across calls the way long-lived callers do.

use prec_num::BigUint;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_value(rng: &mut StdRng, words: usize) -> BigUint {
    BigUint::from_words((0..words).map(|_| rng.gen()).collect())
}

#[test]
fn basic_operations() {
    let a = BigUint::from(42_u32);
    let b = BigUint::from(17_u32);
    let mut result = BigUint::with_capacity(2);

    a.add_into(&b, &mut result);
    assert_eq!(result.as_words(), [59]);

    a.abs_diff_into(&b, &mut result);
    assert_eq!(result.as_words(), [25]);

    a.mul_into(&b, &mut result);
    assert_eq!(result.as_words(), [714]);
}

#[test]
fn larger_numbers() {
    let a = BigUint::from(0xFFFF_FFFF_u32);
    let b = BigUint::from(0x1_u32);
    let mut result = BigUint::with_capacity(5);

    a.add_into(&b, &mut result);
    assert_eq!(result.as_words(), [0, 1]);

    a.abs_diff_into(&b, &mut result);
    assert_eq!(result.as_words(), [0xFFFF_FFFE]);

    let a = BigUint::from_words(vec![0xFFFF_FFFF, 0xAAAA_AAAA]);
    let b = BigUint::from_words(vec![0x5555_5555, 0x1111_1111]);

    a.add_into(&b, &mut result);
    assert_eq!(result.as_words(), [0x5555_5554, 0xBBBB_BBBC]);

    a.abs_diff_into(&b, &mut result);
    assert_eq!(result.as_words(), [0xAAAA_AAAA, 0x9999_9999]);
}

#[test]
fn subtraction_order_does_not_matter() {
    let a = BigUint::from(1000_u32);
    let b = BigUint::from(1_u32);
    assert_eq!(a.abs_diff(&b), b.abs_diff(&a));
    assert_eq!(a.abs_diff(&b).as_words(), [999]);
}

#[test]
fn subtraction_with_borrow() {
    // one borrow across a word boundary
    let a = BigUint::from_words(vec![0x0000_0000, 0x0000_0001]);
    let b = BigUint::from(0x0000_0001_u32);
    assert_eq!(a.abs_diff(&b).as_words(), [0xFFFF_FFFF]);

    // borrow cascading through two words
    let a = BigUint::from_words(vec![0, 0, 0x0000_0001]);
    let b = BigUint::from(0x0000_0001_u32);
    assert_eq!(a.abs_diff(&b).as_words(), [0xFFFF_FFFF, 0xFFFF_FFFF]);
}

#[test]
fn division() {
    let mut quotient = BigUint::with_capacity(5);
    let mut remainder = BigUint::with_capacity(5);
    let mut check = BigUint::with_capacity(5);

    // 100 / 7 = 14 remainder 2
    let dividend = BigUint::from(100_u32);
    let divisor = BigUint::from(7_u32);
    dividend
        .div_rem_into(&divisor, &mut quotient, &mut remainder)
        .unwrap();
    assert_eq!(quotient.as_words(), [14]);
    assert_eq!(remainder.as_words(), [2]);

    // 0xFFFFFFFF / 0x10000, verified by multiplying back
    let dividend = BigUint::from(0xFFFF_FFFF_u32);
    let divisor = BigUint::from(0x10000_u32);
    dividend
        .div_rem_into(&divisor, &mut quotient, &mut remainder)
        .unwrap();
    quotient.mul_into(&divisor, &mut check);
    check += &remainder;
    assert_eq!(check, dividend);

    // 0x123456789ABCDEF0 / 0x1000
    let dividend = BigUint::from(0x1234_5678_9ABC_DEF0_u64);
    let divisor = BigUint::from(0x1000_u32);
    dividend
        .div_rem_into(&divisor, &mut quotient, &mut remainder)
        .unwrap();
    quotient.mul_into(&divisor, &mut check);
    check += &remainder;
    assert_eq!(check, dividend);

    // multi-word divisor
    let dividend = BigUint::from_words(vec![0xFFFF_FFFF, 0xFFFF_FFFF, 0x1234_5678]);
    let divisor = BigUint::from_words(vec![0x8765_4321, 0x1111_1111]);
    dividend
        .div_rem_into(&divisor, &mut quotient, &mut remainder)
        .unwrap();
    quotient.mul_into(&divisor, &mut check);
    check += &remainder;
    assert_eq!(check, dividend);
    assert!(remainder < divisor);

    // division by zero
    assert!(dividend
        .div_rem_into(&BigUint::ZERO, &mut quotient, &mut remainder)
        .is_err());

    // dividend smaller than divisor
    let dividend = BigUint::from(5_u32);
    let divisor = BigUint::from(10_u32);
    dividend
        .div_rem_into(&divisor, &mut quotient, &mut remainder)
        .unwrap();
    assert!(quotient.is_zero());
    assert_eq!(remainder.as_words(), [5]);
}

#[test]
fn modular_operations() {
    let mut result = BigUint::with_capacity(3);
    let mut quotient = BigUint::with_capacity(3);
    let mut product = BigUint::with_capacity(5);

    // 100 % 7 = 2, cross-checked against a - (a / m) * m
    let a = BigUint::from(100_u32);
    let m = BigUint::from(7_u32);
    a.rem_into(&m, &mut result).unwrap();
    assert_eq!(result.as_words(), [2]);

    a.div_into(&m, &mut quotient).unwrap();
    quotient.mul_into(&m, &mut product);
    assert_eq!(a.abs_diff(&product), result);

    // 0xFFFFFFFF % 0x10000 = 0xFFFF
    let a = BigUint::from(0xFFFF_FFFF_u32);
    let m = BigUint::from(0x10000_u32);
    a.rem_into(&m, &mut result).unwrap();
    assert_eq!(result.as_words(), [0xFFFF]);

    a.div_into(&m, &mut quotient).unwrap();
    quotient.mul_into(&m, &mut product);
    assert_eq!(a.abs_diff(&product), result);

    // modulo by zero fails
    assert!(a.rem_into(&BigUint::ZERO, &mut result).is_err());

    // dividend smaller than modulus
    let a = BigUint::from(5_u32);
    let m = BigUint::from(10_u32);
    a.rem_into(&m, &mut result).unwrap();
    assert_eq!(result.as_words(), [5]);
}

#[test]
fn random_division() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut quotient = BigUint::new();
    let mut remainder = BigUint::new();
    let mut verification = BigUint::new();

    for _ in 0..10 {
        let dividend_words = rng.gen_range(8..=96);
        let divisor_words = rng.gen_range(1..=dividend_words / 2 + 1);

        let mut dividend = random_value(&mut rng, dividend_words);
        let mut divisor = random_value(&mut rng, divisor_words);
        if divisor.is_zero() {
            divisor.set_u32(rng.gen_range(1..=1000));
        }
        if dividend < divisor {
            std::mem::swap(&mut dividend, &mut divisor);
        }

        dividend
            .div_rem_into(&divisor, &mut quotient, &mut remainder)
            .unwrap();

        quotient.mul_into(&divisor, &mut verification);
        verification += &remainder;
        assert_eq!(verification, dividend);
        assert!(remainder < divisor);
    }
}

#[test]
fn random_modular() {
    let mut rng = StdRng::seed_from_u64(54321);
    let mut mod_result = BigUint::new();
    let mut quotient = BigUint::new();
    let mut verification = BigUint::new();

    for _ in 0..10 {
        let dividend_words = rng.gen_range(8..=96);
        let divisor_words = rng.gen_range(1..=dividend_words / 2 + 1);

        let dividend = random_value(&mut rng, dividend_words);
        let mut divisor = random_value(&mut rng, divisor_words);
        if divisor.is_zero() {
            divisor.set_u32(rng.gen_range(1..=1000));
        }

        dividend.rem_into(&divisor, &mut mod_result).unwrap();

        // dividend - (dividend / divisor) * divisor == dividend % divisor
        dividend.div_into(&divisor, &mut quotient).unwrap();
        quotient.mul_into(&divisor, &mut verification);
        verification.abs_diff_assign(&dividend);
        assert_eq!(verification, mod_result);
        assert!(mod_result < divisor);
    }
}
