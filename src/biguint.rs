//! # BigUint
//! Mutable unbounded unsigned integers over little-endian base-2³² digits.
//! Every arithmetic operation has a buffer-reusing `*_into` form writing a
//! caller-supplied output and an operator form allocating a fresh value;
//! compound assignment operators update in place.

use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::fmt;
use std::ops::{
    Add, AddAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
};

use crate::arith;
use crate::error::DivideByZero;

/// An unsigned integer of unbounded width.
///
/// The digit buffer holds the significant words only, least significant
/// first, with no trailing zero words (the value zero is an empty buffer).
/// Allocated capacity beyond the significant words is retained across
/// operations and never shrinks.
#[derive(Clone, Default)]
pub struct BigUint {
    words: Vec<u32>,
}

// construction and buffer management
impl BigUint {
    /// The value zero. Allocates nothing.
    pub const ZERO: BigUint = BigUint { words: Vec::new() };

    /// Creates the value zero.
    pub fn new() -> Self {
        BigUint { words: Vec::new() }
    }

    /// Creates the value zero with room for at least `words` digits.
    /// A hint of zero still reserves one word.
    pub fn with_capacity(words: usize) -> Self {
        BigUint { words: Vec::with_capacity(words.max(1)) }
    }

    /// Takes ownership of a raw little-endian digit buffer. Trailing zero
    /// words are trimmed on entry, so any `Vec<u32>` is a valid input.
    pub fn from_words(mut words: Vec<u32>) -> Self {
        arith::trim(&mut words);
        BigUint { words }
    }

    /// Sets `self` to zero. The allocation is kept.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Sets `self` to the value of `src`, growing the digit buffer if `src`
    /// has more significant words than fit, never shrinking it.
    pub fn assign(&mut self, src: &BigUint) {
        self.words.clear();
        self.words.extend_from_slice(&src.words);
    }

    /// Sets `self` to a single machine word. Zero clears.
    pub fn set_u32(&mut self, val: u32) {
        self.words.clear();
        if val != 0 {
            self.words.push(val);
        }
    }

    /// Trims trailing zero words until the top word is non-zero or the
    /// length reaches zero. Public operations leave their results in this
    /// form already; only buffers built by hand need it.
    pub fn normalize(&mut self) {
        arith::trim(&mut self.words);
    }

    /// Fallibly reserves room for `additional` more digit words, for
    /// callers that want to reject oversized operands up front instead of
    /// aborting on allocation failure mid-operation.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.words.try_reserve(additional)
    }
}

// queries
impl BigUint {
    /// Count of significant words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Count of words the digit buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// The significant words, least significant first.
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }

    /// Bit `i` of the value; false beyond the top word.
    pub fn bit(&self, i: usize) -> bool {
        match self.words.get(i / u32::BITS as usize) {
            Some(&w) => (w >> (i % u32::BITS as usize)) & 1 != 0,
            None => false,
        }
    }

    /// Position of the highest set bit plus one; zero for the value zero.
    pub fn bit_len(&self) -> usize {
        match self.words.last() {
            Some(&top) => {
                ((self.words.len() - 1) << 5) + (u32::BITS - top.leading_zeros()) as usize
            }
            None => 0,
        }
    }

    /// The value as a `u64` if it fits in two words.
    pub fn to_u64(&self) -> Option<u64> {
        match *self.words.as_slice() {
            [] => Some(0),
            [lo] => Some(lo as u64),
            [lo, hi] => Some((hi as u64) << u32::BITS | lo as u64),
            _ => None,
        }
    }
}

// scalar conversions
macro_rules! impl_small_uint_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            let mut n = BigUint::new();
            n.set_u32(val as u32);
            n
        }
    }
    )*
    };
}
impl_small_uint_to_big_uint!(u8, u16, u32);

impl From<u64> for BigUint {
    fn from(val: u64) -> Self {
        BigUint::from_words(vec![val as u32, (val >> u32::BITS) as u32])
    }
}

impl From<usize> for BigUint {
    fn from(val: usize) -> Self {
        BigUint::from(val as u64)
    }
}

// comparison, pure: effective lengths are computed by skipping trailing
// zero words, neither operand is touched
impl PartialEq for BigUint {
    fn eq(&self, other: &Self) -> bool {
        arith::cmp_slice(&self.words, &other.words).is_eq()
    }
}
impl Eq for BigUint {}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        arith::cmp_slice(&self.words, &other.words)
    }
}

// printing, diagnostics only: hexadecimal, most significant word first,
// every word zero-padded to 8 digits
impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self)
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        if self.words.is_empty() {
            return f.write_str("0");
        }
        for &w in self.words.iter().rev() {
            write!(f, "{:08x}", w)?;
        }
        Ok(())
    }
}

// the buffer-reusing operation family: `out` is grown as required, never
// shrunk, and left normalized
impl BigUint {
    /// `out = self + other`.
    pub fn add_into(&self, other: &BigUint, out: &mut BigUint) {
        arith::add(&self.words, &other.words, &mut out.words);
    }

    /// `out = |self - other|`.
    pub fn abs_diff_into(&self, other: &BigUint, out: &mut BigUint) {
        arith::abs_diff(&self.words, &other.words, &mut out.words);
    }

    /// `out = self * other`.
    pub fn mul_into(&self, other: &BigUint, out: &mut BigUint) {
        arith::mul3(&self.words, &other.words, &mut out.words);
    }

    /// `out = self << bits`.
    pub fn shl_into(&self, bits: u32, out: &mut BigUint) {
        arith::shl(&self.words, bits, &mut out.words);
    }

    /// Computes `quotient = self / divisor` and `remainder = self % divisor`
    /// in one pass of bit-serial long division.
    ///
    /// For every `Ok` return, `quotient * divisor + remainder == self` and
    /// `remainder < divisor`. On [`DivideByZero`] both outputs are left
    /// unspecified.
    pub fn div_rem_into(
        &self,
        divisor: &BigUint,
        quotient: &mut BigUint,
        remainder: &mut BigUint,
    ) -> Result<(), DivideByZero> {
        if divisor.is_zero() {
            return Err(DivideByZero);
        }
        if *self < *divisor {
            quotient.clear();
            remainder.assign(self);
            return Ok(());
        }
        arith::div_rem(
            &self.words,
            &divisor.words,
            &mut quotient.words,
            &mut remainder.words,
        );
        Ok(())
    }

    /// `quotient = self / divisor`, discarding the remainder into scratch.
    pub fn div_into(&self, divisor: &BigUint, quotient: &mut BigUint) -> Result<(), DivideByZero> {
        let mut scratch = BigUint::with_capacity(self.len());
        self.div_rem_into(divisor, quotient, &mut scratch)
    }

    /// `remainder = self % divisor`, discarding the quotient into scratch.
    pub fn rem_into(&self, divisor: &BigUint, remainder: &mut BigUint) -> Result<(), DivideByZero> {
        let mut scratch = BigUint::with_capacity(self.len());
        self.div_rem_into(divisor, &mut scratch, remainder)
    }

    /// Allocating form of [`div_rem_into`](BigUint::div_rem_into).
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint), DivideByZero> {
        let mut quotient = BigUint::with_capacity(self.len());
        let mut remainder = BigUint::with_capacity(self.len() + 1);
        self.div_rem_into(divisor, &mut quotient, &mut remainder)?;
        Ok((quotient, remainder))
    }
}

// absolute difference: deliberately not bound to the `-` operator, which
// would let `a - b` silently compute `b - a`
impl BigUint {
    /// `|self - other|`.
    pub fn abs_diff(&self, other: &BigUint) -> BigUint {
        let mut out = BigUint::new();
        self.abs_diff_into(other, &mut out);
        out
    }

    /// `self = |self - other|` in place. Each column is read before it is
    /// written, low to high, in both subtraction directions.
    pub fn abs_diff_assign(&mut self, other: &BigUint) {
        if *self >= *other {
            arith::sub2(&mut self.words, &other.words);
        } else {
            arith::sub2rev(&mut self.words, &other.words);
        }
    }
}

// addition
impl Add for BigUint {
    type Output = BigUint;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = BigUint::with_capacity(self.len().max(rhs.len()) + 1);
        self.add_into(rhs, &mut out);
        out
    }
}

impl AddAssign for BigUint {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        arith::add2(&mut self.words, &rhs.words);
    }
}

// multiplication
impl Mul for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = BigUint::with_capacity(self.len() + rhs.len());
        self.mul_into(rhs, &mut out);
        out
    }
}

impl MulAssign for BigUint {
    fn mul_assign(&mut self, rhs: Self) {
        *self *= &rhs;
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = &*self * rhs;
    }
}

// division and remainder operators: panic on a zero divisor; the
// `Result`-returning methods are the non-panicking API
impl Div for BigUint {
    type Output = BigUint;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div for &BigUint {
    type Output = BigUint;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        let mut quotient = BigUint::with_capacity(self.len());
        match self.div_into(rhs, &mut quotient) {
            Ok(()) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl DivAssign for BigUint {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&BigUint> for BigUint {
    fn div_assign(&mut self, rhs: &BigUint) {
        *self = &*self / rhs;
    }
}

impl Rem for BigUint {
    type Output = BigUint;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl Rem for &BigUint {
    type Output = BigUint;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        let mut remainder = BigUint::with_capacity(self.len() + 1);
        match self.rem_into(rhs, &mut remainder) {
            Ok(()) => remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

impl RemAssign for BigUint {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}

impl RemAssign<&BigUint> for BigUint {
    fn rem_assign(&mut self, rhs: &BigUint) {
        *self = &*self % rhs;
    }
}

// left shift
impl Shl<u32> for BigUint {
    type Output = BigUint;

    fn shl(mut self, n: u32) -> Self::Output {
        self <<= n;
        self
    }
}

impl Shl<u32> for &BigUint {
    type Output = BigUint;

    fn shl(self, n: u32) -> Self::Output {
        let mut out = BigUint::new();
        self.shl_into(n, &mut out);
        out
    }
}

impl ShlAssign<u32> for BigUint {
    fn shl_assign(&mut self, n: u32) {
        arith::shl2(&mut self.words, n);
    }
}

#[test]
fn test_construction() {
    assert!(BigUint::new().is_zero());
    assert!(BigUint::ZERO.is_zero());
    assert_eq!(BigUint::with_capacity(0).capacity(), 1);
    assert_eq!(BigUint::from(0_u32), BigUint::ZERO);
    assert_eq!(BigUint::from(42_u8).as_words(), [42]);
    assert_eq!(
        BigUint::from(0x1234_5678_9ABC_DEF0_u64).as_words(),
        [0x9ABC_DEF0, 0x1234_5678]
    );
    assert_eq!(BigUint::from_words(vec![7, 0, 0]).as_words(), [7]);
}

#[test]
fn test_assign_keeps_capacity() {
    let mut a = BigUint::with_capacity(8);
    let cap = a.capacity();
    a.assign(&BigUint::from(99_u32));
    assert_eq!(a.as_words(), [99]);
    assert_eq!(a.capacity(), cap);

    a.clear();
    assert!(a.is_zero());
    assert_eq!(a.capacity(), cap);
}

#[test]
fn test_set_u32() {
    let mut a = BigUint::from(0xFFFF_FFFF_FFFF_FFFF_u64);
    a.set_u32(5);
    assert_eq!(a.as_words(), [5]);
    a.set_u32(0);
    assert!(a.is_zero());
}

#[test]
fn test_ordering_is_pure() {
    let a = BigUint::from_words(vec![1, 0, 0, 0]);
    let b = BigUint::from(2_u32);
    assert!(a < b);
    assert!(b > a);
    assert_eq!(a, BigUint::from(1_u32));
    assert!(BigUint::ZERO < a);
}

#[test]
fn test_bits() {
    let a = BigUint::from(0x8000_0000_u32);
    assert_eq!(a.bit_len(), 32);
    assert!(a.bit(31));
    assert!(!a.bit(30));
    assert!(!a.bit(64));
    assert_eq!(BigUint::ZERO.bit_len(), 0);
    assert_eq!(BigUint::from(1_u64 << 40).bit_len(), 41);
}

#[test]
fn test_to_u64() {
    assert_eq!(BigUint::ZERO.to_u64(), Some(0));
    assert_eq!(BigUint::from(123_456_789_110_u64).to_u64(), Some(123_456_789_110));
    assert_eq!(BigUint::from_words(vec![0, 0, 1]).to_u64(), None);
}

#[test]
fn test_hex_format() {
    assert_eq!(format!("{:?}", BigUint::ZERO), "0x0");
    assert_eq!(format!("{:?}", BigUint::from(42_u32)), "0x0000002a");
    let two_words = BigUint::from_words(vec![0x9ABC_DEF0, 0x0000_0001]);
    assert_eq!(format!("{:?}", two_words), "0x000000019abcdef0");
    assert_eq!(format!("{:x}", two_words), "000000019abcdef0");
    assert_eq!(format!("{:#x}", two_words), "0x000000019abcdef0");
}

#[test]
fn test_operator_surface() {
    let a = BigUint::from(42_u32);
    let b = BigUint::from(17_u32);
    assert_eq!(&a + &b, BigUint::from(59_u32));
    assert_eq!(a.abs_diff(&b), BigUint::from(25_u32));
    assert_eq!(&a * &b, BigUint::from(714_u32));
    assert_eq!(&a / &b, BigUint::from(2_u32));
    assert_eq!(&a % &b, BigUint::from(8_u32));
    assert_eq!(&a << 1, BigUint::from(84_u32));

    let mut c = a.clone();
    c += &b;
    c *= &b;
    c <<= 32;
    assert_eq!(c, BigUint::from(59_u64 * 17 << 32));
    c /= BigUint::from(17_u32);
    assert_eq!(c, BigUint::from(59_u64 << 32));
}

#[test]
fn test_abs_diff_assign_both_directions() {
    let mut a = BigUint::from(1000_u32);
    a.abs_diff_assign(&BigUint::from(1_u32));
    assert_eq!(a, BigUint::from(999_u32));

    let mut a = BigUint::from(1_u32);
    a.abs_diff_assign(&BigUint::from(1000_u32));
    assert_eq!(a, BigUint::from(999_u32));

    let mut a = BigUint::from(5_u32);
    a.abs_diff_assign(&BigUint::from(5_u32));
    assert!(a.is_zero());
}

#[test]
fn test_div_rem_errors_and_fast_path() {
    let a = BigUint::from(5_u32);
    assert_eq!(a.div_rem(&BigUint::ZERO), Err(DivideByZero));

    let (q, r) = a.div_rem(&BigUint::from(10_u32)).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, a);
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = &BigUint::from(5_u32) / &BigUint::ZERO;
}
