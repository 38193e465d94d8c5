//! # prec_num
//! Unsigned arbitrary-precision integers over base-2³² digits. \
//! This crate provides:
//! - [`BigUint`]: a mutable unbounded unsigned integer supporting addition,
//!   absolute difference, multiplication, bit-serial division with remainder
//!   and left shift, plus buffer-reusing `*_into` forms of each.
//! - [`DivideByZero`]: the fault returned when a divisor is zero.
//! # Example
//! ```
//! use prec_num::BigUint;
//!
//! let a = BigUint::from(0xFFFF_FFFF_u32);
//! let b = BigUint::from(7_u32);
//! println!("a + b = {:?}", &a + &b);
//! println!("|a - b| = {:?}", a.abs_diff(&b));
//! println!("a * b = {:?}", &a * &b);
//! let (q, r) = a.div_rem(&b).unwrap();
//! println!("a / b = {:?}, a % b = {:?}", q, r);
//! println!("a << 10 = {:?}", &a << 10);
//! ```

mod arith;
mod biguint;
mod error;

pub use biguint::BigUint;
pub use error::DivideByZero;
