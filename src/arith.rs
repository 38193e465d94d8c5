//! Word-level kernels over little-endian base-2³² digit buffers.
//!
//! Slices passed in are read as values: words above the last non-zero word
//! carry no meaning, so every kernel that compares works over the effective
//! length instead of the physical one. Kernels that produce a buffer leave
//! it trimmed (no trailing zero words).

use std::cmp::Ordering;

/// Drop trailing zero words until the top word is non-zero or the buffer is
/// empty (the canonical form of the value zero).
pub(crate) fn trim(w: &mut Vec<u32>) {
    while let Some(&0) = w.last() {
        w.pop();
    }
}

/// Length of the value in words, ignoring trailing zero words.
pub(crate) fn eff_len(w: &[u32]) -> usize {
    let mut len = w.len();
    while len > 0 && w[len - 1] == 0 {
        len -= 1;
    }
    len
}

/// Compare two digit buffers as values. Does not mutate either operand.
pub(crate) fn cmp_slice(a: &[u32], b: &[u32]) -> Ordering {
    let a_len = eff_len(a);
    let b_len = eff_len(b);
    if a_len != b_len {
        return a_len.cmp(&b_len);
    }
    for i in (0..a_len).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

/// `out = a + b`. Ripple carry over `max(len, len)` columns, missing words
/// read as zero, one extra word for a surviving carry.
pub(crate) fn add(a: &[u32], b: &[u32], out: &mut Vec<u32>) {
    let max = a.len().max(b.len());
    out.clear();
    out.reserve(max + 1);
    let mut sum: u64 = 0;
    for i in 0..max {
        let av = a.get(i).copied().unwrap_or(0) as u64;
        let bv = b.get(i).copied().unwrap_or(0) as u64;
        sum = av + bv + (sum >> u32::BITS);
        out.push(sum as u32);
    }
    if sum >> u32::BITS != 0 {
        out.push(1);
    }
    trim(out);
}

/// `acc += b` in place. Columns are written low to high after both source
/// words of the column are read, so `acc` serving as a source is sound.
pub(crate) fn add2(acc: &mut Vec<u32>, b: &[u32]) {
    let max = acc.len().max(b.len());
    acc.resize(max, 0);
    let mut sum: u64 = 0;
    for i in 0..max {
        let bv = b.get(i).copied().unwrap_or(0) as u64;
        sum = acc[i] as u64 + bv + (sum >> u32::BITS);
        acc[i] = sum as u32;
    }
    if sum >> u32::BITS != 0 {
        acc.push(1);
    }
    trim(acc);
}

/// `out = |a - b|`. The wider value is found by comparison first, then the
/// smaller is subtracted from it with an `i64` borrow: the arithmetic shift
/// of a negative difference yields the -1 consumed by the next column.
pub(crate) fn abs_diff(a: &[u32], b: &[u32], out: &mut Vec<u32>) {
    let (big, small) = match cmp_slice(a, b) {
        Ordering::Less => (b, a),
        _ => (a, b),
    };
    out.clear();
    out.reserve(big.len());
    let mut diff: i64 = 0;
    for i in 0..big.len() {
        let sv = small.get(i).copied().unwrap_or(0);
        diff = big[i] as i64 - sv as i64 + (diff >> u32::BITS);
        out.push(diff as u32);
    }
    trim(out);
}

/// `acc -= small` in place. Caller guarantees `acc >= small` as values.
pub(crate) fn sub2(acc: &mut Vec<u32>, small: &[u32]) {
    let mut diff: i64 = 0;
    for (i, w) in acc.iter_mut().enumerate() {
        let sv = small.get(i).copied().unwrap_or(0);
        diff = *w as i64 - sv as i64 + (diff >> u32::BITS);
        *w = diff as u32;
    }
    trim(acc);
}

/// `acc = big - acc` in place. Caller guarantees `big >= acc` as values.
pub(crate) fn sub2rev(acc: &mut Vec<u32>, big: &[u32]) {
    acc.resize(big.len(), 0);
    let mut diff: i64 = 0;
    for (i, w) in acc.iter_mut().enumerate() {
        diff = big[i] as i64 - *w as i64 + (diff >> u32::BITS);
        *w = diff as u32;
    }
    trim(acc);
}

/// `out = a * b`, schoolbook. The output is exactly `len(a) + len(b)` words
/// and must start zeroed because each column accumulates contributions from
/// several outer iterations. The leftover carry of outer row `i` lands in
/// column `i + len(b)`, which no earlier row has touched, so it is stored
/// rather than added.
pub(crate) fn mul3(a: &[u32], b: &[u32], out: &mut Vec<u32>) {
    out.clear();
    out.resize(a.len() + b.len(), 0);
    for (i, &av) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &bv) in b.iter().enumerate() {
            let prod = av as u64 * bv as u64 + out[i + j] as u64 + carry;
            out[i + j] = prod as u32;
            carry = prod >> u32::BITS;
        }
        out[i + b.len()] = carry as u32;
    }
    trim(out);
}

/// `out = a << n`.
pub(crate) fn shl(a: &[u32], n: u32, out: &mut Vec<u32>) {
    out.clear();
    if n == 0 {
        out.extend_from_slice(a);
        return;
    }
    let word_shift = (n / u32::BITS) as usize;
    let bit_shift = n % u32::BITS;
    out.resize(a.len() + word_shift + (bit_shift > 0) as usize, 0);
    if bit_shift == 0 {
        out[word_shift..].copy_from_slice(a);
    } else {
        let mut carry: u32 = 0;
        for (i, &w) in a.iter().enumerate() {
            let t = ((w as u64) << bit_shift) | carry as u64;
            out[i + word_shift] = t as u32;
            carry = (t >> u32::BITS) as u32;
        }
        out[a.len() + word_shift] = carry;
    }
    trim(out);
}

/// `w <<= n` in place, high column first so every source word is read
/// before any column it feeds is written.
pub(crate) fn shl2(w: &mut Vec<u32>, n: u32) {
    if n == 0 || w.is_empty() {
        return;
    }
    let word_shift = (n / u32::BITS) as usize;
    let bit_shift = n % u32::BITS;
    let old_len = w.len();
    w.resize(old_len + word_shift + (bit_shift > 0) as usize, 0);
    if bit_shift == 0 {
        for i in (0..old_len).rev() {
            w[i + word_shift] = w[i];
        }
    } else {
        for i in (0..old_len).rev() {
            let t = (w[i] as u64) << bit_shift;
            w[i + word_shift + 1] |= (t >> u32::BITS) as u32;
            w[i + word_shift] = t as u32;
        }
    }
    for low in w.iter_mut().take(word_shift) {
        *low = 0;
    }
    trim(w);
}

/// Bit-serial long division.
///
/// Caller guarantees a non-zero divisor and `dividend >= divisor`; both
/// operands trimmed. The quotient is pre-sized to the dividend's word
/// length; the remainder gets `len(dividend) + 1` words of capacity up
/// front so the one-bit growth a shift step can need never reallocates
/// (and can never be dropped).
///
/// For each bit `i` of the dividend, high to low: shift the running
/// remainder left one bit, bring bit `i` down into its low end, and when
/// the remainder reaches the divisor subtract it off and set bit `i` of
/// the quotient.
pub(crate) fn div_rem(
    dividend: &[u32],
    divisor: &[u32],
    quotient: &mut Vec<u32>,
    remainder: &mut Vec<u32>,
) {
    debug_assert!(eff_len(divisor) > 0);
    quotient.clear();
    quotient.resize(dividend.len(), 0);
    remainder.clear();
    remainder.reserve(dividend.len() + 1);

    for i in (0..dividend.len() * u32::BITS as usize).rev() {
        let mut carry: u32 = 0;
        for w in remainder.iter_mut() {
            let t = ((*w as u64) << 1) | carry as u64;
            *w = t as u32;
            carry = (t >> u32::BITS) as u32;
        }
        if carry != 0 {
            remainder.push(carry);
        }

        if (dividend[i / 32] >> (i % 32)) & 1 != 0 {
            if remainder.is_empty() {
                remainder.push(1);
            } else {
                remainder[0] |= 1;
            }
        }

        if cmp_slice(remainder, divisor) != Ordering::Less {
            sub2(remainder, divisor);
            quotient[i / 32] |= 1 << (i % 32);
        }
    }

    trim(quotient);
    trim(remainder);
}

#[test]
fn test_cmp_slice_ignores_trailing_zeros() {
    assert_eq!(cmp_slice(&[5, 0, 0], &[5]), Ordering::Equal);
    assert_eq!(cmp_slice(&[0, 1], &[0xFFFF_FFFF]), Ordering::Greater);
    assert_eq!(cmp_slice(&[], &[0, 0]), Ordering::Equal);
    assert_eq!(cmp_slice(&[1, 2], &[2, 2]), Ordering::Less);
}

#[test]
fn test_add_carry_chain() {
    let mut out = Vec::new();
    add(&[0xFFFF_FFFF], &[1], &mut out);
    assert_eq!(out, [0, 1]);

    add(&[0xFFFF_FFFF, 0xFFFF_FFFF], &[1], &mut out);
    assert_eq!(out, [0, 0, 1]);

    let mut acc = vec![0xFFFF_FFFF, 0xFFFF_FFFF];
    add2(&mut acc, &[1]);
    assert_eq!(acc, [0, 0, 1]);
}

#[test]
fn test_abs_diff_borrow_cascade() {
    let mut out = Vec::new();
    abs_diff(&[0, 1], &[1], &mut out);
    assert_eq!(out, [0xFFFF_FFFF]);

    abs_diff(&[0, 0, 1], &[1], &mut out);
    assert_eq!(out, [0xFFFF_FFFF, 0xFFFF_FFFF]);

    // argument order must not matter
    abs_diff(&[1], &[0, 0, 1], &mut out);
    assert_eq!(out, [0xFFFF_FFFF, 0xFFFF_FFFF]);
}

#[test]
fn test_sub2_directions() {
    let mut acc = vec![0, 1];
    sub2(&mut acc, &[1]);
    assert_eq!(acc, [0xFFFF_FFFF]);

    let mut acc = vec![1];
    sub2rev(&mut acc, &[0, 1]);
    assert_eq!(acc, [0xFFFF_FFFF]);
}

#[test]
fn test_mul3_cross_word() {
    let mut out = Vec::new();
    mul3(&[42], &[17], &mut out);
    assert_eq!(out, [714]);

    mul3(&[0xFFFF_FFFF], &[0xFFFF_FFFF], &mut out);
    assert_eq!(out, [1, 0xFFFF_FFFE]);

    mul3(&[0, 1], &[0, 1], &mut out);
    assert_eq!(out, [0, 0, 1]);
}

#[test]
fn test_shl_split() {
    let mut out = Vec::new();
    shl(&[0x8000_0001], 1, &mut out);
    assert_eq!(out, [2, 1]);

    shl(&[1], 64, &mut out);
    assert_eq!(out, [0, 0, 1]);

    shl(&[0xDEAD_BEEF], 0, &mut out);
    assert_eq!(out, [0xDEAD_BEEF]);

    let mut w = vec![0x8000_0001];
    shl2(&mut w, 33);
    assert_eq!(w, [0, 2, 1]);
}

#[test]
fn test_div_rem_small() {
    let mut q = Vec::new();
    let mut r = Vec::new();
    div_rem(&[100], &[7], &mut q, &mut r);
    assert_eq!(q, [14]);
    assert_eq!(r, [2]);

    div_rem(&[0x9ABC_DEF0, 0x1234_5678], &[0x1000], &mut q, &mut r);
    let mut check = Vec::new();
    mul3(&q, &[0x1000], &mut check);
    add2(&mut check, &r);
    assert_eq!(cmp_slice(&check, &[0x9ABC_DEF0, 0x1234_5678]), Ordering::Equal);
    assert_eq!(cmp_slice(&r, &[0x1000]), Ordering::Less);
}
