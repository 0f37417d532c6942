//! Arbitrary-precision signed integers.
//!
//! `BigValue` is an owned, immutable sign + magnitude value. The
//! magnitude is a little-endian vector of 32-bit limbs kept canonical:
//! no leading zero limbs, and zero is always the empty limb vector with
//! a positive sign, so derived equality is value equality.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};

const DECIMAL_CHUNK: u32 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

#[derive(Clone, PartialEq, Eq)]
pub struct BigValue {
    negative: bool,
    limbs: Vec<u32>,
}

impl BigValue {
    pub fn zero() -> Self {
        BigValue {
            negative: false,
            limbs: Vec::new(),
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Self::normalized(false, vec![value as u32, (value >> 32) as u32])
    }

    pub fn from_i64(value: i64) -> Self {
        let magnitude = Self::from_u64(value.unsigned_abs());
        if value < 0 {
            magnitude.negate()
        } else {
            magnitude
        }
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            Self::from_u64(1)
        } else {
            Self::zero()
        }
    }

    /// Build a magnitude from a run of digit characters in the given
    /// radix (2, 8, 10 or 16). Returns `None` on any character that is
    /// not a digit of that radix. Leading zeros are fine.
    pub fn from_digits(radix: u32, digits: &str) -> Option<Self> {
        let mut limbs: Vec<u32> = Vec::new();
        for ch in digits.chars() {
            let d = ch.to_digit(radix)?;
            let mut carry = d as u64;
            for limb in limbs.iter_mut() {
                let acc = (*limb as u64) * (radix as u64) + carry;
                *limb = acc as u32;
                carry = acc >> 32;
            }
            if carry != 0 {
                limbs.push(carry as u32);
            }
        }
        Some(Self::normalized(false, limbs))
    }

    /// Parse an optionally signed decimal string. This is the inverse
    /// of `Display` for every magnitude.
    pub fn from_decimal_str(text: &str) -> Option<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() {
            return None;
        }
        let magnitude = Self::from_digits(10, digits)?;
        Some(if negative { magnitude.negate() } else { magnitude })
    }

    fn normalized(negative: bool, mut limbs: Vec<u32>) -> Self {
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        BigValue {
            negative: negative && !limbs.is_empty(),
            limbs,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn abs(&self) -> Self {
        BigValue {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    pub fn negate(&self) -> Self {
        BigValue {
            negative: !self.negative && !self.is_zero(),
            limbs: self.limbs.clone(),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.negative == other.negative {
            return Self::normalized(
                self.negative,
                add_magnitudes(&self.limbs, &other.limbs),
            );
        }
        match self.cmp_magnitude(other) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::normalized(
                self.negative,
                sub_magnitudes(&self.limbs, &other.limbs),
            ),
            Ordering::Less => Self::normalized(
                other.negative,
                sub_magnitudes(&other.limbs, &self.limbs),
            ),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Left shift by `bits`, i.e. multiplication by 2^bits.
    pub fn shl(&self, bits: usize) -> Self {
        if self.is_zero() || bits == 0 {
            return self.clone();
        }
        let limb_shift = bits / 32;
        let bit_shift = bits % 32;
        let mut limbs = vec![0u32; limb_shift];
        if bit_shift == 0 {
            limbs.extend_from_slice(&self.limbs);
        } else {
            let mut carry = 0u32;
            for &limb in &self.limbs {
                limbs.push((limb << bit_shift) | carry);
                carry = limb >> (32 - bit_shift);
            }
            if carry != 0 {
                limbs.push(carry);
            }
        }
        Self::normalized(self.negative, limbs)
    }

    /// Number of bits in the magnitude; zero has bit length 0.
    pub fn bit_length(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => (self.limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize),
        }
    }

    /// Compare magnitudes only, ignoring signs.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {
                for i in (0..self.limbs.len()).rev() {
                    match self.limbs[i].cmp(&other.limbs[i]) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                }
                Ordering::Equal
            }
            unequal => unequal,
        }
    }

    /// Exact comparison against a double. `None` only when `value` is
    /// NaN. The double is decomposed into mantissa * 2^exponent and
    /// compared as an exact binary rational, so this is correct for
    /// magnitudes beyond 2^53 and beyond `f64::MAX`, where a cast to
    /// `f64` would round.
    pub fn cmp_f64(&self, value: f64) -> Option<Ordering> {
        if value.is_nan() {
            return None;
        }
        if value == f64::INFINITY {
            return Some(Ordering::Less);
        }
        if value == f64::NEG_INFINITY {
            return Some(Ordering::Greater);
        }
        if self.is_zero() {
            // Neither +0 nor -0 is distinguished from integer zero.
            return Some(if value > 0.0 {
                Ordering::Less
            } else if value < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            });
        }
        if self.negative && value >= 0.0 {
            return Some(Ordering::Less);
        }
        if !self.negative && value <= 0.0 {
            return Some(Ordering::Greater);
        }
        // Same nonzero sign on both sides: compare magnitudes exactly.
        let (mantissa, exponent) = decode_f64_magnitude(value);
        let mantissa_big = BigValue::from_u64(mantissa);
        let magnitude_order = if exponent >= 0 {
            self.cmp_magnitude(&mantissa_big.shl(exponent as usize))
        } else {
            // |self| vs m * 2^e with e < 0 is |self| * 2^-e vs m.
            self.abs()
                .shl((-exponent) as usize)
                .cmp_magnitude(&mantissa_big)
        };
        Some(if self.negative {
            magnitude_order.reverse()
        } else {
            magnitude_order
        })
    }

    /// Convert to the nearest double, rounding half to even, with
    /// overflow to infinity. Values up to 53 bits convert exactly.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let bits = self.bit_length();
        let magnitude = if bits <= 53 {
            let mut value = 0u64;
            for (i, &limb) in self.limbs.iter().enumerate() {
                value |= (limb as u64) << (32 * i);
            }
            value as f64
        } else {
            let (top, sticky) = self.top_bits_and_sticky(54);
            let mut mantissa = top >> 1;
            let round_bit = (top & 1) == 1;
            let mut exponent = (bits - 53) as i32;
            if round_bit && (sticky || (mantissa & 1) == 1) {
                mantissa += 1;
                if mantissa == (1u64 << 53) {
                    mantissa >>= 1;
                    exponent += 1;
                }
            }
            (mantissa as f64) * 2f64.powi(exponent)
        };
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// The top `n` bits of the magnitude plus a sticky flag for the
    /// dropped low bits. Requires `bit_length() >= n` and `n <= 64`.
    fn top_bits_and_sticky(&self, n: usize) -> (u64, bool) {
        let bits = self.bit_length();
        debug_assert!(n <= 64 && bits >= n);
        let drop = bits - n;
        let limb_drop = drop / 32;
        let bit_drop = (drop % 32) as u32;
        let limb_at = |i: usize| -> u64 {
            if i < self.limbs.len() {
                self.limbs[i] as u64
            } else {
                0
            }
        };
        let top = if bit_drop == 0 {
            limb_at(limb_drop) | (limb_at(limb_drop + 1) << 32)
        } else {
            (limb_at(limb_drop) >> bit_drop)
                | (limb_at(limb_drop + 1) << (32 - bit_drop))
                | (limb_at(limb_drop + 2) << (64 - bit_drop))
        };
        let mut sticky = self.limbs[..limb_drop].iter().any(|&limb| limb != 0);
        if !sticky && bit_drop > 0 {
            sticky = (self.limbs[limb_drop] & ((1u32 << bit_drop) - 1)) != 0;
        }
        (top, sticky)
    }
}

impl Ord for BigValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BigValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.negative {
            write!(f, "-")?;
        }
        let mut limbs = self.limbs.clone();
        let mut chunks = Vec::new();
        while !limbs.is_empty() {
            chunks.push(divmod_small(&mut limbs, DECIMAL_CHUNK));
        }
        let mut chunks = chunks.into_iter().rev();
        if let Some(top) = chunks.next() {
            write!(f, "{}", top)?;
        }
        for chunk in chunks {
            write!(f, "{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BigValue({})", self)
    }
}

fn add_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut limbs = Vec::with_capacity(longer.len() + 1);
    let mut carry = 0u64;
    for i in 0..longer.len() {
        let mut acc = longer[i] as u64 + carry;
        if i < shorter.len() {
            acc += shorter[i] as u64;
        }
        limbs.push(acc as u32);
        carry = acc >> 32;
    }
    if carry != 0 {
        limbs.push(carry as u32);
    }
    limbs
}

// Requires |a| >= |b|.
fn sub_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut limbs = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for i in 0..a.len() {
        let mut acc = a[i] as i64 - borrow;
        if i < b.len() {
            acc -= b[i] as i64;
        }
        if acc < 0 {
            acc += 1i64 << 32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        limbs.push(acc as u32);
    }
    limbs
}

// Divide the magnitude in place, returning the remainder.
fn divmod_small(limbs: &mut Vec<u32>, divisor: u32) -> u32 {
    let mut remainder = 0u64;
    for limb in limbs.iter_mut().rev() {
        let acc = (remainder << 32) | *limb as u64;
        *limb = (acc / divisor as u64) as u32;
        remainder = acc % divisor as u64;
    }
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
    remainder as u32
}

// |value| as mantissa * 2^exponent with an integral mantissa.
fn decode_f64_magnitude(value: f64) -> (u64, i64) {
    let bits = value.abs().to_bits();
    let raw_exponent = (bits >> 52) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    if raw_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), raw_exponent - 1075)
    }
}
