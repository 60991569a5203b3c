//! 256-bit unsigned integer: the machine word of the execution environment.
//!
//! Represented as two 128-bit halves `(high, low)` with `value = high * 2^128 + low`.
//! All arithmetic is modulo `2^256`; nothing here panics on overflow.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Shl, Shr, Sub};

use crate::Error;

/// A 256-bit unsigned integer stored as two 128-bit halves.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256 {
    high: u128,
    low: u128,
}

impl U256 {
    pub const ZERO: U256 = U256 { high: 0, low: 0 };
    pub const MAX: U256 = U256 {
        high: u128::MAX,
        low: u128::MAX,
    };

    /// Zero-extends a 128-bit value into the low half.
    pub const fn from_u128(low: u128) -> Self {
        U256 { high: 0, low }
    }

    /// Builds a value directly from its two halves.
    pub const fn from_parts(high: u128, low: u128) -> Self {
        U256 { high, low }
    }

    pub const fn high(&self) -> u128 {
        self.high
    }

    pub const fn low(&self) -> u128 {
        self.low
    }

    /// Parses a 32-byte big-endian buffer.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut high_bytes = [0u8; 16];
        let mut low_bytes = [0u8; 16];
        high_bytes.copy_from_slice(&bytes[0..16]);
        low_bytes.copy_from_slice(&bytes[16..32]);
        U256 {
            high: u128::from_be_bytes(high_bytes),
            low: u128::from_be_bytes(low_bytes),
        }
    }

    /// Parses a big-endian slice shorter than or equal to 32 bytes, zero-extending on the left.
    pub fn from_be_slice(slice: &[u8]) -> Self {
        debug_assert!(slice.len() <= 32);
        let mut bytes = [0u8; 32];
        let start = 32 - slice.len();
        bytes[start..].copy_from_slice(slice);
        Self::from_be_bytes(bytes)
    }

    /// Emits the canonical 32-byte big-endian form: `high` in `[0..16)`, `low` in `[16..32)`.
    pub fn bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[0..16].copy_from_slice(&self.high.to_be_bytes());
        out[16..32].copy_from_slice(&self.low.to_be_bytes());
        out
    }

    pub fn is_zero(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Truncates to the low 8 bits. Lossless only if the upper bits are all zero.
    pub fn to_u8(&self) -> u8 {
        self.low as u8
    }

    pub fn to_u16(&self) -> u16 {
        self.low as u16
    }

    pub fn to_u32(&self) -> u32 {
        self.low as u32
    }

    pub fn to_u64(&self) -> u64 {
        self.low as u64
    }

    pub fn to_u128(&self) -> u128 {
        self.low
    }

    /// Wrapping addition: carry from the low half propagates into the high half.
    pub fn wrapping_add(self, rhs: U256) -> U256 {
        let (low, carry) = self.low.overflowing_add(rhs.low);
        let high = self
            .high
            .wrapping_add(rhs.high)
            .wrapping_add(carry as u128);
        U256 { high, low }
    }

    /// Wrapping subtraction: borrow from the low half propagates into the high half.
    pub fn wrapping_sub(self, rhs: U256) -> U256 {
        let (low, borrow) = self.low.overflowing_sub(rhs.low);
        let high = self
            .high
            .wrapping_sub(rhs.high)
            .wrapping_sub(borrow as u128);
        U256 { high, low }
    }

    /// 128x128 -> 256 multiply, exact (no truncation).
    fn mul128(a: u128, b: u128) -> U256 {
        let a_lo = a as u64 as u128;
        let a_hi = a >> 64;
        let b_lo = b as u64 as u128;
        let b_hi = b >> 64;

        let ll = a_lo * b_lo;
        let lh = a_lo * b_hi;
        let hl = a_hi * b_lo;
        let hh = a_hi * b_hi;

        let r0 = ll as u64;

        let ll_hi = ll >> 64;
        let lh_lo = lh & 0xFFFF_FFFF_FFFF_FFFF;
        let hl_lo = hl & 0xFFFF_FFFF_FFFF_FFFF;
        let mid = ll_hi + lh_lo + hl_lo;
        let r1 = mid as u64;
        let mid_carry = mid >> 64;

        let lh_hi = lh >> 64;
        let hl_hi = hl >> 64;
        let hh_lo = hh & 0xFFFF_FFFF_FFFF_FFFF;
        let high_mid = lh_hi + hl_hi + hh_lo + mid_carry;
        let r2 = high_mid as u64;
        let high_carry = high_mid >> 64;

        let hh_hi = hh >> 64;
        let r3 = (hh_hi + high_carry) as u64;

        let low = (r0 as u128) | ((r1 as u128) << 64);
        let high = (r2 as u128) | ((r3 as u128) << 64);
        U256 { high, low }
    }

    /// Wrapping multiplication, mod 2^256.
    ///
    /// `high*high` is pure overflow and is discarded outright; the cross terms
    /// `low*high` and `high*low` only contribute their low 128 bits (the rest
    /// would land at or beyond bit 256).
    pub fn wrapping_mul(self, rhs: U256) -> U256 {
        let ll = Self::mul128(self.low, rhs.low);
        let cross = self
            .low
            .wrapping_mul(rhs.high)
            .wrapping_add(self.high.wrapping_mul(rhs.low));
        U256 {
            high: ll.high.wrapping_add(cross),
            low: ll.low,
        }
    }

    /// Left shift by `shift` bits, saturating to zero once `shift >= 256`.
    pub fn shl(self, shift: u32) -> U256 {
        if shift >= 256 {
            return U256::ZERO;
        }
        if shift == 0 {
            return self;
        }
        if shift == 128 {
            return U256 {
                high: self.low,
                low: 0,
            };
        }
        if shift < 128 {
            let high = (self.high << shift) | (self.low >> (128 - shift));
            let low = self.low << shift;
            U256 { high, low }
        } else {
            let shift = shift - 128;
            U256 {
                high: self.low << shift,
                low: 0,
            }
        }
    }

    /// Right shift by `shift` bits, saturating to zero once `shift >= 256`.
    pub fn shr(self, shift: u32) -> U256 {
        if shift >= 256 {
            return U256::ZERO;
        }
        if shift == 0 {
            return self;
        }
        if shift == 128 {
            return U256 {
                high: 0,
                low: self.high,
            };
        }
        if shift < 128 {
            let low = (self.low >> shift) | (self.high << (128 - shift));
            let high = self.high >> shift;
            U256 { high, low }
        } else {
            let shift = shift - 128;
            U256 {
                high: 0,
                low: self.high >> shift,
            }
        }
    }

    /// Division is not implemented by this core; callers must treat this as a
    /// programmer error, not a recoverable condition.
    pub fn checked_div(self, _rhs: U256) -> Result<U256, Error> {
        Err(Error::ArithmeticUnimplemented)
    }

    /// Modulo is not implemented by this core; see [`U256::checked_div`].
    pub fn checked_rem(self, _rhs: U256) -> Result<U256, Error> {
        Err(Error::ArithmeticUnimplemented)
    }
}

impl From<u8> for U256 {
    fn from(v: u8) -> Self {
        U256::from_u128(v as u128)
    }
}

impl From<u16> for U256 {
    fn from(v: u16) -> Self {
        U256::from_u128(v as u128)
    }
}

impl From<u32> for U256 {
    fn from(v: u32) -> Self {
        U256::from_u128(v as u128)
    }
}

impl From<u64> for U256 {
    fn from(v: u64) -> Self {
        U256::from_u128(v as u128)
    }
}

impl From<u128> for U256 {
    fn from(v: u128) -> Self {
        U256::from_u128(v)
    }
}

impl From<bool> for U256 {
    fn from(v: bool) -> Self {
        U256::from_u128(v as u128)
    }
}

impl Add for U256 {
    type Output = U256;
    fn add(self, rhs: U256) -> U256 {
        self.wrapping_add(rhs)
    }
}

impl Sub for U256 {
    type Output = U256;
    fn sub(self, rhs: U256) -> U256 {
        self.wrapping_sub(rhs)
    }
}

impl core::ops::Mul for U256 {
    type Output = U256;
    fn mul(self, rhs: U256) -> U256 {
        self.wrapping_mul(rhs)
    }
}

impl Shl<u32> for U256 {
    type Output = U256;
    fn shl(self, rhs: u32) -> U256 {
        U256::shl(self, rhs)
    }
}

impl Shr<u32> for U256 {
    type Output = U256;
    fn shr(self, rhs: u32) -> U256 {
        U256::shr(self, rhs)
    }
}

impl BitAnd for U256 {
    type Output = U256;
    fn bitand(self, rhs: U256) -> U256 {
        U256 {
            high: self.high & rhs.high,
            low: self.low & rhs.low,
        }
    }
}

impl BitOr for U256 {
    type Output = U256;
    fn bitor(self, rhs: U256) -> U256 {
        U256 {
            high: self.high | rhs.high,
            low: self.low | rhs.low,
        }
    }
}

impl BitXor for U256 {
    type Output = U256;
    fn bitxor(self, rhs: U256) -> U256 {
        U256 {
            high: self.high ^ rhs.high,
            low: self.low ^ rhs.low,
        }
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high.cmp(&other.high).then(self.low.cmp(&other.low))
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{})", hex::encode(self.bytes()))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let v = U256::from_parts(0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10, u128::MAX);
        assert_eq!(U256::from_be_bytes(v.bytes()), v);
    }

    #[test]
    fn add_is_associative_mod_2_256() {
        let a = U256::from_parts(u128::MAX, u128::MAX);
        let b = U256::from_u128(1);
        let c = U256::from_u128(42);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn sub_self_is_zero() {
        let a = U256::from_parts(0xdead_beef, 0x1234_5678);
        assert_eq!(a - a, U256::ZERO);
    }

    #[test]
    fn add_exercises_top_bit_of_low_half() {
        // Regression: an earlier revision cleared the top bit of the low half
        // instead of carrying properly. This input relies on low >= 2^127.
        let a = U256::from_parts(0, 1u128 << 127);
        let b = U256::from_parts(0, 1u128 << 127);
        let sum = a + b;
        assert_eq!(sum, U256::from_parts(1, 0));
    }

    #[test]
    fn sub_underflow_wraps() {
        assert_eq!(U256::ZERO - U256::from_u128(1), U256::MAX);
    }

    #[test]
    fn mul_max_times_two_wraps() {
        let max = U256::MAX;
        let two = U256::from_u128(2);
        assert_eq!(max * two, U256::MAX - U256::from_u128(1));
    }

    #[test]
    fn mul_small_values() {
        let a = U256::from_u128(123456789);
        let b = U256::from_u128(987654321);
        assert_eq!(a * b, U256::from_u128(123456789u128 * 987654321u128));
    }

    #[test]
    fn shift_left_by_128_swaps_halves() {
        let v = U256::from_parts(0, 0x42);
        assert_eq!(v.shl(128), U256::from_parts(0x42, 0));
    }

    #[test]
    fn shift_left_saturates_past_256() {
        assert_eq!(U256::from_u128(1).shl(300), U256::ZERO);
    }

    #[test]
    fn shift_right_crossing_halves() {
        let v = U256::from_parts(1, 0);
        assert_eq!(v.shr(1), U256::from_parts(0, 1u128 << 127));
    }

    #[test]
    fn ordering_compares_high_then_low() {
        let a = U256::from_parts(1, 0);
        let b = U256::from_parts(0, u128::MAX);
        assert!(a > b);
    }

    #[test]
    fn division_is_unimplemented() {
        let a = U256::from_u128(10);
        let b = U256::from_u128(3);
        assert!(matches!(a.checked_div(b), Err(Error::ArithmeticUnimplemented)));
        assert!(matches!(a.checked_rem(b), Err(Error::ArithmeticUnimplemented)));
    }

    #[test]
    fn scenario_u8_123() {
        assert_eq!(
            U256::from_u128(123).bytes()[31],
            0x7b
        );
    }

    #[test]
    fn scenario_max_is_all_ff() {
        assert_eq!(U256::MAX.bytes(), [0xffu8; 32]);
    }
}
