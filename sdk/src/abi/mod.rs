//! The Ethereum ABI codec.
//!
//! Every supported type implements [`AbiType`], which knows whether its
//! encoding is static (a fixed 32-byte head slot) or dynamic (a 32-byte
//! offset in the head pointing into a tail region). Tuples and vectors
//! compose the trait rather than special-casing it, so the static/dynamic
//! distinction stays a compile-time property instead of something decided
//! by runtime reflection.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::{Address, Error, U256};

mod bytes;
mod ints;
mod tuple;
mod vector;

pub use bytes::Bytes;
pub use ints::Signed;
pub use vector::{decode_vector, encode_vector};

/// A value that can be ABI-encoded and decoded, in the canonical EVM ABI
/// head/tail layout.
pub trait AbiType: Sized {
    /// `true` if this type's encoding occupies a tail slot referenced by a
    /// 32-byte offset in the head, rather than a fixed 32-byte head slot.
    const IS_DYNAMIC: bool;

    /// Appends this value's own encoding to `out`: a single 32-byte word
    /// for static types, or the length-prefixed tail payload for dynamic
    /// types. Callers embedding this inside a tuple or vector head/tail
    /// handle the offset word themselves.
    fn encode(&self, out: &mut Vec<u8>);

    /// Decodes a value starting at the front of `data`. For dynamic types,
    /// `data` must already be sliced to start at the payload (i.e. the
    /// caller has already resolved the offset).
    fn decode(data: &[u8]) -> Result<Self, Error>;
}

/// Reads one 32-byte big-endian word at `at` in `data`.
pub(crate) fn read_word(data: &[u8], at: usize) -> Result<[u8; 32], Error> {
    let end = match at.checked_add(32) {
        Some(end) if end <= data.len() => end,
        _ => return Err(Error::DataTooShort),
    };
    let mut out = [0u8; 32];
    out.copy_from_slice(&data[at..end]);
    Ok(out)
}

/// Pads `data.len()` up to the next multiple of 32, returning the pad amount.
pub(crate) fn pad_len(len: usize) -> usize {
    (32 - (len % 32)) % 32
}

/// Encodes a standalone top-level value (not embedded in a tuple or
/// vector). For a dynamic type this is just its own tail encoding, with no
/// surrounding offset word, matching e.g. `abi_encode("hello")`.
pub fn abi_encode<T: AbiType>(value: &T) -> Vec<u8> {
    let mut out = Vec::new();
    value.encode(&mut out);
    out
}

/// Decodes a standalone top-level value and requires that the entire
/// buffer be consumed.
pub fn abi_decode_all<T: AbiType>(data: &[u8]) -> Result<T, Error> {
    let value = T::decode(data)?;
    let consumed = encoded_len(&value);
    if consumed != data.len() {
        return Err(Error::TrailingData);
    }
    Ok(value)
}

/// The exact byte length `value`'s own encoding occupies, used by
/// [`abi_decode_all`] to detect trailing data.
fn encoded_len<T: AbiType>(value: &T) -> usize {
    let mut out = Vec::new();
    value.encode(&mut out);
    out.len()
}

impl AbiType for bool {
    const IS_DYNAMIC: bool = false;

    fn encode(&self, out: &mut Vec<u8>) {
        let mut word = [0u8; 32];
        word[31] = *self as u8;
        out.extend_from_slice(&word);
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let word = read_word(data, 0)?;
        Ok(word[31] != 0)
    }
}

impl AbiType for U256 {
    const IS_DYNAMIC: bool = false;

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.bytes());
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        Ok(U256::from_be_bytes(read_word(data, 0)?))
    }
}

impl AbiType for Address {
    const IS_DYNAMIC: bool = false;

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bytes32());
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        Ok(Address::from_bytes32(&read_word(data, 0)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_u8_123() {
        let encoded = abi_encode(&U256::from_u128(123));
        assert_eq!(encoded.len(), 32);
        assert_eq!(encoded[31], 0x7b);
        assert_eq!(&encoded[..31], &[0u8; 31]);
    }

    #[test]
    fn scenario_u256_max() {
        let encoded = abi_encode(&U256::MAX);
        assert_eq!(encoded, [0xffu8; 32]);
    }

    #[test]
    fn scenario_address() {
        let raw: [u8; 20] = [
            0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0x11, 0x22, 0x33, 0x44,
            0x55, 0x66, 0x77, 0x88, 0x99, 0xaa,
        ];
        let encoded = abi_encode(&Address::new(raw));
        assert_eq!(&encoded[0..12], &[0u8; 12]);
        assert_eq!(&encoded[12..32], &raw);
    }

    #[test]
    fn bool_round_trips() {
        for b in [true, false] {
            let encoded = abi_encode(&b);
            assert_eq!(abi_decode_all::<bool>(&encoded).unwrap(), b);
        }
    }

    #[test]
    fn u256_round_trips() {
        let v = U256::from_parts(0x1234, 0x5678);
        let encoded = abi_encode(&v);
        assert_eq!(abi_decode_all::<U256>(&encoded).unwrap(), v);
    }

    #[test]
    fn decode_rejects_trailing_data() {
        let mut encoded = abi_encode(&U256::from_u128(1));
        encoded.push(0);
        assert_eq!(abi_decode_all::<U256>(&encoded), Err(Error::TrailingData));
    }

    #[test]
    fn decode_rejects_short_data() {
        let encoded = [0u8; 16];
        assert_eq!(abi_decode_all::<U256>(&encoded), Err(Error::DataTooShort));
    }
}
