//! `bytes` and `string`: length-prefixed dynamic values, zero-padded to a
//! multiple of 32 bytes in their tail payload.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use wasmc_core::{Error, U256};

use super::{pad_len, read_word, AbiType};

/// An opaque byte blob, distinct from [`String`] so a contract can hold
/// binary data without implying a text encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn encode_bytes(payload: &[u8], out: &mut Vec<u8>) {
    U256::from_u128(payload.len() as u128).encode(out);
    out.extend_from_slice(payload);
    out.resize(out.len() + pad_len(payload.len()), 0);
}

fn decode_bytes(data: &[u8]) -> Result<Vec<u8>, Error> {
    let len = U256::from_be_bytes(read_word(data, 0)?);
    let len = len.to_u64() as usize;
    let start = 32;
    let end = start
        .checked_add(len)
        .ok_or(Error::DataTooShort)?;
    if end > data.len() {
        return Err(Error::DataTooShort);
    }
    Ok(data[start..end].to_vec())
}

impl AbiType for Bytes {
    const IS_DYNAMIC: bool = true;

    fn encode(&self, out: &mut Vec<u8>) {
        encode_bytes(&self.0, out);
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        Ok(Bytes(decode_bytes(data)?))
    }
}

impl AbiType for String {
    const IS_DYNAMIC: bool = true;

    fn encode(&self, out: &mut Vec<u8>) {
        encode_bytes(self.as_bytes(), out);
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let raw = decode_bytes(data)?;
        // Not a hex-parsing failure; the bytes are well-formed ABI, just not
        // valid UTF-8, so it's reported as malformed data rather than mislabeled
        // as a hex error.
        String::from_utf8(raw).map_err(|_| Error::DataTooShort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{abi_decode_all, abi_encode};
    use alloc::string::ToString;

    #[test]
    fn scenario_hello() {
        let encoded = abi_encode(&"hello".to_string());
        assert_eq!(encoded.len(), 64);
        assert_eq!(U256::from_be_bytes(encoded[0..32].try_into().unwrap()), U256::from_u128(5));
        assert_eq!(&encoded[32..37], b"hello");
        assert_eq!(&encoded[37..64], &[0u8; 27]);
    }

    #[test]
    fn scenario_exact_multiple_of_32_has_no_padding() {
        let s = "aaaaaaaabbbbbbbbccccccccddddddddaaaaaaaabbbbbbbbccccccccdddddddd".to_string();
        assert_eq!(s.len(), 64);
        let encoded = abi_encode(&s);
        assert_eq!(encoded.len(), 32 + 64);
        assert_eq!(U256::from_be_bytes(encoded[0..32].try_into().unwrap()), U256::from_u128(64));
        assert_eq!(&encoded[32..96], s.as_bytes());
    }

    #[test]
    fn round_trips_across_boundary_lengths() {
        for len in [0usize, 1, 31, 32, 33, 64, 65] {
            let s: String = core::iter::repeat('a').take(len).collect();
            let encoded = abi_encode(&s);
            assert_eq!(abi_decode_all::<String>(&encoded).unwrap(), s);
        }
    }

    #[test]
    fn bytes_round_trips_and_is_distinct_from_string() {
        let b = Bytes(alloc::vec![0xde, 0xad, 0xbe, 0xef]);
        let encoded = abi_encode(&b);
        assert_eq!(abi_decode_all::<Bytes>(&encoded).unwrap(), b);
    }

    #[test]
    fn decode_rejects_length_past_buffer() {
        let mut encoded = Vec::new();
        U256::from_u128(100).encode(&mut encoded);
        assert_eq!(
            abi_decode_all::<Bytes>(&encoded),
            Err(Error::DataTooShort)
        );
    }

    #[test]
    fn string_decode_rejects_non_utf8_content() {
        let invalid = alloc::vec![0xffu8, 0xfe, 0xfd, 0xfc];
        let encoded = abi_encode(&Bytes(invalid));
        assert_eq!(
            abi_decode_all::<String>(&encoded),
            Err(Error::DataTooShort)
        );
    }
}
