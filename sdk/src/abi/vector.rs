//! `vector<T>`: a homogeneous, always-dynamic sequence. A 32-byte length
//! word, then each element; if `T` is dynamic, the element region is
//! itself a head/tail layout whose offsets are relative to *after* the
//! length word.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::{Error, U256};

use super::{read_word, AbiType};

impl<T: AbiType> AbiType for Vec<T> {
    const IS_DYNAMIC: bool = true;

    fn encode(&self, out: &mut Vec<u8>) {
        U256::from_u128(self.len() as u128).encode(out);
        encode_vector(self, out);
    }

    fn decode(data: &[u8]) -> Result<Self, Error> {
        let len = U256::from_be_bytes(read_word(data, 0)?);
        let len = len.to_u64() as usize;
        decode_vector(&data[32..], len)
    }
}

/// Encodes `items` as the element region of a vector, without the leading
/// length word (so it can be reused for the top-level `abi_encode_vector`
/// helper as well as the `Vec<T>` trait impl).
pub fn encode_vector<T: AbiType>(items: &[T], out: &mut Vec<u8>) {
    if !T::IS_DYNAMIC {
        for item in items {
            item.encode(out);
        }
        return;
    }
    let head_len = items.len() * 32;
    let mut head = alloc::vec![0u8; head_len];
    let mut tail = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let offset = head_len + tail.len();
        item.encode(&mut tail);
        head[i * 32..i * 32 + 32].copy_from_slice(&U256::from_u128(offset as u128).bytes());
    }
    out.extend_from_slice(&head);
    out.extend_from_slice(&tail);
}

/// Decodes `len` elements from the element region `data` (already past the
/// length word).
pub fn decode_vector<T: AbiType>(data: &[u8], len: usize) -> Result<Vec<T>, Error> {
    let mut items = Vec::with_capacity(len);
    if !T::IS_DYNAMIC {
        for i in 0..len {
            let start = i * 32;
            if start + 32 > data.len() {
                return Err(Error::DataTooShort);
            }
            items.push(T::decode(&data[start..])?);
        }
        return Ok(items);
    }
    for i in 0..len {
        let offset = U256::from_be_bytes(read_word(data, i * 32)?);
        let offset = offset.to_u64() as usize;
        if offset > data.len() {
            return Err(Error::DataTooShort);
        }
        items.push(T::decode(&data[offset..])?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{abi_decode_all, abi_encode};
    use alloc::string::ToString;

    #[test]
    fn scenario_vector_of_u32() {
        let v: Vec<u32> = alloc::vec![1, 2, 3];
        let encoded = abi_encode(&v);
        assert_eq!(U256::from_be_bytes(encoded[0..32].try_into().unwrap()), U256::from_u128(3));
        for (i, expect) in [1u32, 2, 3].into_iter().enumerate() {
            let word = &encoded[32 + i * 32..32 + i * 32 + 32];
            assert_eq!(U256::from_be_bytes(word.try_into().unwrap()), U256::from(expect));
        }
    }

    #[test]
    fn static_vector_round_trips() {
        let v: Vec<U256> = (0..5).map(U256::from_u128).collect();
        let encoded = abi_encode(&v);
        assert_eq!(abi_decode_all::<Vec<U256>>(&encoded).unwrap(), v);
    }

    #[test]
    fn dynamic_vector_round_trips() {
        let v: Vec<alloc::string::String> = alloc::vec!["a".to_string(), "bbbb".to_string(), "".to_string()];
        let encoded = abi_encode(&v);
        assert_eq!(
            abi_decode_all::<Vec<alloc::string::String>>(&encoded).unwrap(),
            v
        );
    }

    #[test]
    fn empty_vector_round_trips() {
        let v: Vec<U256> = Vec::new();
        let encoded = abi_encode(&v);
        assert_eq!(encoded, U256::ZERO.bytes());
        assert_eq!(abi_decode_all::<Vec<U256>>(&encoded).unwrap(), v);
    }
}
