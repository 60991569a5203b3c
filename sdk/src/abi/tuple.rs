//! `tuple<T1,...,Tn>`: static iff every element is static. Head slots are
//! fixed-index (one 32-byte slot per element, in declaration order); a
//! dynamic element's head slot holds an offset relative to the start of
//! this tuple's own encoded region, and its payload lands in the tail.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::{Error, U256};

use super::{read_word, AbiType};

macro_rules! impl_tuple {
    ($count:expr; $($ty:ident : $idx:tt),+) => {
        impl<$($ty: AbiType),+> AbiType for ($($ty,)+) {
            const IS_DYNAMIC: bool = false $(|| $ty::IS_DYNAMIC)+;

            fn encode(&self, out: &mut Vec<u8>) {
                const N: usize = $count;
                let mut head = alloc::vec![0u8; N * 32];
                let mut tail = Vec::new();
                $(
                    if $ty::IS_DYNAMIC {
                        let offset = N * 32 + tail.len();
                        self.$idx.encode(&mut tail);
                        head[$idx * 32..$idx * 32 + 32]
                            .copy_from_slice(&U256::from_u128(offset as u128).bytes());
                    } else {
                        let mut word = Vec::new();
                        self.$idx.encode(&mut word);
                        head[$idx * 32..$idx * 32 + 32].copy_from_slice(&word);
                    }
                )+
                out.extend_from_slice(&head);
                out.extend_from_slice(&tail);
            }

            fn decode(data: &[u8]) -> Result<Self, Error> {
                const N: usize = $count;
                if data.len() < N * 32 {
                    return Err(Error::DataTooShort);
                }
                Ok((
                    $(
                        if $ty::IS_DYNAMIC {
                            let offset = U256::from_be_bytes(read_word(data, $idx * 32)?);
                            let offset = offset.to_u64() as usize;
                            if offset > data.len() {
                                return Err(Error::DataTooShort);
                            }
                            $ty::decode(&data[offset..])?
                        } else {
                            $ty::decode(&data[$idx * 32..])?
                        },
                    )+
                ))
            }
        }
    };
}

impl_tuple!(1; A:0);
impl_tuple!(2; A:0, B:1);
impl_tuple!(3; A:0, B:1, C:2);
impl_tuple!(4; A:0, B:1, C:2, D:3);
impl_tuple!(5; A:0, B:1, C:2, D:3, E:4);
impl_tuple!(6; A:0, B:1, C:2, D:3, E:4, F:5);
impl_tuple!(7; A:0, B:1, C:2, D:3, E:4, F:5, G:6);
impl_tuple!(8; A:0, B:1, C:2, D:3, E:4, F:5, G:6, H:7);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::{abi_decode_all, abi_encode};
    use alloc::string::ToString;
    use wasmc_core::Address;

    #[test]
    fn all_static_tuple_has_no_tail() {
        let t = (U256::from_u128(1), true, U256::from_u128(2));
        let encoded = abi_encode(&t);
        assert_eq!(encoded.len(), 3 * 32);
        assert_eq!(abi_decode_all::<(U256, bool, U256)>(&encoded).unwrap(), t);
    }

    #[test]
    fn mixed_static_and_dynamic_round_trips() {
        let t = (U256::from_u128(7), "hello".to_string(), Address::zero());
        let encoded = abi_encode(&t);
        let decoded = abi_decode_all::<(U256, alloc::string::String, Address)>(&encoded).unwrap();
        assert_eq!(decoded, t);
    }

    #[test]
    fn is_dynamic_propagates_from_any_element() {
        assert!(!<(U256, bool)>::IS_DYNAMIC);
        assert!(<(U256, alloc::string::String)>::IS_DYNAMIC);
    }
}
