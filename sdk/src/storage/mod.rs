//! The storage engine: typed read/write of state variables onto the
//! host's 32-byte-keyed, 32-byte-valued key-value store, implementing
//! Solidity's storage-layout rules.
//!
//! Every accessor here is generic over `H: Host` rather than hardcoded to
//! [`crate::host::WasmHost`]: the storage layout math (slot/offset
//! derivation, packed read-modify-write, byte-string inline-vs-spill) is
//! the testable heart of this crate, so it is built to run unmodified
//! against `wasmc_test`'s in-memory mock as well as the real `wasm32`
//! guest. `H` only needs to be cheap to carry around by value; the real
//! guest host is a zero-sized type, and the mock host is a cheap-clone
//! handle onto shared in-memory state.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::host::{CryptoAccess, StorageAccess};
use wasmc_core::{Error, U256};

pub mod array;
pub mod map;
pub mod scalar;

pub use array::StorageArray;
pub use map::StorageMap;
pub use scalar::{
    StorageAddress, StorageBool, StorageBytes, StorageU128, StorageU16, StorageU32, StorageU64,
    StorageU8, StorageWord,
};

/// The maximum decoded length this engine will accept for a stored byte
/// string, guarding against an adversarial host claiming an unbounded
/// length.
pub const MAX_BYTES_LEN: usize = 2048;

/// A `(slot_key, offset)` pair identifying where a packed scalar begins
/// inside a 32-byte storage slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageSlot {
    pub slot: U256,
    pub offset: u8,
}

impl StorageSlot {
    pub const fn new(slot: U256, offset: u8) -> Self {
        StorageSlot { slot, offset }
    }

    /// The sentinel "unassigned" slot reference.
    pub const INVALID: StorageSlot = StorageSlot::new(U256::MAX, 0);

    pub fn is_valid(&self) -> bool {
        self.slot != U256::MAX
    }
}

/// Reads `width` bytes starting at `offset` within the 32-byte slot at
/// `slot`, over whichever storage tier `access` addresses.
pub(crate) fn read_packed<H: StorageAccess>(
    host: &H,
    tier: Tier,
    slot: U256,
    offset: u8,
    width: usize,
) -> [u8; 32] {
    let raw = load(host, tier, slot);
    let mut out = [0u8; 32];
    let offset = offset as usize;
    out[32 - width..].copy_from_slice(&raw[offset..offset + width]);
    out
}

/// Read-modify-write: splices `value`'s low `width` bytes into `[offset,
/// offset+width)` of the slot, preserving every other byte (the packed-
/// scalar invariant). Full-width (`width == 32`) writes skip the read and
/// overwrite the whole slot directly.
pub(crate) fn write_packed<H: StorageAccess>(
    host: &H,
    tier: Tier,
    slot: U256,
    offset: u8,
    width: usize,
    value: [u8; 32],
) {
    if width == 32 {
        store(host, tier, slot, value);
        return;
    }
    let mut raw = load(host, tier, slot);
    let offset = offset as usize;
    raw[offset..offset + width].copy_from_slice(&value[32 - width..]);
    store(host, tier, slot, raw);
}

/// Which of the two key-value tiers (persistent or transient) an
/// operation targets; both share identical layout rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Persistent,
    Transient,
}

fn load<H: StorageAccess>(host: &H, tier: Tier, slot: U256) -> [u8; 32] {
    match tier {
        Tier::Persistent => host.storage_load(slot),
        Tier::Transient => host.transient_load(slot),
    }
}

fn store<H: StorageAccess>(host: &H, tier: Tier, slot: U256, value: [u8; 32]) {
    match tier {
        Tier::Persistent => host.storage_store(slot, value),
        Tier::Transient => host.transient_store(slot, value),
    }
}

/// A value-typed mapping key's 32-byte ABI encoding: value-type keys hash
/// their 32-byte ABI encoding; variable-length keys hash their raw bytes,
/// zero-padded out to a 32-byte boundary.
pub trait MappingKey {
    /// The bytes hashed together with the mapping's base slot. Value-typed
    /// keys return their left-padded 32-byte ABI form; variable-length
    /// keys (strings/bytes) return their raw content followed by zero
    /// padding up to the next 32-byte multiple.
    fn key_bytes(&self) -> Vec<u8>;
}

/// Zero-pads `bytes` out to the next 32-byte boundary, in place.
fn pad_to_32(mut bytes: Vec<u8>) -> Vec<u8> {
    let pad = (32 - bytes.len() % 32) % 32;
    bytes.resize(bytes.len() + pad, 0);
    bytes
}

impl MappingKey for U256 {
    fn key_bytes(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }
}

impl MappingKey for wasmc_core::Address {
    fn key_bytes(&self) -> Vec<u8> {
        self.to_bytes32().to_vec()
    }
}

macro_rules! impl_mapping_key_uint {
    ($($ty:ty),+) => {
        $(impl MappingKey for $ty {
            fn key_bytes(&self) -> Vec<u8> {
                U256::from(*self).bytes().to_vec()
            }
        })+
    };
}

impl_mapping_key_uint!(u8, u16, u32, u64, u128, bool);

impl MappingKey for alloc::string::String {
    fn key_bytes(&self) -> Vec<u8> {
        pad_to_32(self.as_bytes().to_vec())
    }
}

impl MappingKey for Vec<u8> {
    fn key_bytes(&self) -> Vec<u8> {
        pad_to_32(self.clone())
    }
}

/// Derives the value slot for a mapping at `base` with key `key`:
/// `keccak256(H(key) ‖ big_endian_32(base))`.
pub fn mapping_slot<H: CryptoAccess, K: MappingKey + ?Sized>(host: &H, base: U256, key: &K) -> U256 {
    let mut preimage = key.key_bytes();
    preimage.extend_from_slice(&base.bytes());
    U256::from_be_bytes(host.native_keccak256(&preimage))
}

/// Derives the base slot for the elements of a dynamic array/byte-string
/// spill region declared at `slot`: `keccak256(big_endian_32(slot))`.
pub fn elements_base_slot<H: CryptoAccess>(host: &H, slot: U256) -> U256 {
    U256::from_be_bytes(host.native_keccak256(&slot.bytes()))
}

/// Caps a decoded byte-string length at [`MAX_BYTES_LEN`].
pub(crate) fn check_len(len: usize) -> Result<(), Error> {
    if len > MAX_BYTES_LEN {
        return Err(Error::OverLongBytes);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasmc_test::TestHost;

    #[test]
    fn invalid_slot_sentinel_is_u256_max() {
        assert!(!StorageSlot::INVALID.is_valid());
        assert_eq!(StorageSlot::INVALID.slot, U256::MAX);
    }

    #[test]
    fn packed_write_preserves_neighboring_bytes() {
        let host = TestHost::new();
        let slot = U256::from(1u8);
        write_packed(&host, Tier::Persistent, slot, 0, 4, {
            let mut w = [0u8; 32];
            w[28..32].copy_from_slice(&[0xaa, 0xbb, 0xcc, 0xdd]);
            w
        });
        write_packed(&host, Tier::Persistent, slot, 4, 4, {
            let mut w = [0u8; 32];
            w[28..32].copy_from_slice(&[0x11, 0x22, 0x33, 0x44]);
            w
        });
        let first = read_packed(&host, Tier::Persistent, slot, 0, 4);
        assert_eq!(&first[28..32], &[0xaa, 0xbb, 0xcc, 0xdd]);
        let second = read_packed(&host, Tier::Persistent, slot, 4, 4);
        assert_eq!(&second[28..32], &[0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn persistent_and_transient_tiers_are_independent() {
        let host = TestHost::new();
        let slot = U256::from(2u8);
        write_packed(&host, Tier::Persistent, slot, 0, 32, [1u8; 32]);
        write_packed(&host, Tier::Transient, slot, 0, 32, [2u8; 32]);
        assert_eq!(load(&host, Tier::Persistent, slot), [1u8; 32]);
        assert_eq!(load(&host, Tier::Transient, slot), [2u8; 32]);
    }

    #[test]
    fn mapping_slot_is_deterministic_and_key_sensitive() {
        let host = TestHost::new();
        let base = U256::from(7u8);
        let a = mapping_slot(&host, base, &U256::from(1u8));
        let b = mapping_slot(&host, base, &U256::from(1u8));
        let c = mapping_slot(&host, base, &U256::from(2u8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn elements_base_slot_is_stable() {
        let host = TestHost::new();
        let slot = U256::from(8u8);
        assert_eq!(elements_base_slot(&host, slot), elements_base_slot(&host, slot));
    }

    #[test]
    fn check_len_rejects_over_the_cap() {
        assert!(check_len(MAX_BYTES_LEN).is_ok());
        assert!(check_len(MAX_BYTES_LEN + 1).is_err());
    }
}
