//! Scalar storage accessors: full-width words and packed sub-width
//! integers/booleans/addresses sharing one slot with their neighbors.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::host::{CryptoAccess, StorageAccess};
use wasmc_core::{Address, Error, U256};

use super::{check_len, elements_base_slot, read_packed, write_packed, StorageSlot, Tier};

/// A full 32-byte storage word: no packing, no read-modify-write.
#[derive(Clone, Copy, Debug)]
pub struct StorageWord<H> {
    host: H,
    slot: U256,
    tier: Tier,
}

impl<H: StorageAccess> StorageWord<H> {
    pub fn new(host: H, slot: U256) -> Self {
        StorageWord {
            host,
            slot,
            tier: Tier::Persistent,
        }
    }

    pub fn transient(host: H, slot: U256) -> Self {
        StorageWord {
            host,
            slot,
            tier: Tier::Transient,
        }
    }

    pub fn get(&self) -> U256 {
        U256::from_be_bytes(read_packed(&self.host, self.tier, self.slot, 0, 32))
    }

    pub fn set(&mut self, value: U256) {
        write_packed(&self.host, self.tier, self.slot, 0, 32, value.bytes());
    }
}

macro_rules! impl_packed_uint {
    ($name:ident, $native:ty, $width:expr) => {
        #[doc = concat!("A packed ", stringify!($width), "-byte unsigned integer sharing a slot with its neighbors.")]
        #[derive(Clone, Copy, Debug)]
        pub struct $name<H> {
            host: H,
            location: StorageSlot,
        }

        impl<H: StorageAccess> $name<H> {
            pub fn new(host: H, slot: U256, offset: u8) -> Self {
                $name {
                    host,
                    location: StorageSlot::new(slot, offset),
                }
            }

            pub fn get(&self) -> $native {
                let word = read_packed(
                    &self.host,
                    Tier::Persistent,
                    self.location.slot,
                    self.location.offset,
                    $width,
                );
                let mut bytes = [0u8; core::mem::size_of::<$native>()];
                bytes.copy_from_slice(&word[32 - $width..]);
                <$native>::from_be_bytes(bytes)
            }

            pub fn set(&mut self, value: $native) {
                let mut word = [0u8; 32];
                word[32 - $width..].copy_from_slice(&value.to_be_bytes());
                write_packed(
                    &self.host,
                    Tier::Persistent,
                    self.location.slot,
                    self.location.offset,
                    $width,
                    word,
                );
            }
        }
    };
}

impl_packed_uint!(StorageU8, u8, 1);
impl_packed_uint!(StorageU16, u16, 2);
impl_packed_uint!(StorageU32, u32, 4);
impl_packed_uint!(StorageU64, u64, 8);
impl_packed_uint!(StorageU128, u128, 16);

/// A packed boolean: width 1, non-zero is true.
#[derive(Clone, Copy, Debug)]
pub struct StorageBool<H> {
    host: H,
    location: StorageSlot,
}

impl<H: StorageAccess> StorageBool<H> {
    pub fn new(host: H, slot: U256, offset: u8) -> Self {
        StorageBool {
            host,
            location: StorageSlot::new(slot, offset),
        }
    }

    pub fn get(&self) -> bool {
        let word = read_packed(&self.host, Tier::Persistent, self.location.slot, self.location.offset, 1);
        word[31] != 0
    }

    pub fn set(&mut self, value: bool) {
        let mut word = [0u8; 32];
        word[31] = value as u8;
        write_packed(
            &self.host,
            Tier::Persistent,
            self.location.slot,
            self.location.offset,
            1,
            word,
        );
    }
}

/// A packed address: width 20, right-padded within its 32-byte slot.
#[derive(Clone, Copy, Debug)]
pub struct StorageAddress<H> {
    host: H,
    location: StorageSlot,
}

impl<H: StorageAccess> StorageAddress<H> {
    pub fn new(host: H, slot: U256, offset: u8) -> Self {
        StorageAddress {
            host,
            location: StorageSlot::new(slot, offset),
        }
    }

    pub fn get(&self) -> Address {
        let word = read_packed(&self.host, Tier::Persistent, self.location.slot, self.location.offset, 20);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..32]);
        Address::new(bytes)
    }

    pub fn set(&mut self, value: Address) {
        let mut word = [0u8; 32];
        word[12..32].copy_from_slice(value.as_bytes());
        write_packed(
            &self.host,
            Tier::Persistent,
            self.location.slot,
            self.location.offset,
            20,
            word,
        );
    }
}

/// A byte string/blob at `(slot, 0)`: inline when `length <= 31` (content
/// followed by the `length*2` marker at byte index `length`, then
/// zero-fill), spilled into `keccak256(slot)..` when longer.
#[derive(Clone, Copy, Debug)]
pub struct StorageBytes<H> {
    host: H,
    slot: U256,
}

impl<H: StorageAccess + CryptoAccess> StorageBytes<H> {
    pub fn new(host: H, slot: U256) -> Self {
        StorageBytes { host, slot }
    }

    pub fn get(&self) -> Result<Vec<u8>, Error> {
        let header = self.host.storage_load(self.slot);
        if header[31] & 1 == 0 {
            // Short form: the marker `length*2` sits immediately after the
            // content, at byte index `length` itself, with the rest of the
            // slot zero-filled; scan from the end for the highest non-zero
            // byte to find it. An all-zero slot is the empty string.
            let marker_index = match header.iter().rposition(|&b| b != 0) {
                Some(idx) => idx,
                None => return Ok(Vec::new()),
            };
            let len = (header[marker_index] / 2) as usize;
            if len > 31 {
                return Err(Error::OverLongBytes);
            }
            return Ok(header[..len].to_vec());
        }
        // Long form: `U256(header) == length*2 + 1`.
        let encoded_len = U256::from_be_bytes(header);
        let len = (encoded_len.to_u64().saturating_sub(1) / 2) as usize;
        check_len(len)?;
        let base = elements_base_slot(&self.host, self.slot);
        let mut out = Vec::with_capacity(len);
        let mut remaining = len;
        let mut i = 0u128;
        while remaining > 0 {
            let word = self.host.storage_load(base + U256::from_u128(i));
            let take = remaining.min(32);
            out.extend_from_slice(&word[..take]);
            remaining -= take;
            i += 1;
        }
        Ok(out)
    }

    pub fn set(&mut self, value: &[u8]) -> Result<(), Error> {
        check_len(value.len())?;
        if value.len() <= 31 {
            let mut header = [0u8; 32];
            header[..value.len()].copy_from_slice(value);
            header[value.len()] = (value.len() as u8) * 2;
            self.host.storage_store(self.slot, header);
            return Ok(());
        }
        let header = U256::from_u128(value.len() as u128 * 2 + 1);
        self.host.storage_store(self.slot, header.bytes());
        let base = elements_base_slot(&self.host, self.slot);
        let mut i = 0u128;
        for chunk in value.chunks(32) {
            let mut word = [0u8; 32];
            word[..chunk.len()].copy_from_slice(chunk);
            self.host.storage_store(base + U256::from_u128(i), word);
            i += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasmc_test::TestHost;

    #[test]
    fn word_round_trips() {
        let host = TestHost::new();
        let mut word = StorageWord::new(host, U256::from(1u8));
        word.set(U256::from(0xdeadbeefu64));
        assert_eq!(word.get(), U256::from(0xdeadbeefu64));
    }

    #[test]
    fn packed_uints_share_a_slot_without_clobbering() {
        let host = TestHost::new();
        let slot = U256::from(3u8);
        let mut a = StorageU32::new(host.clone(), slot, 0);
        let mut b = StorageU64::new(host.clone(), slot, 4);
        a.set(0x11223344);
        b.set(0x5566778899aabbcc);
        assert_eq!(a.get(), 0x11223344);
        assert_eq!(b.get(), 0x5566778899aabbcc);
    }

    #[test]
    fn bool_is_nonzero() {
        let host = TestHost::new();
        let slot = U256::from(4u8);
        let mut flag = StorageBool::new(host, slot, 0);
        assert!(!flag.get());
        flag.set(true);
        assert!(flag.get());
    }

    #[test]
    fn address_round_trips_right_padded() {
        let host = TestHost::new();
        let slot = U256::from(5u8);
        let mut a = StorageAddress::new(host, slot, 0);
        let addr = Address::new([7u8; 20]);
        a.set(addr);
        assert_eq!(a.get(), addr);
    }

    #[test]
    fn bytes_short_form_round_trips() {
        let host = TestHost::new();
        let mut b = StorageBytes::new(host, U256::from(6u8));
        b.set(b"hello").unwrap();
        assert_eq!(b.get().unwrap(), b"hello".to_vec());
    }

    #[test]
    fn bytes_short_form_marker_sits_right_after_the_content() {
        // Scenario: a 5-byte value at slot S reads raw as
        // `<5 bytes>‖0x0a‖0-pad` (length*2 = 10), marker immediately after
        // the content rather than fixed at byte 31.
        let host = TestHost::new();
        let slot = U256::from(9u8);
        let mut b = StorageBytes::new(host.clone(), slot);
        b.set(b"hello").unwrap();
        let raw = host.get_storage(slot);
        assert_eq!(&raw[..5], b"hello");
        assert_eq!(raw[5], 0x0a);
        assert_eq!(&raw[6..], &[0u8; 26]);
    }

    #[test]
    fn bytes_empty_short_form_is_an_all_zero_slot() {
        let host = TestHost::new();
        let slot = U256::from(14u8);
        let mut b = StorageBytes::new(host.clone(), slot);
        b.set(b"").unwrap();
        assert_eq!(host.get_storage(slot), [0u8; 32]);
        assert_eq!(b.get().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn bytes_long_form_spills_into_keccak_derived_slots() {
        let host = TestHost::new();
        let mut b = StorageBytes::new(host, U256::from(7u8));
        let value: Vec<u8> = (0u8..100).collect();
        b.set(&value).unwrap();
        assert_eq!(b.get().unwrap(), value);
    }

    #[test]
    fn bytes_exact_31_bytes_stays_inline() {
        let host = TestHost::new();
        let mut b = StorageBytes::new(host, U256::from(8u8));
        let value = vec![9u8; 31];
        b.set(&value).unwrap();
        assert_eq!(b.get().unwrap(), value);
    }
}
