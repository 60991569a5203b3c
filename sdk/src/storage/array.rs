//! `StorageArray`: a dynamic array whose declared slot holds the element
//! count, with elements at `keccak256(slot) + i`. This
//! core only supports full 32-byte elements (packed arrays of narrower
//! elements are an explicit Non-goal), so every element occupies exactly
//! one slot and index arithmetic never has to reason about element
//! density.

extern crate alloc;

use core::marker::PhantomData;

use wasmc_core::host::{CryptoAccess, StorageAccess};
use wasmc_core::U256;

use super::elements_base_slot;

/// A dynamic array at a fixed declared slot. `V` is constructed fresh for
/// each element access via a caller-supplied constructor, the same way
/// [`super::StorageMap`] defers to its caller for the value type.
pub struct StorageArray<H, V> {
    host: H,
    slot: U256,
    marker: PhantomData<V>,
}

impl<H: StorageAccess + CryptoAccess + Clone, V> StorageArray<H, V> {
    pub fn new(host: H, slot: U256) -> Self {
        StorageArray {
            host,
            slot,
            marker: PhantomData,
        }
    }

    pub fn len(&self) -> U256 {
        U256::from_be_bytes(self.host.storage_load(self.slot))
    }

    pub fn is_empty(&self) -> bool {
        self.len().is_zero()
    }

    fn base(&self) -> U256 {
        elements_base_slot(&self.host, self.slot)
    }

    fn element_slot(&self, index: U256) -> U256 {
        self.base() + index
    }

    /// Builds the element accessor at `index` using `make(host, slot)`,
    /// without checking `index` against the current length: callers who
    /// want a bounds-checked accessor should compare against [`Self::len`]
    /// first.
    pub fn at<F>(&self, index: U256, make: F) -> V
    where
        F: FnOnce(H, U256) -> V,
    {
        make(self.host.clone(), self.element_slot(index))
    }

    /// Appends a new element, growing the length by one, writing the
    /// element itself as part of the push (a bare length bump with no
    /// element write would leave a pushed-then-read value stale or zero).
    pub fn push<F>(&mut self, make_and_write: F)
    where
        F: FnOnce(H, U256),
    {
        let index = self.len();
        make_and_write(self.host.clone(), self.element_slot(index));
        self.host
            .storage_store(self.slot, (index + U256::from_u128(1)).bytes());
    }

    /// Removes the last element by decrementing the length. The old slot's
    /// contents are left in place (Solidity's own `pop` semantics: storage
    /// is not zeroed, just no longer addressable through the array).
    pub fn pop(&mut self) {
        let len = self.len();
        if len.is_zero() {
            return;
        }
        self.host
            .storage_store(self.slot, (len - U256::from_u128(1)).bytes());
    }

    /// Writes the element at `index`, extending the length by one if
    /// `index == len()`.
    pub fn set<F>(&mut self, index: U256, write: F)
    where
        F: FnOnce(H, U256),
    {
        let len = self.len();
        write(self.host.clone(), self.element_slot(index));
        if index == len {
            self.host
                .storage_store(self.slot, (len + U256::from_u128(1)).bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasmc_test::TestHost;

    fn make_word(host: TestHost, slot: U256) -> super::super::StorageWord<TestHost> {
        super::super::StorageWord::new(host, slot)
    }

    #[test]
    fn starts_empty() {
        let host = TestHost::new();
        let array: StorageArray<TestHost, super::super::StorageWord<TestHost>> =
            StorageArray::new(host, U256::from(10u8));
        assert!(array.is_empty());
        assert_eq!(array.len(), U256::ZERO);
    }

    #[test]
    fn push_writes_the_element() {
        let host = TestHost::new();
        let mut array: StorageArray<TestHost, super::super::StorageWord<TestHost>> =
            StorageArray::new(host, U256::from(11u8));

        array.push(|h, slot| make_word(h, slot).set(U256::from(42u8)));
        array.push(|h, slot| make_word(h, slot).set(U256::from(43u8)));

        assert_eq!(array.len(), U256::from(2u8));
        assert_eq!(array.at(U256::ZERO, make_word).get(), U256::from(42u8));
        assert_eq!(array.at(U256::from(1u8), make_word).get(), U256::from(43u8));
    }

    #[test]
    fn pop_decrements_length_without_zeroing_storage() {
        let host = TestHost::new();
        let mut array: StorageArray<TestHost, super::super::StorageWord<TestHost>> =
            StorageArray::new(host, U256::from(12u8));
        array.push(|h, slot| make_word(h, slot).set(U256::from(7u8)));
        array.pop();
        assert!(array.is_empty());
        assert_eq!(array.at(U256::ZERO, make_word).get(), U256::from(7u8));
    }

    #[test]
    fn set_at_len_extends() {
        let host = TestHost::new();
        let mut array: StorageArray<TestHost, super::super::StorageWord<TestHost>> =
            StorageArray::new(host, U256::from(13u8));
        array.set(U256::ZERO, |h, slot| make_word(h, slot).set(U256::from(1u8)));
        assert_eq!(array.len(), U256::from(1u8));
    }
}
