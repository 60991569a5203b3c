//! `StorageMap`: a mapping from a value- or variable-length-typed key to a
//! scalar, backed by the `keccak256`-derived slot rule. Nesting falls out
//! of composition (`StorageMap<K, StorageMap<K2, V>>`)
//! rather than a dedicated type, since the outer key's derived slot is
//! already usable as the inner mapping's own base slot.

extern crate alloc;

use core::marker::PhantomData;

use wasmc_core::host::{CryptoAccess, StorageAccess};
use wasmc_core::U256;

use super::{mapping_slot, MappingKey};

/// A mapping at a fixed base slot. `V` is constructed fresh on every access
/// by whatever scalar/array constructor the caller supplies, exactly as
/// Solidity mappings have no length and no iteration.
pub struct StorageMap<H, K, V> {
    host: H,
    base: U256,
    marker: PhantomData<(K, V)>,
}

impl<H: Clone, K, V> StorageMap<H, K, V> {
    pub fn new(host: H, base: U256) -> Self {
        StorageMap {
            host,
            base,
            marker: PhantomData,
        }
    }
}

impl<H: StorageAccess + CryptoAccess + Clone, K: MappingKey, V> StorageMap<H, K, V> {
    /// Derives the slot a given key's value lives at. Callers construct
    /// their own `V` scalar/array/bytes accessor at this slot; `StorageMap`
    /// itself holds no type-specific read/write logic, matching the "the
    /// outer key's derived slot as the inner container's base slot" rule
    /// used for nested mappings and arrays alike.
    pub fn slot_for(&self, key: &K) -> U256 {
        mapping_slot(&self.host, self.base, key)
    }

    /// Builds the nested map/array/scalar accessor for `key` using
    /// `make(host, slot)`. This is the single call site nested containers
    /// and scalar accessors both go through.
    pub fn at<F>(&self, key: &K, make: F) -> V
    where
        F: FnOnce(H, U256) -> V,
    {
        let slot = self.slot_for(key);
        make(self.host.clone(), slot)
    }

    /// A convenience constructor for a nested mapping: `self` becomes the
    /// outer map, and the value at `key` is itself a fresh `StorageMap<K2,
    /// V2>` rooted at the derived slot: nested mappings/arrays recurse, with
    /// the outer key's derived slot becoming the inner container's base slot.
    pub fn get_nested_map<K2: MappingKey, V2>(&self, key: &K) -> StorageMap<H, K2, V2> {
        StorageMap::new(self.host.clone(), self.slot_for(key))
    }

    /// A convenience constructor for an array nested under a mapping key:
    /// the array's own declared slot is the key's derived slot.
    pub fn get_nested_array<V2>(&self, key: &K) -> super::StorageArray<H, V2> {
        super::StorageArray::new(self.host.clone(), self.slot_for(key))
    }
}
