//! 20-byte account address, right-aligned inside its 32-byte ABI/storage form.

use core::fmt;

/// An opaque 20-byte account identifier.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address([0u8; 20])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Expands to the canonical 32-byte form: 12 zero bytes followed by the address.
    pub fn to_bytes32(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[12..32].copy_from_slice(&self.0);
        out
    }

    /// Reads the low 20 bytes out of a 32-byte word (the high 12 bytes are ignored).
    pub fn from_bytes32(word: &[u8; 32]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..32]);
        Address(bytes)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_right_aligned() {
        let raw = [0x11u8, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa,
                   0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa];
        let addr = Address::new(raw);
        let word = addr.to_bytes32();
        assert_eq!(&word[0..12], &[0u8; 12]);
        assert_eq!(&word[12..32], &raw);
    }

    #[test]
    fn zero_is_defined() {
        assert!(Address::zero().is_zero());
    }
}
