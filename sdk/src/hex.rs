//! Hex encode/decode helpers, thin wrappers over the `hex` crate. Used by
//! debug logging and revert-message construction, so they live as free
//! functions rather than being tied to one component.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use wasmc_core::Error;

/// Lower-case hex encoding, no `0x` prefix.
pub fn hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string, accepting an optional leading `0x`/`0X`. Odd
/// length or a non-hex-digit byte is [`Error::InvalidHex`].
pub fn unhex(s: &str) -> Result<Vec<u8>, Error> {
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(s).map_err(|_| Error::InvalidHex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_bytes() {
        let data: Vec<u8> = (0u8..=255).collect();
        assert_eq!(unhex(&hex(&data)).unwrap(), data);
    }

    #[test]
    fn accepts_0x_prefix() {
        assert_eq!(unhex("0xdead").unwrap(), alloc::vec![0xde, 0xad]);
        assert_eq!(unhex("0XDEAD").unwrap(), alloc::vec![0xde, 0xad]);
    }

    #[test]
    fn rejects_odd_length() {
        assert_eq!(unhex("abc"), Err(Error::InvalidHex));
    }

    #[test]
    fn rejects_non_hex_digit() {
        assert_eq!(unhex("zz"), Err(Error::InvalidHex));
    }

    #[test]
    fn empty_round_trips() {
        assert_eq!(unhex(&hex(&[])).unwrap(), Vec::<u8>::new());
    }
}
