//! The error taxonomy shared across the codec, storage engine, and call API.
//!
//! Everything except [`Error::CallFailed`] and [`Error::ContractRevert`] is a
//! "this invocation cannot continue" condition: the entrypoint converts it
//! into a host `revert` call carrying [`Error::message`] as the payload.
//! `CallFailed` is recovered locally by outbound-call callers; it is not a
//! terminal condition for the caller's own invocation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A decode would have read past the end of the input buffer.
    DataTooShort,
    /// A whole-message decode left bytes unconsumed.
    TrailingData,
    /// A hex string had an odd length or a non-hex-digit byte.
    InvalidHex,
    /// A stored byte-string's decoded length exceeded the safety cap.
    OverLongBytes,
    /// Division or modulo was attempted on a [`crate::U256`].
    ArithmeticUnimplemented,
    /// An outbound call returned a non-zero status; the return data, if any,
    /// is forwarded to the caller unmodified.
    CallFailed(i32, Vec<u8>),
    /// The contract itself invoked `revert` with this payload.
    ContractRevert(Vec<u8>),
    /// No method matched the inbound selector and no fallback handled it.
    NoMethodMatched,
}

impl Error {
    /// The bytes that should be passed to the host's `revert` import.
    pub fn message(&self) -> Vec<u8> {
        match self {
            Error::DataTooShort => b"data too short".to_vec(),
            Error::TrailingData => b"trailing data".to_vec(),
            Error::InvalidHex => b"invalid hex".to_vec(),
            Error::OverLongBytes => b"byte string too long".to_vec(),
            Error::ArithmeticUnimplemented => b"arithmetic unimplemented".to_vec(),
            Error::CallFailed(_, data) => data.clone(),
            Error::ContractRevert(data) => data.clone(),
            Error::NoMethodMatched => b"no method matched".to_vec(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DataTooShort => write!(f, "data too short"),
            Error::TrailingData => write!(f, "trailing data"),
            Error::InvalidHex => write!(f, "invalid hex"),
            Error::OverLongBytes => write!(f, "byte string too long"),
            Error::ArithmeticUnimplemented => write!(f, "arithmetic unimplemented"),
            Error::CallFailed(code, _) => write!(f, "call failed with code {code}"),
            Error::ContractRevert(_) => write!(f, "contract reverted"),
            Error::NoMethodMatched => write!(f, "no method matched"),
        }
    }
}

impl From<Error> for Vec<u8> {
    fn from(err: Error) -> Vec<u8> {
        err.message()
    }
}
