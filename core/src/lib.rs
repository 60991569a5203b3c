//! Shared types and trait definitions for the `wasmc` contract SDK.
//!
//! This crate has no host-specific code in it: [`U256`] and [`Address`] are
//! plain value types, [`Error`] is the shared error taxonomy, and [`Host`]
//! (plus its sub-traits) is the seam that both the real `wasm32` guest
//! implementation (`wasmc-sdk`) and the in-memory mock (`wasmc-test`)
//! implement against.
#![no_std]

extern crate alloc;

mod address;
mod error;
mod u256;

pub mod calls;
pub mod host;

pub use address::Address;
pub use error::Error;
pub use host::{Host, HostAccess};
pub use u256::U256;
