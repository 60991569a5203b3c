//! A small builder for configuring an outbound call's gas and value without
//! committing to a concrete storage type.

use crate::U256;

use super::{CallContext, MutatingCallContext, NonPayableCallContext, StaticCallContext};

/// Builds a call context. `HAS_VALUE` tracks at the type level whether
/// [`Call::value`] has been set, so a `Call` that never carried value can
/// still satisfy [`StaticCallContext`] and [`NonPayableCallContext`].
#[derive(Clone, Copy, Debug)]
pub struct Call<const HAS_VALUE: bool = false> {
    gas: u64,
    value: U256,
}

impl Call<false> {
    /// A fresh call context: all available gas, no value.
    pub fn new() -> Self {
        Call {
            gas: u64::MAX,
            value: U256::ZERO,
        }
    }
}

impl Default for Call<false> {
    fn default() -> Self {
        Call::new()
    }
}

impl<const HAS_VALUE: bool> Call<HAS_VALUE> {
    /// Limits the gas forwarded to the call. Values larger than what's
    /// left are clamped by the host.
    pub fn gas(mut self, gas: u64) -> Self {
        self.gas = gas;
        self
    }

    /// Attaches a value transfer, turning this into a `Call<true>`.
    pub fn value(self, value: U256) -> Call<true> {
        Call {
            gas: self.gas,
            value,
        }
    }
}

impl<const HAS_VALUE: bool> CallContext for Call<HAS_VALUE> {
    fn gas(&self) -> u64 {
        self.gas
    }
}

impl StaticCallContext for Call<false> {}
impl NonPayableCallContext for Call<false> {}

// SAFETY: `Call<false>::value()` is always `U256::ZERO`.
unsafe impl MutatingCallContext for Call<false> {
    fn value(&self) -> U256 {
        U256::ZERO
    }
}

// SAFETY: `Call<true>` can only be constructed via `Call::value`, which
// always records the value it was given.
unsafe impl MutatingCallContext for Call<true> {
    fn value(&self) -> U256 {
        self.value
    }
}
