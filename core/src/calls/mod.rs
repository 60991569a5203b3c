//! Call-context traits: typed descriptions of "how much gas, how much value"
//! to attach to an outbound call, independent of which of the four call
//! flavors ends up using them.

extern crate alloc;

pub mod context;

pub use context::Call;

/// Anything that can describe a gas budget for an outbound call.
pub trait CallContext {
    /// Gas to forward. Implementations may return more than is actually
    /// available; the host clamps to what remains (see the EIP-150-style
    /// 63/64 forwarding rule used by [`crate::U256`]-denominated calls).
    fn gas(&self) -> u64;
}

/// A call context usable with `call_static`: carries no value.
pub trait StaticCallContext: CallContext {}

/// A call context usable with `call`/`call_code`/`call_delegate`.
///
/// # Safety
/// Implementations must ensure `value()` is zero whenever the call kind
/// forbids value transfer (delegate and static calls never carry value).
pub unsafe trait MutatingCallContext: CallContext {
    fn value(&self) -> crate::U256;
}

/// A mutating call context that is guaranteed not to carry value.
pub trait NonPayableCallContext: MutatingCallContext {}
