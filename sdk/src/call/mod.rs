//! The outbound-call API: the four call flavors unified behind one
//! signature, returning a uniform `Result` instead of
//! the host's raw status code. Built against [`wasmc_core::host::CallAccess`]
//! so it runs the same whether `H` is the real `wasm32` guest host or
//! `wasmc-test`'s mock.

extern crate alloc;

use alloc::vec::Vec;

use wasmc_core::calls::{CallContext, MutatingCallContext, NonPayableCallContext, StaticCallContext};
use wasmc_core::host::{CallAccess, CalldataAccess, ContextAccess};
use wasmc_core::{Address, Error};

/// Forwards `gas_left * 63/64` to an outbound call, leaving `1/64` for
/// this invocation's post-call processing (the EIP-150-style stipend
/// rule). `host` supplies `gas_left`; callers that already
/// know their budget may skip this and pass an explicit gas figure to
/// [`Call::gas`]-style contexts instead.
pub fn current_call_info<H: ContextAccess>(host: &H) -> u64 {
    let gas = host.gas_left();
    gas - gas / 64
}

/// Converts a raw host call-status code plus its freshly-copied return
/// data into the public `Result` convention: `0` is success, anything
/// else is forwarded as [`Error::CallFailed`].
fn call_result(status: u8, data: Vec<u8>) -> Result<Vec<u8>, Error> {
    if status == 0 {
        Ok(data)
    } else {
        Err(Error::CallFailed(status as i32, data))
    }
}

/// Copies the return data a just-completed outbound call left behind,
/// using the length the call itself reported.
fn take_return_data<H: CalldataAccess>(host: &H, outs_len: usize) -> Vec<u8> {
    if outs_len == 0 {
        Vec::new()
    } else {
        host.read_return_data(0, Some(outs_len))
    }
}

/// A regular value-transferring call.
pub fn call<H, C>(host: &H, ctx: &C, to: Address, data: &[u8]) -> Result<Vec<u8>, Error>
where
    H: CallAccess + CalldataAccess,
    C: MutatingCallContext,
{
    let mut outs_len = 0usize;
    // SAFETY: `data` and the scratch `outs_len` both outlive this call.
    let status = unsafe { host.call_contract(to, data, ctx.value(), ctx.gas(), &mut outs_len) };
    call_result(status, take_return_data(host, outs_len))
}

/// A call that runs the callee's code but keeps `to`'s storage as the
/// account being charged (CALLCODE semantics).
pub fn call_code<H, C>(host: &H, ctx: &C, to: Address, data: &[u8]) -> Result<Vec<u8>, Error>
where
    H: CallAccess + CalldataAccess,
    C: MutatingCallContext,
{
    let mut outs_len = 0usize;
    let status =
        unsafe { host.call_code_contract(to, data, ctx.value(), ctx.gas(), &mut outs_len) };
    call_result(status, take_return_data(host, outs_len))
}

/// A delegate call: runs `to`'s code against the caller's own storage and
/// context, with no value transfer.
pub fn call_delegate<H, C>(host: &H, ctx: &C, to: Address, data: &[u8]) -> Result<Vec<u8>, Error>
where
    H: CallAccess + CalldataAccess,
    C: CallContext,
{
    let mut outs_len = 0usize;
    let status = unsafe { host.delegate_call_contract(to, data, ctx.gas(), &mut outs_len) };
    call_result(status, take_return_data(host, outs_len))
}

/// A static call: must not modify state; no value transfer.
pub fn call_static<H, C>(host: &H, ctx: &C, to: Address, data: &[u8]) -> Result<Vec<u8>, Error>
where
    H: CallAccess + CalldataAccess,
    C: StaticCallContext,
{
    let mut outs_len = 0usize;
    let status = unsafe { host.static_call_contract(to, data, ctx.gas(), &mut outs_len) };
    call_result(status, take_return_data(host, outs_len))
}

/// A non-payable mutating call, provided as a convenience for the common
/// "plain call, no value" case without requiring callers to import
/// [`NonPayableCallContext`] themselves.
pub fn call_plain<H, C>(host: &H, ctx: &C, to: Address, data: &[u8]) -> Result<Vec<u8>, Error>
where
    H: CallAccess + CalldataAccess,
    C: NonPayableCallContext,
{
    call(host, ctx, to, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasmc_core::calls::Call;
    use wasmc_core::U256;
    use wasmc_test::TestHost;

    #[test]
    fn call_result_maps_status_codes() {
        assert_eq!(call_result(0, alloc::vec![1, 2, 3]), Ok(alloc::vec![1, 2, 3]));
        assert_eq!(
            call_result(1, alloc::vec![9]),
            Err(Error::CallFailed(1, alloc::vec![9]))
        );
    }

    #[test]
    fn gas_stipend_forwards_63_of_64() {
        let host = TestHost::new();
        host.set_gas_left(64_000);
        assert_eq!(current_call_info(&host), 63_000);
    }

    #[test]
    fn call_returns_the_mocked_success_payload() {
        let host = TestHost::new();
        let to = Address::new([1u8; 20]);
        host.mock_call(to, alloc::vec![1, 2], U256::ZERO, Ok(alloc::vec![9, 9]));

        let got = call(&host, &Call::new(), to, &[1, 2]);
        assert_eq!(got, Ok(alloc::vec![9, 9]));
    }

    #[test]
    fn call_surfaces_a_mocked_revert() {
        let host = TestHost::new();
        let to = Address::new([2u8; 20]);
        host.mock_call(to, alloc::vec![], U256::ZERO, Err(alloc::vec![0xde, 0xad]));

        let got = call_plain(&host, &Call::new(), to, &[]);
        assert_eq!(got, Err(Error::CallFailed(1, alloc::vec![0xde, 0xad])));
    }

    #[test]
    fn static_call_does_not_require_a_value() {
        let host = TestHost::new();
        let to = Address::new([3u8; 20]);
        host.mock_static_call(to, alloc::vec![7], Ok(alloc::vec![8]));

        let got = call_static(&host, &Call::new(), to, &[7]);
        assert_eq!(got, Ok(alloc::vec![8]));
    }

    #[test]
    fn delegate_call_ignores_value() {
        let host = TestHost::new();
        let to = Address::new([4u8; 20]);
        host.mock_delegate_call(to, alloc::vec![], Ok(alloc::vec![1]));

        let got = call_delegate(&host, &Call::new(), to, &[]);
        assert_eq!(got, Ok(alloc::vec![1]));
    }
}
