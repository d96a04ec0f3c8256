//! Checked helper behavior against the recording and stub backends

use core_types::{kernel_result, ChannelHandle, ResultCode};
use kernel_api::{svc, KernelError, SleepDuration};
use sim_kernel::test_utils::{KernelCall, RecordingKernel};
use sim_kernel::StubBackend;

#[test]
fn test_connect_returns_handle_on_success() {
    let kernel = RecordingKernel::new()
        .with_connect_result(ResultCode::SUCCESS, ChannelHandle::from_raw(0x2f));

    let handle = svc::connect_to_named_port(&kernel, c"sm:").unwrap();

    assert_eq!(handle, ChannelHandle::from_raw(0x2f));
    assert_eq!(
        kernel.calls(),
        vec![KernelCall::ConnectToNamedPort(b"sm:".to_vec())]
    );
}

#[test]
fn test_connect_failure_carries_code() {
    let kernel = RecordingKernel::new()
        .with_connect_result(kernel_result::NOT_FOUND, ChannelHandle::from_raw(0xdead));

    let err = svc::connect_to_named_port(&kernel, c"sm:").unwrap_err();

    assert_eq!(err, KernelError::Result(kernel_result::NOT_FOUND));
    assert_eq!(err.result_code().as_raw(), 0xf201);
    assert_eq!(err.to_string(), "kernel call failed: 2001-0121 (0xf201)");
}

#[test]
fn test_send_sync_request_maps_nonzero_to_error() {
    let kernel = RecordingKernel::new().with_send_result(kernel_result::SESSION_CLOSED);
    let session = ChannelHandle::from_raw(3);

    assert_eq!(
        svc::send_sync_request(&kernel, session),
        Err(KernelError::Result(kernel_result::SESSION_CLOSED))
    );
    assert_eq!(kernel.calls(), vec![KernelCall::SendSyncRequest(session)]);
}

#[test]
fn test_sleep_thread_forwards_duration() {
    let kernel = RecordingKernel::new();
    svc::sleep_thread(&kernel, SleepDuration::from_millis(50));
    assert_eq!(
        kernel.calls(),
        vec![KernelCall::SleepThread(SleepDuration::from_nanos(50_000_000))]
    );
}

#[test]
fn test_stub_backend_session_flow() {
    let kernel = StubBackend::new();
    let session = svc::connect_to_named_port(&kernel, c"test:service").unwrap();
    assert_eq!(session, ChannelHandle::PLACEHOLDER);
    assert!(svc::send_sync_request(&kernel, session).is_ok());
}
