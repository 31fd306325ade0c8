//! Provider sessions release their native context on every exit path

use ecid_api::Error;
use ecid_provider::{ProviderSession, SessionFlags};
use ecid_tests::alloc::{live_bytes, CountingAllocator};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

const SESSIONS: usize = 10_000;

fn all_flag_sets() -> [SessionFlags; 3] {
    [
        SessionFlags::SIGN,
        SessionFlags::VERIFY,
        SessionFlags::SIGN | SessionFlags::VERIFY,
    ]
}

#[test]
fn test_discarded_sessions_leak_nothing() {
    // Warm up one-time registrations before taking the baseline.
    for flags in all_flag_sets() {
        drop(ProviderSession::new(flags).unwrap());
    }

    let baseline = live_bytes();
    for i in 0..SESSIONS {
        let flags = all_flag_sets()[i % 3];
        let session = ProviderSession::new(flags).unwrap();
        drop(session);
    }
    assert_eq!(live_bytes(), baseline);
}

fn early_return(flags: SessionFlags, fail: bool) -> ecid_api::Result<usize> {
    let session = ProviderSession::new(flags)?;
    if fail {
        // Session dropped on the error path
        session.parse_public_key(&[0u8; 33])?;
    }
    Ok(session.flags().bits() as usize)
}

#[test]
fn test_error_paths_release_sessions() {
    early_return(SessionFlags::VERIFY, false).unwrap();
    let _ = early_return(SessionFlags::VERIFY, true);

    let baseline = live_bytes();
    for _ in 0..1_000 {
        let err = early_return(SessionFlags::VERIFY, true).unwrap_err();
        assert!(matches!(err, Error::MalformedPoint { .. }));
        assert!(early_return(SessionFlags::SIGN, false).is_ok());
    }
    assert_eq!(live_bytes(), baseline);
}

#[test]
fn test_failed_construction_allocates_nothing() {
    let baseline = live_bytes();
    for _ in 0..100 {
        assert!(ProviderSession::new(SessionFlags::empty()).is_err());
    }
    // The error message itself is freed with the error.
    assert_eq!(live_bytes(), baseline);
}

#[test]
fn test_live_session_count_tracks_sessions() {
    let handle = std::thread::spawn(|| {
        let sessions: Vec<_> = (0..32)
            .map(|_| ProviderSession::new(SessionFlags::VERIFY).unwrap())
            .collect();
        assert!(ProviderSession::live_sessions() >= 32);
        drop(sessions);
    });
    handle.join().unwrap();
}
