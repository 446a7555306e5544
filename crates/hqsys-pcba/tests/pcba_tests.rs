//! PCBA resolution integration tests
//!
//! Drives the resolver, registry and service against `MockSmem`.

use std::sync::{Arc, Barrier};
use std::thread;

use hqsys_pcba::{
    check_identity, BoardIdResolver, BoardVariant, PcbaService, Registry, ResolveError,
    PCBA_TABLE, PCBA_UNKNOWN_NAME,
};
use hqsys_smem::{SmemError, SmemHost, SMEM_ID_VENDOR1};
use hqsys_smem_mock::MockSmem;

// ============================================================================
// Range validation
// ============================================================================

#[test]
fn test_every_in_range_code_resolves_to_its_variant() {
    for raw in (BoardVariant::Unknown.raw() + 1)..BoardVariant::End.raw() {
        let resolver = BoardIdResolver::new(MockSmem::with_board_code(raw));
        let variant = resolver.resolve();
        assert_eq!(variant.raw(), raw);
        assert!(check_identity(resolver.identity().unwrap()).is_empty());
    }
}

#[test]
fn test_out_of_range_codes_resolve_to_unknown() {
    let end = BoardVariant::End.raw();
    let codes = [i32::MIN, -100, -1, 0, end, end + 1, 0x7f, 0x1_0000, i32::MAX];

    for raw in codes {
        let resolver = BoardIdResolver::new(MockSmem::with_board_code(raw));
        assert_eq!(resolver.resolve(), BoardVariant::Unknown, "raw = {}", raw);

        let identity = resolver.identity().unwrap();
        assert_eq!(identity.raw, Some(raw));
        assert_eq!(identity.fault, Some(ResolveError::OutOfRange(raw)));
        assert!(check_identity(identity).is_empty());
    }
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_repeated_resolve_reads_provider_once() {
    let resolver = BoardIdResolver::new(MockSmem::with_board_code(17));
    let first = resolver.resolve();
    assert_eq!(first, BoardVariant::M17_P1_1_IN);

    for _ in 0..100 {
        assert_eq!(resolver.resolve(), first);
    }
    assert_eq!(resolver.smem().read_count(), 1);
}

#[test]
fn test_repeated_resolve_after_failure_reads_provider_once() {
    let smem = MockSmem::new();
    smem.fail_with(SmemError::IoError);
    let resolver = BoardIdResolver::new(smem);

    for _ in 0..50 {
        assert_eq!(resolver.resolve(), BoardVariant::Unknown);
    }
    assert_eq!(resolver.smem().read_count(), 1);
    assert_eq!(
        resolver.identity().unwrap().fault,
        Some(ResolveError::ProviderUnavailable(SmemError::IoError))
    );
}

#[test]
fn test_region_change_after_resolution_is_ignored() {
    let smem = Arc::new(MockSmem::with_board_code(2));
    let service = PcbaService::new(smem.clone());
    assert_eq!(service.query_display_name(), "PCBA_M17_P0-1_GL");

    smem.set_item(SmemHost::Any, SMEM_ID_VENDOR1, &30i32.to_ne_bytes());
    assert_eq!(service.query_display_name(), "PCBA_M17_P0-1_GL");
    assert_eq!(smem.read_count(), 1);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_first_callers_read_once() {
    const THREADS: usize = 16;

    let smem = Arc::new(MockSmem::with_board_code(33));
    let service = Arc::new(PcbaService::new(smem.clone()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let service = service.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                service.query_display_name()
            })
        })
        .collect();

    let names: Vec<&str> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(names.iter().all(|name| *name == "PCBA_M17P_MP_IN"));
    assert_eq!(smem.read_count(), 1);
}

#[test]
fn test_concurrent_first_callers_agree_on_failure() {
    const THREADS: usize = 8;

    let smem = Arc::new(MockSmem::new());
    let resolver = Arc::new(BoardIdResolver::new(smem.clone()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let resolver = resolver.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                resolver.resolve()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), BoardVariant::Unknown);
    }
    assert_eq!(smem.read_count(), 1);
    assert!(resolver.is_resolved());
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_provider_failure() {
    let service = PcbaService::new(MockSmem::new());
    assert_eq!(service.query_display_name(), "PCBA_UNKNOW");
    assert!(service
        .resolver()
        .smem()
        .has_log_containing("[pcba] pcba config failed"));
}

#[test]
fn test_scenario_mid_range_code() {
    let service = PcbaService::new(MockSmem::with_board_code(3));
    assert_eq!(service.query_display_name(), "PCBA_M17_P0-1_IN");
}

#[test]
fn test_scenario_end_sentinel() {
    let service = PcbaService::new(MockSmem::with_board_code(BoardVariant::End.raw()));
    assert_eq!(service.resolve(), BoardVariant::Unknown);
    assert_eq!(service.query_display_name(), "PCBA_UNKNOW");
}

#[test]
fn test_every_builtin_entry_round_trips_through_smem() {
    for entry in PCBA_TABLE.iter().filter(|e| e.variant != BoardVariant::Unknown) {
        let service = PcbaService::new(MockSmem::with_board_code(entry.variant.raw()));
        assert_eq!(service.query_display_name(), entry.name);
        assert_eq!(service.show(), format!("{}\n", entry.name));
    }
}

#[test]
fn test_fallback_name_is_distinct_from_unknown_entry() {
    let registry = Registry::builtin();
    assert_eq!(registry.name_of(BoardVariant::Unknown), "PCBA_UNKNOW");
    assert_eq!(registry.name_of(BoardVariant::End), PCBA_UNKNOWN_NAME);
    assert_ne!(PCBA_UNKNOWN_NAME, "PCBA_UNKNOW");
}

// ============================================================================
// Report encoding
// ============================================================================

#[test]
fn test_identity_report_json() {
    let service = PcbaService::new(MockSmem::with_board_code(4));
    let report = service.identity_report();
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        r#"{"variant":"M17_P0_1_CN_NEW","name":"PCBA_M17_P0-1_CN_NEW","raw":4,"recognized":true}"#
    );

    let decoded: hqsys_pcba::PcbaReport = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn test_identity_report_json_for_missing_region() {
    let service = PcbaService::new(MockSmem::new());
    let json = serde_json::to_string(&service.identity_report()).unwrap();
    assert_eq!(
        json,
        r#"{"variant":"Unknown","name":"PCBA_UNKNOW","raw":null,"recognized":false}"#
    );
}
