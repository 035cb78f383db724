use crate::featurebits::{
    version_signals, Bip9Deployment, DeploymentPos, ThresholdState, WindowSummary,
    MAX_VERSION_BITS_DEPLOYMENTS,
};

const THRESHOLD: u32 = 1916;

fn deployment() -> Bip9Deployment {
    Bip9Deployment {
        bit: 0,
        start_time: 1_000,
        timeout: 2_000,
    }
}

fn window(median_time_past: i64, signal_count: u32) -> WindowSummary {
    WindowSummary {
        median_time_past,
        signal_count,
        threshold: THRESHOLD,
    }
}

#[test]
fn defined_waits_for_start_time() {
    let d = deployment();
    assert_eq!(
        ThresholdState::Defined.next(&d, &window(999, THRESHOLD)),
        ThresholdState::Defined
    );
    assert_eq!(
        ThresholdState::Defined.next(&d, &window(1_000, 0)),
        ThresholdState::Started
    );
}

#[test]
fn defined_fails_when_timeout_passes_first() {
    let d = deployment();
    assert_eq!(
        ThresholdState::Defined.next(&d, &window(2_000, 0)),
        ThresholdState::Failed
    );
}

#[test]
fn started_locks_in_at_threshold() {
    let d = deployment();
    // Signals in the window that moved us to STARTED do not count toward lock-in.
    let started = ThresholdState::Defined.next(&d, &window(1_500, THRESHOLD));
    assert_eq!(started, ThresholdState::Started);

    assert_eq!(
        started.next(&d, &window(1_600, THRESHOLD - 1)),
        ThresholdState::Started
    );
    assert_eq!(
        started.next(&d, &window(1_600, THRESHOLD)),
        ThresholdState::LockedIn
    );
}

#[test]
fn started_times_out_to_failed() {
    let d = deployment();
    assert_eq!(
        ThresholdState::Started.next(&d, &window(2_000, THRESHOLD)),
        ThresholdState::Failed
    );
}

#[test]
fn locked_in_activates_unconditionally_and_terminals_stick() {
    let d = deployment();
    assert_eq!(
        ThresholdState::LockedIn.next(&d, &window(5_000, 0)),
        ThresholdState::Active
    );
    for terminal in [ThresholdState::Active, ThresholdState::Failed] {
        assert!(terminal.is_terminal());
        assert_eq!(terminal.next(&d, &window(0, THRESHOLD)), terminal);
        assert_eq!(terminal.next(&d, &window(9_999, 0)), terminal);
    }
    assert!(!ThresholdState::LockedIn.is_terminal());
}

#[test]
fn state_names() {
    let names: Vec<&str> = [
        ThresholdState::Defined,
        ThresholdState::Started,
        ThresholdState::LockedIn,
        ThresholdState::Active,
        ThresholdState::Failed,
    ]
    .iter()
    .map(ThresholdState::as_str)
    .collect();
    assert_eq!(names, ["DEFINED", "STARTED", "LOCKED_IN", "ACTIVE", "FAILED"]);
}

#[test]
fn version_bit_signalling() {
    assert!(version_signals(0x2000_0001, 0));
    assert!(version_signals(0x3000_0000, 28));
    assert!(!version_signals(0x2000_0000, 0));
    // Legacy versions without the top-bits marker never signal.
    assert!(!version_signals(0x0000_0001, 0));
    assert!(!version_signals(0x6000_0001, 0));
    // Bits 29..=31 are reserved.
    assert!(!version_signals(0x3fff_ffff, 29));
}

#[test]
fn overlapping_windows_on_same_bit_conflict() {
    let a = deployment();
    let b = Bip9Deployment {
        bit: 0,
        start_time: 1_999,
        timeout: 3_000,
    };
    let c = Bip9Deployment {
        bit: 0,
        start_time: 2_000,
        timeout: 3_000,
    };
    let other_bit = Bip9Deployment { bit: 1, ..b };
    assert!(a.conflicts_with(&b));
    assert!(!a.conflicts_with(&c));
    assert!(!a.conflicts_with(&other_bit));
    assert_eq!(b.mask(), 1);
    assert_eq!(other_bit.mask(), 2);
}

#[test]
fn deployment_positions() {
    assert_eq!(MAX_VERSION_BITS_DEPLOYMENTS, 2);
    assert_eq!(DeploymentPos::TestDummy.index(), 0);
    assert_eq!(DeploymentPos::Csv.index(), 1);
    assert_eq!(DeploymentPos::Csv.as_str(), "csv");
}

#[test]
fn out_of_range_bits_have_empty_mask() {
    let top = Bip9Deployment { bit: 28, ..deployment() };
    assert_eq!(top.mask(), 1 << 28);
    for bit in [29u8, 31, 32, 40, u8::MAX] {
        let d = Bip9Deployment { bit, ..deployment() };
        assert!(!d.bit_in_range());
        assert_eq!(d.mask(), 0, "bit {bit}");
        assert!(!version_signals(0x3fff_ffff, bit));
    }
}
