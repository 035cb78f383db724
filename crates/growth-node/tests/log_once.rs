//! Runs in its own test binary so the counting logger is the only one installed.

use std::sync::atomic::{AtomicUsize, Ordering};

use growth_consensus::{ChainParamsRegistry, ErrorCode, Network};
use growth_node::startup::start;
use log::{Level, LevelFilter, Log, Metadata, Record};

static ERRORS: AtomicUsize = AtomicUsize::new(0);

struct CountingLogger;

impl Log for CountingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Error {
            ERRORS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger;

#[test]
fn selection_failure_is_logged_exactly_once() {
    log::set_logger(&LOGGER).expect("logger");
    log::set_max_level(LevelFilter::Trace);

    let err = ChainParamsRegistry::new().select("bogus").unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigUnknownNetwork);
    assert_eq!(ERRORS.load(Ordering::SeqCst), 1);

    for network in Network::ALL {
        start(network).expect("start");
    }
    assert_eq!(ERRORS.load(Ordering::SeqCst), 1);
}
