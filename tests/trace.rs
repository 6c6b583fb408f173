use std::sync::Mutex;

use exprtree::interpreter::parser::{core::Parser, trace::TRACE_TARGET};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Collector {
    records: Mutex<Vec<String>>,
}

impl Log for Collector {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == TRACE_TARGET && metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static COLLECTOR: Collector = Collector { records: Mutex::new(Vec::new()) };

fn take_records() -> Vec<String> {
    std::mem::take(&mut *COLLECTOR.records.lock().unwrap())
}

// A single test owns the global logger so records from different parses never
// interleave.
#[test]
fn trace_mode_records_rules_without_changing_the_tree() {
    log::set_logger(&COLLECTOR).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let quiet = Parser::new("12 * (5 - 6)").parse().unwrap();
    assert!(take_records().is_empty());

    let traced = Parser::new("12 * (5 - 6)").debug(true).parse().unwrap();
    let records = take_records();

    assert_eq!(quiet, traced);
    assert_eq!(records.first().map(|r| r.trim()), Some("enter   expr, LT(1)=NUMBER 12"));
    assert_eq!(records.last().map(|r| r.trim()), Some("exit    expr, LT(1)=EOF end of input"));

    let consumed = records.iter().filter(|r| r.trim_start().starts_with("consume")).count();
    assert_eq!(consumed, 7);

    let entered = records.iter().filter(|r| r.trim_start().starts_with("enter")).count();
    let exited = records.iter().filter(|r| r.trim_start().starts_with("exit")).count();
    assert_eq!(entered, exited);
    assert!(records.iter().any(|r| r.contains("consume RPAREN ')' at 11..12")));

    assert!(Parser::new("(1 +").debug(true).parse().is_err());
    assert!(!take_records().is_empty());
}
