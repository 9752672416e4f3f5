// src/diag.rs
//! Diagnostics sink passed down the pipeline.
//! Frontends implement this to surface what the heuristics decided.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        })
    }
}

pub trait Diagnostics {
    /// Called at the start with the number of sheets in the workbook.
    fn begin(&mut self, _total: usize) {}

    /// Free-form note about a decision or a fallback.
    fn note(&mut self, _level: Level, _msg: &str) {}

    /// Called when one sheet has been turned into a client record (or skipped).
    fn sheet_done(&mut self, _sheet: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}

    fn debug(&mut self, msg: &str) { self.note(Level::Debug, msg) }
    fn info(&mut self, msg: &str) { self.note(Level::Info, msg) }
    fn warn(&mut self, msg: &str) { self.note(Level::Warn, msg) }
    fn error(&mut self, msg: &str) { self.note(Level::Error, msg) }
}

/// Discards everything.
pub struct NullDiagnostics;
impl Diagnostics for NullDiagnostics {}

/// Forwards notes to `tracing`; what reaches stderr is up to the subscriber.
#[derive(Default)]
pub struct TracingDiagnostics {
    total: usize,
    done: usize,
}

impl Diagnostics for TracingDiagnostics {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        logf!("workbook has {total} sheet(s)");
    }

    fn note(&mut self, level: Level, msg: &str) {
        match level {
            Level::Debug => logd!("{msg}"),
            Level::Info => logf!("{msg}"),
            Level::Warn => tracing::warn!("{msg}"),
            Level::Error => loge!("{msg}"),
        }
    }

    fn sheet_done(&mut self, sheet: &str) {
        self.done += 1;
        logd!("[{}/{}] {sheet}", self.done, self.total);
    }

    fn finish(&mut self) {
        logf!("done, {} sheet(s) visited", self.done);
    }
}

/// Keeps every note in memory. Used by tests.
#[derive(Clone, Debug, Default)]
pub struct Collector {
    pub total: usize,
    pub sheets: Vec<String>,
    pub notes: Vec<(Level, String)>,
    pub finished: bool,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.notes.iter().any(|(_, m)| m.contains(needle))
    }
}

impl Diagnostics for Collector {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn note(&mut self, level: Level, msg: &str) {
        self.notes.push((level, msg.to_string()));
    }

    fn sheet_done(&mut self, sheet: &str) {
        self.sheets.push(sheet.to_string());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_keeps_levels_and_order() {
        let mut c = Collector::new();
        c.debug("resolver built");
        c.warn("no category matched");
        c.sheet_done("A");
        c.finish();
        assert_eq!(c.notes, vec![(Level::Debug, s!("resolver built")), (Level::Warn, s!("no category matched"))]);
        assert!(c.contains("resolver"));
        assert_eq!(c.sheets, vec!["A"]);
        assert!(c.finished);
    }
}
